pub mod dispatch;
pub mod history;
pub mod serve;
pub mod shared;
pub mod task;
