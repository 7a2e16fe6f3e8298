pub mod caller;
pub mod status;
