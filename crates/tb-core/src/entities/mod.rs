//! Entity structs for Taskboard domain objects.
//!
//! `Task` maps to the `tasks` table. `TransactionEntry` and `TaskStats` are
//! derived views with no table of their own. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod new_task;
mod stats;
mod task;
mod transaction;

pub use new_task::NewTask;
pub use stats::TaskStats;
pub use task::{DEFAULT_REWARD_TOKEN, Reward, Task};
pub use transaction::TransactionEntry;
