// Command Pattern invoker with rollback history
//
// Architecture:
// - ReversibleCommand trait: apply(), invert(), description()
// - CommandInvoker: slot registry + linear history + rollback
// - SharedInvoker: the same invoker behind one mutex, for multi-threaded callers
//
// Rollback consumes the most recent history entry and runs the opposite
// half of the command currently bound to that entry's slot. There is no
// redo of a rollback.

pub mod history;
pub mod manager;
pub mod shared;
pub mod trait_def;

pub use history::{Direction, History, HistoryEntry};
pub use manager::{CommandInvoker, Invocation, Rollback};
pub use shared::SharedInvoker;
pub use trait_def::{CommandError, CommandResult, ReversibleCommand};
