// Remote Invoker - Library exports for the demo binary, tests and benchmarks

pub mod command;
pub mod config;
pub mod device;
pub mod logging;

// Re-export commonly used types for convenience
pub use command::{
    CommandError, CommandInvoker, CommandResult, Direction, HistoryEntry, Invocation,
    ReversibleCommand, Rollback, SharedInvoker,
};
pub use config::{ConfigError, InvokerConfig, UnknownSlotPolicy};
pub use device::{Light, LightChangeColorCommand, LightOnCommand, LightToggleCommand};
