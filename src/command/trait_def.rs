// ReversibleCommand trait definition

use thiserror::Error;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while invoking or rolling back commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The forward action of a command failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// The inverse action of a command failed
    #[error("Undo failed: {0}")]
    UndoFailed(String),

    /// The command could not reach the receiver it acts upon
    #[error("Receiver unavailable: {0}")]
    ReceiverUnavailable(String),

    /// No command is bound to this slot (only raised under the reject policy)
    #[error("No command registered for slot '{0}'")]
    UnknownSlot(String),

    /// The lock around a shared invoker was poisoned by a panicking holder
    #[error("Invoker lock poisoned")]
    LockPoisoned,
}

/// Trait for commands that can be applied and inverted
///
/// The invoker only sequences calls; everything needed to perform the
/// inverse (a previous colour, a previous on/off state) is captured by the
/// command itself when `apply()` runs. Receivers are owned by the command,
/// the invoker never sees them.
///
/// # Thread Safety
/// Commands must be Send so an invoker can be moved behind a mutex.
///
/// # Example
/// ```
/// use remote_invoker::command::trait_def::{CommandResult, ReversibleCommand};
///
/// struct Counter {
///     value: i32,
/// }
///
/// impl ReversibleCommand for Counter {
///     fn apply(&mut self) -> CommandResult<()> {
///         self.value += 1;
///         Ok(())
///     }
///
///     fn invert(&mut self) -> CommandResult<()> {
///         self.value -= 1;
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         "Increment counter".to_string()
///     }
/// }
/// ```
pub trait ReversibleCommand: Send {
    /// Perform the forward action
    ///
    /// Must capture whatever state `invert()` needs, on every call.
    fn apply(&mut self) -> CommandResult<()>;

    /// Perform the action that undoes the most recent `apply()`
    ///
    /// Behaviour without a prior `apply()` is up to the implementation.
    fn invert(&mut self) -> CommandResult<()>;

    /// Get a human-readable description of the command
    fn description(&self) -> String;
}

impl<C: ReversibleCommand + ?Sized> ReversibleCommand for Box<C> {
    fn apply(&mut self) -> CommandResult<()> {
        (**self).apply()
    }

    fn invert(&mut self) -> CommandResult<()> {
        (**self).invert()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}
