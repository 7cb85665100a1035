// CommandInvoker - Binds slots to commands and keeps the rollback history

use crate::command::history::{Direction, History, HistoryEntry};
use crate::command::trait_def::{CommandError, CommandResult, ReversibleCommand};
use crate::config::{InvokerConfig, UnknownSlotPolicy};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Outcome of `invoke` / `invoke_inverse`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// The command ran and an entry was appended to the history
    Recorded,
    /// Nothing is bound to the slot; nothing ran, history unchanged
    UnknownSlot,
}

/// Outcome of `rollback_last`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rollback {
    /// The entry was consumed and its opposite direction was run
    RolledBack(HistoryEntry),
    /// The history was empty; nothing ran
    EmptyHistory,
}

/// Invokes named commands and rolls back the most recent invocation
///
/// The invoker owns two things:
/// - Slots: a map from name to the command currently bound to it
/// - History: every successful `invoke` / `invoke_inverse`, in order
///
/// Rolling back pops the most recent entry and runs the opposite half of
/// whatever command is bound to that slot *now*. Rollback is one-shot: the
/// consumed entry is never pushed anywhere, so there is no redo.
///
/// # Example
/// ```
/// use remote_invoker::command::{CommandInvoker, Invocation};
/// use remote_invoker::device::{Light, LightOnCommand};
/// use std::sync::{Arc, Mutex};
///
/// let light = Arc::new(Mutex::new(Light::new("Lamp", "Office")));
/// let mut invoker = CommandInvoker::new();
/// invoker.register("power", LightOnCommand::new(light.clone()));
///
/// assert_eq!(invoker.invoke("power").unwrap(), Invocation::Recorded);
/// assert!(light.lock().unwrap().is_on());
///
/// invoker.rollback_last().unwrap();
/// assert!(!light.lock().unwrap().is_on());
/// ```
pub struct CommandInvoker {
    slots: HashMap<String, Box<dyn ReversibleCommand>>,
    history: History,
    unknown_slot: UnknownSlotPolicy,
}

impl CommandInvoker {
    /// Create an invoker with an unbounded history that ignores unknown slots
    pub fn new() -> Self {
        Self::with_config(&InvokerConfig::default())
    }

    /// Create an invoker from configuration
    pub fn with_config(config: &InvokerConfig) -> Self {
        Self {
            slots: HashMap::new(),
            history: History::with_max_len(config.max_history),
            unknown_slot: config.unknown_slot,
        }
    }

    /// Bind `command` to `name`, replacing any previous binding
    pub fn register<C>(&mut self, name: impl Into<String>, command: C)
    where
        C: ReversibleCommand + 'static,
    {
        let name = name.into();
        debug!(slot = %name, command = %command.description(), "registering slot");
        if self.slots.insert(name.clone(), Box::new(command)).is_some() {
            debug!(slot = %name, "previous binding replaced");
        }
    }

    /// Run `apply()` on the command bound to `name` and record it
    ///
    /// # Errors
    /// Returns the command's own error if `apply()` fails (nothing is
    /// recorded), or `UnknownSlot` when the reject policy is configured.
    pub fn invoke(&mut self, name: &str) -> CommandResult<Invocation> {
        self.run(name, Direction::Forward)
    }

    /// Run `invert()` on the command bound to `name` and record it
    ///
    /// # Errors
    /// Same as [`CommandInvoker::invoke`].
    pub fn invoke_inverse(&mut self, name: &str) -> CommandResult<Invocation> {
        self.run(name, Direction::Backward)
    }

    fn run(&mut self, name: &str, direction: Direction) -> CommandResult<Invocation> {
        let Some(command) = self.slots.get_mut(name) else {
            return match self.unknown_slot {
                UnknownSlotPolicy::Ignore => {
                    debug!(slot = name, %direction, "ignoring unregistered slot");
                    Ok(Invocation::UnknownSlot)
                }
                UnknownSlotPolicy::Reject => {
                    warn!(slot = name, %direction, "rejecting unregistered slot");
                    Err(CommandError::UnknownSlot(name.to_string()))
                }
            };
        };

        if let Err(e) = run_direction(command.as_mut(), direction) {
            warn!(slot = name, %direction, error = %e, "command failed");
            return Err(e);
        }

        debug!(slot = name, %direction, command = %command.description(), "invoked");
        if let Some(dropped) = self.history.push(HistoryEntry::new(name, direction)) {
            debug!(slot = %dropped.slot, "history full, oldest entry discarded");
        }

        Ok(Invocation::Recorded)
    }

    /// Undo the most recent invocation
    ///
    /// A Forward entry is undone with `invert()`, a Backward one with
    /// `apply()`. The entry is consumed either way.
    ///
    /// # Errors
    /// If the command fails the entry is put back and the error returned.
    pub fn rollback_last(&mut self) -> CommandResult<Rollback> {
        let Some(entry) = self.history.pop() else {
            debug!("rollback requested on empty history");
            return Ok(Rollback::EmptyHistory);
        };

        let Some(command) = self.slots.get_mut(&entry.slot) else {
            let slot = entry.slot.clone();
            self.history.push(entry);
            return Err(CommandError::UnknownSlot(slot));
        };

        let direction = entry.direction.opposite();
        if let Err(e) = run_direction(command.as_mut(), direction) {
            warn!(slot = %entry.slot, %direction, error = %e, "rollback failed");
            self.history.push(entry);
            return Err(e);
        }

        debug!(slot = %entry.slot, %direction, remaining = self.history.len(), "rolled back");
        Ok(Rollback::RolledBack(entry))
    }

    /// Check if there is anything to roll back
    pub fn can_rollback(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of recorded invocations
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Most recent entry, if any
    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    /// Recorded entries, oldest first
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Describe what the next rollback would run, e.g. "invert: Turn on Lamp"
    pub fn rollback_description(&self) -> Option<String> {
        let entry = self.history.last()?;
        let command = self.slots.get(&entry.slot)?;
        Some(format!(
            "{}: {}",
            entry.direction.opposite(),
            command.description()
        ))
    }

    /// Forget all history without touching any receiver
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Registered slot names, sorted
    pub fn slot_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandInvoker {
    fn default() -> Self {
        Self::new()
    }
}

fn run_direction(command: &mut dyn ReversibleCommand, direction: Direction) -> CommandResult<()> {
    match direction {
        Direction::Forward => command.apply(),
        Direction::Backward => command.invert(),
    }
}
