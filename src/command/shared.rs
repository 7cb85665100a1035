// SharedInvoker - Thread-safe handle around a CommandInvoker
//
// Slots and history sit behind the same mutex, so a rollback always pairs
// the most recent entry with the command bound to that slot at that moment.

use crate::command::manager::{CommandInvoker, Invocation, Rollback};
use crate::command::trait_def::{CommandError, CommandResult, ReversibleCommand};
use crate::config::InvokerConfig;
use std::sync::{Arc, Mutex, MutexGuard};

/// Clonable, thread-safe handle to one invoker
#[derive(Clone, Default)]
pub struct SharedInvoker {
    inner: Arc<Mutex<CommandInvoker>>,
}

impl SharedInvoker {
    pub fn new(invoker: CommandInvoker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(invoker)),
        }
    }

    pub fn with_config(config: &InvokerConfig) -> Self {
        Self::new(CommandInvoker::with_config(config))
    }

    fn lock(&self) -> CommandResult<MutexGuard<'_, CommandInvoker>> {
        self.inner.lock().map_err(|_| CommandError::LockPoisoned)
    }

    pub fn register<C>(&self, name: impl Into<String>, command: C) -> CommandResult<()>
    where
        C: ReversibleCommand + 'static,
    {
        self.lock()?.register(name, command);
        Ok(())
    }

    pub fn invoke(&self, name: &str) -> CommandResult<Invocation> {
        self.lock()?.invoke(name)
    }

    pub fn invoke_inverse(&self, name: &str) -> CommandResult<Invocation> {
        self.lock()?.invoke_inverse(name)
    }

    pub fn rollback_last(&self) -> CommandResult<Rollback> {
        self.lock()?.rollback_last()
    }

    pub fn history_len(&self) -> CommandResult<usize> {
        Ok(self.lock()?.history_len())
    }

    /// Run several operations under a single lock acquisition
    pub fn with_invoker<T>(&self, f: impl FnOnce(&mut CommandInvoker) -> T) -> CommandResult<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut *guard))
    }
}
