// Concrete light commands

use crate::command::trait_def::{CommandError, CommandResult, ReversibleCommand};
use crate::device::light::Light;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock_light(light: &Arc<Mutex<Light>>) -> CommandResult<MutexGuard<'_, Light>> {
    light
        .lock()
        .map_err(|_| CommandError::ReceiverUnavailable("light lock poisoned".into()))
}

/// Command to switch a light on
///
/// `invert()` switches it off.
pub struct LightOnCommand {
    light: Arc<Mutex<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Arc<Mutex<Light>>) -> Self {
        Self { light }
    }
}

impl ReversibleCommand for LightOnCommand {
    fn apply(&mut self) -> CommandResult<()> {
        lock_light(&self.light)?.turn_on();
        Ok(())
    }

    fn invert(&mut self) -> CommandResult<()> {
        lock_light(&self.light)?.turn_off();
        Ok(())
    }

    fn description(&self) -> String {
        match lock_light(&self.light) {
            Ok(light) => format!("Turn on {} ({})", light.name(), light.room()),
            Err(_) => "Turn on light".to_string(),
        }
    }
}

/// Command to flip a light
///
/// `apply()` remembers the state it flipped away from; `invert()` puts that
/// state back (or flips, if nothing was remembered yet) and remembers the
/// state it replaced, so repeated apply/invert pairs stay exact.
pub struct LightToggleCommand {
    light: Arc<Mutex<Light>>,
    previous: Option<bool>,
}

impl LightToggleCommand {
    pub fn new(light: Arc<Mutex<Light>>) -> Self {
        Self {
            light,
            previous: None,
        }
    }
}

impl ReversibleCommand for LightToggleCommand {
    fn apply(&mut self) -> CommandResult<()> {
        let was_on = lock_light(&self.light)?.toggle();
        self.previous = Some(was_on);
        Ok(())
    }

    fn invert(&mut self) -> CommandResult<()> {
        let mut light = lock_light(&self.light)?;
        let current = light.is_on();
        light.set_on(self.previous.unwrap_or(!current));
        self.previous = Some(current);
        Ok(())
    }

    fn description(&self) -> String {
        match lock_light(&self.light) {
            Ok(light) => format!("Toggle {} ({})", light.name(), light.room()),
            Err(_) => "Toggle light".to_string(),
        }
    }
}

/// Command to change a light's colour
///
/// Stores the colour the light had when `apply()` last ran, so `invert()`
/// restores exactly that one even if the light was repainted in between.
pub struct LightChangeColorCommand {
    light: Arc<Mutex<Light>>,
    new_color: String,
    old_color: String,
}

impl LightChangeColorCommand {
    /// Create a command that paints `light` with `color`
    ///
    /// Until the first `apply()`, the colour to restore is the one the
    /// light has right now.
    pub fn new(light: Arc<Mutex<Light>>, color: impl Into<String>) -> CommandResult<Self> {
        let old_color = lock_light(&light)?.color().to_string();
        Ok(Self {
            light,
            new_color: color.into(),
            old_color,
        })
    }
}

impl ReversibleCommand for LightChangeColorCommand {
    fn apply(&mut self) -> CommandResult<()> {
        let mut light = lock_light(&self.light)?;
        // Store old value for invert
        self.old_color = light.color().to_string();
        light.change_color(self.new_color.clone());
        Ok(())
    }

    fn invert(&mut self) -> CommandResult<()> {
        lock_light(&self.light)?.change_color(self.old_color.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set colour to {}", self.new_color)
    }
}
