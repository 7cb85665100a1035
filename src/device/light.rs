// Light - Receiver acted upon by the light commands

/// Colour a light reports before anyone changes it
pub const DEFAULT_COLOR: &str = "Default color";

/// A smart light in a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Light {
    name: String,
    room: String,
    on: bool,
    color: String,
}

impl Light {
    /// Create a light that is off and has the default colour
    pub fn new(name: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            room: room.into(),
            on: false,
            color: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn turn_on(&mut self) {
        self.on = true;
        println!("{} in the {} is ON", self.name, self.room);
    }

    pub fn turn_off(&mut self) {
        self.on = false;
        println!("{} in the {} is OFF", self.name, self.room);
    }

    /// Flip the light, returning whether it was on before
    pub fn toggle(&mut self) -> bool {
        let was_on = self.on;
        self.set_on(!was_on);
        was_on
    }

    pub fn set_on(&mut self, on: bool) {
        if on {
            self.turn_on();
        } else {
            self.turn_off();
        }
    }

    pub fn change_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        println!("{} in the {} is {}", self.name, self.room, self.color);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room(&self) -> &str {
        &self.room
    }
}
