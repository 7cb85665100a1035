// Demonstration receiver and concrete commands
//
// A smart light with on/off and colour, plus the reversible commands a
// remote control binds to its buttons. The invoker never depends on this
// module; it only sees the ReversibleCommand trait.

pub mod commands;
pub mod light;

pub use commands::{LightChangeColorCommand, LightOnCommand, LightToggleCommand};
pub use light::Light;
