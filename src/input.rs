//! Controller input: button tokens, trigger edges and the per-mode bindings.

mod bindings;
mod keymap;
mod trigger;

pub use bindings::{Button, Command, command_for, command_for_trigger};
pub use keymap::{KeyInput, map_key};
pub use trigger::TriggerAxes;

#[cfg(test)]
mod tests;
