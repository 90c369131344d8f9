// ABOUTME: Entity module - collectives, actors, and the can/cannot decision
// ABOUTME: procedure evaluated against resources.

mod entity;
mod list;
mod lookup;

pub use entity::*;
pub use list::*;
pub use lookup::*;

#[cfg(test)]
mod lookup_test;
