// ABOUTME: Config module - declarative policy documents for collectives.
// ABOUTME: Read-only loading; built collectives are immutable values.

mod policy;

pub use policy::*;
