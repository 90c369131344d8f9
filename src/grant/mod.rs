// ABOUTME: Grant module - the three-valued grant type and four-action grant set.
// ABOUTME: Leaf vocabulary shared by permissions, the codec, and evaluation.

mod types;

pub use types::*;

#[cfg(test)]
mod types_test;
