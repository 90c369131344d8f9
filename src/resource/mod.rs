// ABOUTME: Resource module - collections and owned instances.
// ABOUTME: The target half of every permission check.

mod resource;

pub use resource::*;

#[cfg(test)]
mod resource_test;
