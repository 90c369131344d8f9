// ABOUTME: Permission module - named grant sets and their scope-string codec.
// ABOUTME: Scope strings are the persisted/transmitted form of a policy.

mod codec;
mod permission;

pub use codec::*;
pub use permission::*;

#[cfg(test)]
mod codec_test;
