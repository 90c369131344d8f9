// ABOUTME: Scope module - scope names, the matching rule, and scope lists.
// ABOUTME: "*" is the global scope and matches every resource scope.

mod rule;
mod scope_list;

pub use rule::*;
pub use scope_list::*;
