// ABOUTME: Root module for roba - an in-process authorization engine.
// ABOUTME: Re-exports all public types from submodules.

pub mod config;
pub mod entity;
pub mod error;
pub mod grant;
pub mod permission;
pub mod prelude;
pub mod resource;
pub mod scope;

pub use error::RobaError;
pub use permission::parse_permissions_list;
