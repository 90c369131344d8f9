// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use roba::prelude::*;` to get started quickly.

pub use crate::config::{CollectiveConfig, Collectives, PolicyConfig};
pub use crate::entity::{
    Actor, Collective, EntityKind, EntitySnapshot, PermissibleEntity, PermissionsBlacklist,
    PermissionsList, PermissionsWhitelist,
};
pub use crate::error::{CodecError, ConfigError, RobaError};
pub use crate::grant::{Action, GrantSet, GrantType};
pub use crate::permission::{parse_permissions_list, Permission, ScopeString};
pub use crate::resource::{Resource, ResourceCollection, ResourceInstance};
pub use crate::scope::{Scope, ScopeList};
