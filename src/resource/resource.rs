// ABOUTME: Defines Resource - a resource collection (the type as a whole)
// ABOUTME: or an owned resource instance sharing its collection's name.

use serde::{Deserialize, Serialize};

use crate::entity::Actor;
use crate::scope::Scope;

/// A resource type considered as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceCollection {
    pub name: String,
    pub scope: String,
}

/// One identified, owned occurrence of a resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceInstance {
    /// Name of the collection this instance belongs to.
    pub name: String,
    pub scope: String,
    pub id: String,
    /// Identifier of the entity that owns this instance.
    pub owner: String,
}

/// The target of a permission check.
///
/// Grant lookup goes by [`Resource::name`], which is the collection name for
/// both variants. Only instances can be owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resource {
    Collection(ResourceCollection),
    Instance(ResourceInstance),
}

impl Resource {
    /// Create a collection in the global scope.
    pub fn collection(name: impl Into<String>) -> Self {
        Resource::Collection(ResourceCollection {
            name: name.into(),
            scope: Scope::GLOBAL.to_string(),
        })
    }

    /// Create an instance in the global scope.
    pub fn instance(
        name: impl Into<String>,
        id: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Resource::Instance(ResourceInstance {
            name: name.into(),
            scope: Scope::GLOBAL.to_string(),
            id: id.into(),
            owner: owner.into(),
        })
    }

    /// Create an instance of this resource's collection, owned by `owner`.
    ///
    /// Name and scope are copied from `self`; `owner.id()` becomes the owner.
    pub fn instance_of(&self, id: impl Into<String>, owner: &Actor) -> Self {
        Resource::Instance(ResourceInstance {
            name: self.name().to_string(),
            scope: self.scope().to_string(),
            id: id.into(),
            owner: owner.id().to_string(),
        })
    }

    /// Move this resource into a scope.
    pub fn in_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        match &mut self {
            Resource::Collection(c) => c.scope = scope,
            Resource::Instance(i) => i.scope = scope,
        }
        self
    }

    pub fn name(&self) -> &str {
        match self {
            Resource::Collection(c) => &c.name,
            Resource::Instance(i) => &i.name,
        }
    }

    pub fn scope(&self) -> &str {
        match self {
            Resource::Collection(c) => &c.scope,
            Resource::Instance(i) => &i.scope,
        }
    }

    /// Instance id, or `None` for a collection.
    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::Collection(_) => None,
            Resource::Instance(i) => Some(&i.id),
        }
    }

    /// Owner identifier, or `None` for a collection.
    pub fn owner(&self) -> Option<&str> {
        match self {
            Resource::Collection(_) => None,
            Resource::Instance(i) => Some(&i.owner),
        }
    }

    pub fn is_instance(&self) -> bool {
        matches!(self, Resource::Instance(_))
    }

    /// Whether `identifier` owns this resource. Always false for collections.
    pub fn is_owned_by(&self, identifier: &str) -> bool {
        self.owner() == Some(identifier)
    }
}

impl From<ResourceCollection> for Resource {
    fn from(collection: ResourceCollection) -> Self {
        Resource::Collection(collection)
    }
}

impl From<ResourceInstance> for Resource {
    fn from(instance: ResourceInstance) -> Self {
        Resource::Instance(instance)
    }
}
