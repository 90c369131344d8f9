// ABOUTME: Defines the grant vocabulary - grant types, actions, and grant sets.
// ABOUTME: Presets cover the named combinations (All, None, Private, ...).

use serde::{Deserialize, Serialize};

/// The privilege level granted for one action on one resource type.
///
/// The three values are not ordered; they only mean something through the
/// evaluation rule in [`crate::entity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrantType {
    /// The action is never permitted.
    #[default]
    None,
    /// The action is permitted on instances the acting entity owns.
    Own,
    /// The action is permitted on any instance and on the collection.
    Any,
}

impl GrantType {
    /// Token used in scope strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::None => "none",
            GrantType::Own => "own",
            GrantType::Any => "any",
        }
    }

    /// Parse a scope-string token. Tokens are case-sensitive.
    pub fn parse(token: &str) -> Option<GrantType> {
        match token {
            "none" => Some(GrantType::None),
            "own" => Some(GrantType::Own),
            "any" => Some(GrantType::Any),
            _ => None,
        }
    }
}

impl std::fmt::Display for GrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action an entity may perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    /// Every action, in serialization order.
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    /// Token used in scope strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    /// Parse a scope-string token. Tokens are case-sensitive.
    pub fn parse(token: &str) -> Option<Action> {
        match token {
            "create" => Some(Action::Create),
            "read" => Some(Action::Read),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four grants for a single resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GrantSet {
    pub create: GrantType,
    pub read: GrantType,
    pub update: GrantType,
    pub delete: GrantType,
}

impl GrantSet {
    /// Create a grant set from explicit grants, in `create, read, update, delete` order.
    pub const fn new(
        create: GrantType,
        read: GrantType,
        update: GrantType,
        delete: GrantType,
    ) -> Self {
        Self {
            create,
            read,
            update,
            delete,
        }
    }

    /// Every action on any instance.
    pub const fn all() -> Self {
        Self::new(GrantType::Any, GrantType::Any, GrantType::Any, GrantType::Any)
    }

    /// Nothing at all.
    pub const fn none() -> Self {
        Self::new(
            GrantType::None,
            GrantType::None,
            GrantType::None,
            GrantType::None,
        )
    }

    /// Every action, but only on owned instances.
    pub const fn private() -> Self {
        Self::new(GrantType::Own, GrantType::Own, GrantType::Own, GrantType::Own)
    }

    /// Anyone may read; only the owner may create, update, or delete.
    pub const fn protected() -> Self {
        Self::new(GrantType::Own, GrantType::Any, GrantType::Own, GrantType::Own)
    }

    /// Everything except delete.
    pub const fn public() -> Self {
        Self::new(GrantType::Any, GrantType::Any, GrantType::Any, GrantType::None)
    }

    /// Read only.
    pub const fn read_only() -> Self {
        Self::new(
            GrantType::None,
            GrantType::Any,
            GrantType::None,
            GrantType::None,
        )
    }

    /// The grant for an action.
    pub fn grant(&self, action: Action) -> GrantType {
        match action {
            Action::Create => self.create,
            Action::Read => self.read,
            Action::Update => self.update,
            Action::Delete => self.delete,
        }
    }

    /// A copy of this set with one action's grant replaced.
    pub fn with(mut self, action: Action, grant: GrantType) -> Self {
        match action {
            Action::Create => self.create = grant,
            Action::Read => self.read = grant,
            Action::Update => self.update = grant,
            Action::Delete => self.delete = grant,
        }
        self
    }

    /// Iterate `(action, grant)` pairs in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, GrantType)> + '_ {
        Action::ALL
            .into_iter()
            .map(move |action| (action, self.grant(action)))
    }
}
