// ABOUTME: Defines PolicyConfig - collectives declared as JSON data with
// ABOUTME: scope-string permissions and single-parent inheritance.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::Collective;
use crate::error::ConfigError;
use crate::permission::parse_permissions_list;

/// A policy document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub collectives: Vec<CollectiveConfig>,
}

/// One collective declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectiveConfig {
    pub name: String,

    /// Name of a previously declared collective to inherit from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,

    /// Scope override. Defaults to the base's scope, or global.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Scope strings, e.g. `"accounts.read.any"`.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CollectiveConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inherits: None,
            scope: None,
            permissions: Vec::new(),
        }
    }

    pub fn inherits(mut self, base: impl Into<String>) -> Self {
        self.inherits = Some(base.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }
}

impl PolicyConfig {
    /// Parse a policy document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a policy document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build every declared collective, in declaration order.
    ///
    /// A base must be declared before the collectives that inherit from it.
    pub fn build(&self) -> Result<Collectives, ConfigError> {
        let mut built = Collectives::default();

        for declared in &self.collectives {
            if built.get(&declared.name).is_some() {
                return Err(ConfigError::DuplicateCollective(declared.name.clone()));
            }

            let permissions = parse_permissions_list(&declared.permissions)?;
            let collective = match &declared.inherits {
                Some(base) => {
                    let base = built.get(base).ok_or_else(|| ConfigError::UnknownBase {
                        collective: declared.name.clone(),
                        base: base.clone(),
                    })?;
                    Collective::inherit_from(
                        base,
                        declared.name.as_str(),
                        permissions,
                        declared.scope.as_deref(),
                    )
                }
                None => {
                    let collective = Collective::new(declared.name.as_str(), permissions);
                    match &declared.scope {
                        Some(scope) => collective.in_scope(scope.as_str()),
                        None => collective,
                    }
                }
            };
            built.insert(collective);
        }

        tracing::debug!(collectives = built.len(), "built policy config");
        Ok(built)
    }
}

/// Built collectives, indexed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collectives {
    order: Vec<Collective>,
    index: HashMap<String, usize>,
}

impl Collectives {
    fn insert(&mut self, collective: Collective) {
        self.index
            .insert(collective.name().to_string(), self.order.len());
        self.order.push(collective);
    }

    pub fn get(&self, name: &str) -> Option<&Collective> {
        self.index.get(name).map(|&slot| &self.order[slot])
    }

    /// Names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(Collective::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collective> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
