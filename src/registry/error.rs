//! registry error types

use thiserror::Error;

/// error returned by registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// no unit with the requested id; carries near-miss suggestions
    /// computed from the registered ids and aliases
    #[error("no unit registered with id \"{id}\"")]
    NotFound {
        id: String,
        suggestions: Vec<String>,
    },
    /// no unit with the requested alias; carries near-miss suggestions
    #[error("no unit registered with alias \"{alias}\"")]
    AliasNotFound {
        alias: String,
        suggestions: Vec<String>,
    },
    #[error("a unit with id \"{0}\" is already registered")]
    DuplicateId(String),
}

impl RegistryError {
    pub fn not_found(id: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::NotFound {
            id: id.into(),
            suggestions,
        }
    }

    pub fn alias_not_found(alias: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::AliasNotFound {
            alias: alias.into(),
            suggestions,
        }
    }

    /// suggested alternatives for a failed lookup, best match first
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::NotFound { suggestions, .. } => suggestions,
            Self::AliasNotFound { suggestions, .. } => suggestions,
            Self::DuplicateId(_) => &[],
        }
    }
}
