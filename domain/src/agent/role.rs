//! Role value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Name of a generation role (e.g. `BuildFast`, `Stillness`, `ZenJudge`).
///
/// Which model serves a role is provider configuration; the domain only
/// cares that the name is well-formed and unique within a panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(String);

impl Role {
    pub const BUILD_FAST: &'static str = "BuildFast";
    pub const STILLNESS: &'static str = "Stillness";
    pub const ZEN_JUDGE: &'static str = "ZenJudge";

    /// Create a role, rejecting empty names and names containing whitespace
    /// or placeholder delimiters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let malformed = name.is_empty()
            || name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | ':'));
        if malformed {
            return Err(DomainError::InvalidRole(name));
        }
        Ok(Self(name))
    }

    pub fn build_fast() -> Self {
        Self(Self::BUILD_FAST.to_string())
    }

    pub fn stillness() -> Self {
        Self(Self::STILLNESS.to_string())
    }

    pub fn zen_judge() -> Self {
        Self(Self::ZEN_JUDGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::new(s)
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Role::new(s)
    }
}

impl From<Role> for String {
    fn from(r: Role) -> Self {
        r.0
    }
}
