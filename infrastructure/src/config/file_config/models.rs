//! Role-based model configuration from TOML (`[models]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zenbot_domain::Role;

/// Role → model mapping
///
/// # Example
///
/// ```toml
/// [models]
/// BuildFast = "gpt-4.1-mini"
/// Stillness = "gpt-4.1-mini"
/// ZenJudge = "gpt-4o"
/// ```
///
/// Role names are matched case-insensitively, because keys coming from
/// `ZENBOT_MODELS__<ROLE>` environment variables arrive lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileModelsConfig(pub BTreeMap<String, String>);

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self(BTreeMap::from([
            (Role::BUILD_FAST.to_string(), "gpt-4.1-mini".to_string()),
            (Role::STILLNESS.to_string(), "gpt-4.1-mini".to_string()),
            (Role::ZEN_JUDGE.to_string(), "gpt-4o".to_string()),
        ]))
    }
}

impl FileModelsConfig {
    /// Mapping keyed by lowercased role name.
    ///
    /// Lowercase keys sort after capitalised ones, so an environment
    /// override replaces the same role spelled in a TOML file.
    pub fn normalized(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(role, model)| (role.to_ascii_lowercase(), model.trim().to_string()))
            .collect()
    }

    pub fn model_for(&self, role: &Role) -> Option<String> {
        self.normalized()
            .remove(&role.as_str().to_ascii_lowercase())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (role, model) in &self.0 {
            if let Err(e) = Role::new(role.as_str()) {
                issues.push(ConfigIssue::error(format!("models.{}", role), e.to_string()));
            }
            if model.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    format!("models.{}", role),
                    "model name cannot be empty",
                ));
            }
        }
        issues
    }
}
