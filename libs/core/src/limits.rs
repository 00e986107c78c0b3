//! Count and size budgets applied by the validator.
//!
//! Defaults match the limits enforced by the remote service. Deployments can override them from a
//! JSON or YAML document; missing keys keep their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{ComponentError, LimitRule};
use crate::validate::ValidationMode;

/// Top-level components allowed on a legacy message.
pub const MAX_TOP_LEVEL_LEGACY: usize = 5;
/// Components allowed in a whole tree, nested ones included.
pub const MAX_TOTAL_COMPONENTS: usize = 40;
pub const MAX_ACTION_ROW_CHILDREN: usize = 5;
pub const MAX_SECTION_CONTENT: usize = 3;
pub const MAX_MODAL_TOP_LEVEL: usize = 5;
/// Characters of message content in legacy mode.
pub const MAX_CONTENT_LENGTH: usize = 2000;
/// Characters across all components in extended mode.
pub const MAX_CONTENT_LENGTH_EXTENDED: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentLimits {
    pub max_top_level_legacy: usize,
    pub max_total_components: usize,
    pub max_action_row_children: usize,
    pub max_section_content: usize,
    pub max_modal_top_level: usize,
    pub max_content_length_legacy: usize,
    pub max_content_length_extended: usize,
}

impl Default for ComponentLimits {
    fn default() -> Self {
        Self {
            max_top_level_legacy: MAX_TOP_LEVEL_LEGACY,
            max_total_components: MAX_TOTAL_COMPONENTS,
            max_action_row_children: MAX_ACTION_ROW_CHILDREN,
            max_section_content: MAX_SECTION_CONTENT,
            max_modal_top_level: MAX_MODAL_TOP_LEVEL,
            max_content_length_legacy: MAX_CONTENT_LENGTH,
            max_content_length_extended: MAX_CONTENT_LENGTH_EXTENDED,
        }
    }
}

impl ComponentLimits {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parse component limits from json")
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        serde_yaml_bw::from_str(raw).context("parse component limits from yaml")
    }

    /// Textual budget of a message in `mode`.
    pub fn content_limit(&self, mode: ValidationMode) -> usize {
        match mode {
            ValidationMode::Legacy => self.max_content_length_legacy,
            ValidationMode::Extended => self.max_content_length_extended,
        }
    }

    /// Checks a character count against the textual budget of `mode`.
    ///
    /// The tree validator never counts text; message assemblers call this with the content
    /// length (legacy) or [`ComponentTree::text_length`](crate::ComponentTree::text_length)
    /// (extended).
    pub fn check_content_length(
        &self,
        mode: ValidationMode,
        length: usize,
    ) -> Result<(), ComponentError> {
        let limit = self.content_limit(mode);
        if length > limit {
            return Err(ComponentError::StructuralLimitExceeded {
                rule: LimitRule::ContentLength,
                observed: length,
                limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_limits() {
        let limits = ComponentLimits::default();
        assert_eq!(limits.max_top_level_legacy, 5);
        assert_eq!(limits.max_total_components, 40);
        assert_eq!(limits.content_limit(ValidationMode::Legacy), 2000);
        assert_eq!(limits.content_limit(ValidationMode::Extended), 4000);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let limits = ComponentLimits::from_yaml_str("max_total_components: 25\n").unwrap();
        assert_eq!(limits.max_total_components, 25);
        assert_eq!(limits.max_top_level_legacy, 5);
    }

    #[test]
    fn json_overrides_apply() {
        let limits = ComponentLimits::from_json_str(r#"{"max_action_row_children": 3}"#).unwrap();
        assert_eq!(limits.max_action_row_children, 3);
        assert_eq!(limits.max_section_content, 3);
    }

    #[test]
    fn malformed_config_reports_context() {
        let err = ComponentLimits::from_json_str("{").unwrap_err();
        assert!(err.to_string().contains("component limits"), "{err}");
    }

    #[test]
    fn content_budget_depends_on_mode() {
        let limits = ComponentLimits::default();
        assert!(limits.check_content_length(ValidationMode::Extended, 3000).is_ok());
        assert_eq!(
            limits.check_content_length(ValidationMode::Legacy, 3000),
            Err(ComponentError::StructuralLimitExceeded {
                rule: LimitRule::ContentLength,
                observed: 3000,
                limit: 2000,
            })
        );
    }
}
