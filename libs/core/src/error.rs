use std::fmt;

use thiserror::Error;

use crate::components::{ComponentType, Slot};
use crate::tree::RootKind;
use crate::validate::ValidationMode;

/// The budget a [`ComponentError::StructuralLimitExceeded`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitRule {
    TopLevelCount,
    TotalComponentCount,
    ActionRowChildren,
    SelectMenuRow,
    SectionContent,
    ContentLength,
}

impl LimitRule {
    pub fn as_str(self) -> &'static str {
        match self {
            LimitRule::TopLevelCount => "top_level_count",
            LimitRule::TotalComponentCount => "total_component_count",
            LimitRule::ActionRowChildren => "action_row_children",
            LimitRule::SelectMenuRow => "select_menu_row",
            LimitRule::SectionContent => "section_content",
            LimitRule::ContentLength => "content_length",
        }
    }
}

impl fmt::Display for LimitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComponentError {
    #[error("{rule} exceeded: {observed} > {limit}")]
    StructuralLimitExceeded {
        rule: LimitRule,
        observed: usize,
        limit: usize,
    },
    #[error("{component} component cannot occupy the {slot} slot in {mode} mode")]
    IllegalPlacement {
        component: ComponentType,
        slot: Slot,
        mode: ValidationMode,
    },
    #[error("{component} component is not compatible with {context} trees")]
    IncompatibleComponent {
        component: ComponentType,
        context: RootKind,
    },
    #[error("{component} component must hold at least one child")]
    EmptyComponent { component: ComponentType },
    #[error("unique id {id} is assigned to more than one component")]
    DuplicateIdentifier { id: i64 },
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    #[error("invalid component input: {0}")]
    InvalidInput(String),
}

impl ComponentError {
    /// Short label used for log fields and metric tags.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentError::StructuralLimitExceeded { rule, .. } => rule.as_str(),
            ComponentError::IllegalPlacement { .. } => "illegal_placement",
            ComponentError::IncompatibleComponent { .. } => "incompatible_component",
            ComponentError::EmptyComponent { .. } => "empty_component",
            ComponentError::DuplicateIdentifier { .. } => "duplicate_identifier",
            ComponentError::UnsupportedOperation(_) => "unsupported_operation",
            ComponentError::InvalidInput(_) => "invalid_input",
        }
    }
}
