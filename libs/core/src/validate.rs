//! Structural validation of component trees.
//!
//! A tree is checked against one of two regimes. Legacy messages carry at most a handful of
//! action rows at the top level; extended (components v2) messages lift the top-level limit but
//! cap the number of components across the whole tree. Validation either accepts the whole tree
//! or returns the first violated rule.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::components::{AnyComponent, Component, ComponentType, Slot};
use crate::error::{ComponentError, LimitRule};
use crate::flags::MessageFlag;
use crate::limits::ComponentLimits;
use crate::tree::{ComponentTree, RootKind, TreeRoot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Legacy,
    Extended,
}

impl ValidationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationMode::Legacy => "legacy",
            ValidationMode::Extended => "extended",
        }
    }

    pub fn is_extended(self) -> bool {
        matches!(self, ValidationMode::Extended)
    }

    pub fn from_components_v2(enabled: bool) -> Self {
        if enabled {
            ValidationMode::Extended
        } else {
            ValidationMode::Legacy
        }
    }

    /// Extended iff the flag set carries [`MessageFlag::IsComponentsV2`].
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<MessageFlag>,
    {
        Self::from_components_v2(
            flags
                .into_iter()
                .any(|flag| *flag.borrow() == MessageFlag::IsComponentsV2),
        )
    }

    pub fn from_bitfield(bitfield: u64) -> Self {
        Self::from_components_v2(bitfield & MessageFlag::IsComponentsV2.value() != 0)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ComponentLimits,
}

impl Validator {
    pub fn new(limits: ComponentLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ComponentLimits {
        &self.limits
    }

    /// Checks `tree` in `mode`. Never mutates the tree.
    #[instrument(skip_all, fields(mode = %mode, root = %R::KIND, components = tree.len()))]
    pub fn validate<R: TreeRoot>(
        &self,
        tree: &ComponentTree<R>,
        mode: ValidationMode,
    ) -> Result<(), ComponentError> {
        self.check(tree, mode).inspect_err(|err| {
            warn!(rule = err.label(), error = %err, "component tree rejected");
            counter!("component_validation_failures_total", "rule" => err.label()).increment(1);
        })
    }

    fn check<R: TreeRoot>(
        &self,
        tree: &ComponentTree<R>,
        mode: ValidationMode,
    ) -> Result<(), ComponentError> {
        if let Some(limit) = self.top_level_limit(R::KIND, mode) {
            within(LimitRule::TopLevelCount, tree.len(), limit)?;
        }
        if mode.is_extended() || R::KIND == RootKind::Modal {
            within(
                LimitRule::TotalComponentCount,
                tree.len_total(),
                self.limits.max_total_components,
            )?;
        }

        let top = R::KIND.top_level_slot();
        let mut pending: Vec<(Slot, &AnyComponent)> = tree
            .components()
            .iter()
            .rev()
            .map(|component| (top, component))
            .collect();
        while let Some((slot, component)) = pending.pop() {
            self.check_node::<R>(slot, component, mode)?;
            pending.extend(component.children_with_slots().into_iter().rev());
        }

        let mut seen = HashSet::new();
        for component in tree.nodes() {
            let id = assigned_id(component)?;
            if id != 0 && !seen.insert(id) {
                return Err(ComponentError::DuplicateIdentifier { id });
            }
        }
        Ok(())
    }

    fn top_level_limit(&self, root: RootKind, mode: ValidationMode) -> Option<usize> {
        match (root, mode) {
            (RootKind::Modal, _) => Some(self.limits.max_modal_top_level),
            (RootKind::Message, ValidationMode::Legacy) => Some(self.limits.max_top_level_legacy),
            (RootKind::Message, ValidationMode::Extended) => None,
        }
    }

    fn check_node<R: TreeRoot>(
        &self,
        slot: Slot,
        component: &AnyComponent,
        mode: ValidationMode,
    ) -> Result<(), ComponentError> {
        let kind = component.component_type();
        // Legacy messages only know rows of interactive components at the top.
        let legacy_top = slot == Slot::MessageTopLevel
            && mode == ValidationMode::Legacy
            && !matches!(kind, ComponentType::ActionRow | ComponentType::Unknown(_));
        if legacy_top || !kind.fits(slot) {
            return Err(ComponentError::IllegalPlacement {
                component: kind,
                slot,
                mode,
            });
        }
        if !R::KIND.accepts(kind) {
            return Err(ComponentError::IncompatibleComponent {
                component: kind,
                context: R::KIND,
            });
        }

        match component {
            AnyComponent::ActionRow(row) => {
                let count = row.components.len();
                if count == 0 {
                    return Err(ComponentError::EmptyComponent { component: kind });
                }
                within(
                    LimitRule::ActionRowChildren,
                    count,
                    self.limits.max_action_row_children,
                )?;
                let has_select = row
                    .components
                    .iter()
                    .any(|child| child.component_type().is_select_menu());
                if has_select {
                    within(LimitRule::SelectMenuRow, count, 1)?;
                }
            }
            AnyComponent::Section(section) => {
                let count = section.components.len();
                if count == 0 {
                    return Err(ComponentError::EmptyComponent { component: kind });
                }
                within(
                    LimitRule::SectionContent,
                    count,
                    self.limits.max_section_content,
                )?;
            }
            _ => {}
        }
        Ok(())
    }
}

/// Unknown components are keyed on their raw `id`, which may not fit the typed `i32`.
fn assigned_id(component: &AnyComponent) -> Result<i64, ComponentError> {
    match component {
        AnyComponent::Unknown(unknown) => Ok(unknown.raw_unique_id()?.unwrap_or(0)),
        other => Ok(i64::from(other.unique_id())),
    }
}

fn within(rule: LimitRule, observed: usize, limit: usize) -> Result<(), ComponentError> {
    if observed > limit {
        return Err(ComponentError::StructuralLimitExceeded {
            rule,
            observed,
            limit,
        });
    }
    Ok(())
}
