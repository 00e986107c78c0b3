//! Ordered top-level component sequences and their traversal.
//!
//! Traversal is depth-first, pre-order, children visited in stored order. A section's content
//! comes before its accessory. Every search below is defined in terms of [`ComponentTree::nodes`].

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::components::{
    ActionRow, AnyComponent, Button, Component, ComponentType, MessageTopLevelComponent,
    ModalTopLevelComponent, Slot, Variant,
};
use crate::error::ComponentError;
use crate::validate::{ValidationMode, Validator};

/// The kind of object owning a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    Message,
    Modal,
}

impl RootKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RootKind::Message => "message",
            RootKind::Modal => "modal",
        }
    }

    pub fn top_level_slot(self) -> Slot {
        match self {
            RootKind::Message => Slot::MessageTopLevel,
            RootKind::Modal => Slot::ModalTopLevel,
        }
    }

    /// Whether a component of this type may appear anywhere in a tree of this kind.
    pub fn accepts(self, kind: ComponentType) -> bool {
        match self {
            RootKind::Message => kind.is_message_compatible(),
            RootKind::Modal => kind.is_modal_compatible(),
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-level marker selecting which top-level slot a tree is rooted at.
pub trait TreeRoot:
    fmt::Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static
{
    const KIND: RootKind;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageRoot;

impl TreeRoot for MessageRoot {
    const KIND: RootKind = RootKind::Message;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalRoot;

impl TreeRoot for ModalRoot {
    const KIND: RootKind = RootKind::Modal;
}

/// Components that may sit at the top of a tree rooted at `R`.
pub trait TopLevelOf<R: TreeRoot>: Component + Into<AnyComponent> {}

impl<T: MessageTopLevelComponent> TopLevelOf<MessageRoot> for T {}
impl<T: ModalTopLevelComponent> TopLevelOf<ModalRoot> for T {}

pub type MessageComponentTree = ComponentTree<MessageRoot>;
pub type ModalComponentTree = ComponentTree<ModalRoot>;

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTree<R: TreeRoot> {
    components: Vec<AnyComponent>,
    root: PhantomData<R>,
}

impl<R: TreeRoot> Default for ComponentTree<R> {
    fn default() -> Self {
        Self {
            components: Vec::new(),
            root: PhantomData,
        }
    }
}

impl<R: TreeRoot> ComponentTree<R> {
    /// Builds a tree from an ordered sequence of top-level components.
    ///
    /// Nothing is checked here; call [`ComponentTree::validate`] before sending.
    pub fn of<I>(components: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AnyComponent>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
            root: PhantomData,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component that is statically known to fit this tree's top-level slot.
    pub fn with_component<C: TopLevelOf<R>>(mut self, component: C) -> Self {
        self.components.push(component.into());
        self
    }

    pub fn kind(&self) -> RootKind {
        R::KIND
    }

    /// Top-level components in insertion order.
    pub fn components(&self) -> &[AnyComponent] {
        &self.components
    }

    pub fn into_components(self) -> Vec<AnyComponent> {
        self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of top-level components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Number of components at every depth.
    pub fn len_total(&self) -> usize {
        self.nodes().count()
    }

    /// A fresh depth-first, pre-order walk over every component.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(&self.components)
    }

    pub fn flatten(&self) -> Vec<&AnyComponent> {
        self.nodes().collect()
    }

    /// First component of variant `T` matching `predicate`, in traversal order.
    pub fn find<T, P>(&self, predicate: P) -> Option<&T>
    where
        T: Variant,
        P: Fn(&T) -> bool,
    {
        self.nodes()
            .filter_map(T::from_any)
            .find(|component| predicate(*component))
    }

    /// Every component of variant `T` matching `predicate`, in traversal order.
    pub fn find_all<T, P>(&self, predicate: P) -> Vec<&T>
    where
        T: Variant,
        P: Fn(&T) -> bool,
    {
        self.nodes()
            .filter_map(T::from_any)
            .filter(|component| predicate(*component))
            .collect()
    }

    pub fn find_by_type<P>(&self, kind: ComponentType, predicate: P) -> Option<&AnyComponent>
    where
        P: Fn(&AnyComponent) -> bool,
    {
        self.nodes()
            .find(|component| component.component_type() == kind && predicate(*component))
    }

    pub fn find_all_by_type<P>(&self, kind: ComponentType, predicate: P) -> Vec<&AnyComponent>
    where
        P: Fn(&AnyComponent) -> bool,
    {
        self.nodes()
            .filter(|component| component.component_type() == kind && predicate(*component))
            .collect()
    }

    /// The component carrying `unique_id`. Unassigned ids (`0`) never match.
    pub fn find_by_unique_id(&self, unique_id: i32) -> Option<&AnyComponent> {
        if unique_id == 0 {
            return None;
        }
        self.nodes()
            .find(|component| component.unique_id() == unique_id)
    }

    pub fn action_rows(&self) -> Vec<&ActionRow> {
        self.find_all(|_: &ActionRow| true)
    }

    pub fn buttons(&self) -> Vec<&Button> {
        self.find_all(|_: &Button| true)
    }

    pub fn button_by_custom_id(&self, custom_id: &str) -> Option<&Button> {
        self.find(|button: &Button| button.custom_id.as_deref() == Some(custom_id))
    }

    pub fn buttons_by_label(&self, label: &str, ignore_case: bool) -> Vec<&Button> {
        self.find_all(|button: &Button| match button.label.as_deref() {
            Some(candidate) if ignore_case => candidate.eq_ignore_ascii_case(label),
            Some(candidate) => candidate == label,
            None => false,
        })
    }

    /// Characters of text carried by every text display in the tree.
    pub fn text_length(&self) -> usize {
        self.nodes()
            .filter_map(|component| match component {
                AnyComponent::TextDisplay(text) => Some(text.content.chars().count()),
                _ => None,
            })
            .sum()
    }

    /// Checks this tree against the default limits of `mode`.
    pub fn validate(&self, mode: ValidationMode) -> Result<(), ComponentError> {
        Validator::default().validate(self, mode)
    }

    /// Decodes a tree from a JSON array of components.
    pub fn from_data(value: Value) -> Result<Self, ComponentError> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(AnyComponent::from_data)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::of),
            _ => Err(ComponentError::InvalidInput(
                "component tree must be an array".into(),
            )),
        }
    }

    pub fn parse(json: &str) -> Result<Self, ComponentError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| ComponentError::InvalidInput(format!("malformed json: {err}")))?;
        Self::from_data(value)
    }

    pub fn to_data(&self) -> Value {
        Value::Array(self.components.iter().map(AnyComponent::to_data).collect())
    }
}

impl<R: TreeRoot> Serialize for ComponentTree<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.components.serialize(serializer)
    }
}

impl<'de, R: TreeRoot> Deserialize<'de> for ComponentTree<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<AnyComponent>::deserialize(deserializer).map(Self::of)
    }
}

/// Depth-first, pre-order iterator backed by an explicit work list.
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    stack: Vec<&'a AnyComponent>,
}

impl<'a> Nodes<'a> {
    fn new(top_level: &'a [AnyComponent]) -> Self {
        Self {
            stack: top_level.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a AnyComponent;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}
