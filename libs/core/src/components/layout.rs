use serde::{Deserialize, Serialize};

use super::{
    ActionRowChildComponent, AnyComponent, ContainerChildComponent, SectionAccessoryComponent,
    SectionContentComponent, is_unassigned,
};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Horizontal row of interactive components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActionRow {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    #[serde(default)]
    pub components: Vec<AnyComponent>,
}

impl ActionRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of<C: ActionRowChildComponent>(children: impl IntoIterator<Item = C>) -> Self {
        Self {
            unique_id: 0,
            components: children.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_component<C: ActionRowChildComponent>(mut self, child: C) -> Self {
        self.components.push(child.into());
        self
    }
}

/// Up to a handful of text blocks next to a single accessory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    #[serde(default)]
    pub components: Vec<AnyComponent>,
    pub accessory: Box<AnyComponent>,
}

impl Section {
    pub fn new<C, A>(content: impl IntoIterator<Item = C>, accessory: A) -> Self
    where
        C: SectionContentComponent,
        A: SectionAccessoryComponent,
    {
        Self {
            unique_id: 0,
            components: content.into_iter().map(Into::into).collect(),
            accessory: Box::new(accessory.into()),
        }
    }

    pub fn with_content<C: SectionContentComponent>(mut self, content: C) -> Self {
        self.components.push(content.into());
        self
    }
}

/// Visual grouping of other layout and content components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Container {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    #[serde(default)]
    pub components: Vec<AnyComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of<C: ContainerChildComponent>(children: impl IntoIterator<Item = C>) -> Self {
        Self {
            components: children.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_component<C: ContainerChildComponent>(mut self, child: C) -> Self {
        self.components.push(child.into());
        self
    }

    pub fn accent_color(mut self, rgb: u32) -> Self {
        self.accent_color = Some(rgb);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "u8", into = "u8")]
pub enum Spacing {
    #[default]
    Small,
    Large,
    Unknown(u8),
}

impl From<u8> for Spacing {
    fn from(value: u8) -> Self {
        match value {
            1 => Spacing::Small,
            2 => Spacing::Large,
            other => Spacing::Unknown(other),
        }
    }
}

impl From<Spacing> for u8 {
    fn from(value: Spacing) -> Self {
        match value {
            Spacing::Small => 1,
            Spacing::Large => 2,
            Spacing::Unknown(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Separator {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    #[serde(default = "default_divider")]
    pub divider: bool,
    #[serde(default)]
    pub spacing: Spacing,
}

fn default_divider() -> bool {
    true
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            unique_id: 0,
            divider: true,
            spacing: Spacing::Small,
        }
    }
}

impl Separator {
    pub fn new(divider: bool, spacing: Spacing) -> Self {
        Self {
            unique_id: 0,
            divider,
            spacing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Button, Component, ComponentType, TextDisplay, Thumbnail};

    #[test]
    fn action_row_keeps_child_order() {
        let row = ActionRow::new()
            .with_component(Button::primary("a", "A"))
            .with_component(Button::secondary("b", "B"));
        let ids: Vec<_> = row
            .components
            .iter()
            .filter_map(|child| match child {
                AnyComponent::Button(button) => button.custom_id.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn section_accepts_button_accessory() {
        let section = Section::new([TextDisplay::new("Deploy?")], Button::danger("go", "Go"));
        assert_eq!(section.accessory.component_type(), ComponentType::Button);
        let section = section.with_content(TextDisplay::new("second line"));
        assert_eq!(section.components.len(), 2);
    }

    #[test]
    fn container_nests_sections() {
        let container = Container::new()
            .accent_color(0x1ed760)
            .with_component(TextDisplay::new("header"))
            .with_component(Section::new(
                [TextDisplay::new("body")],
                Thumbnail::new("https://cdn.example/a.png"),
            ));
        assert_eq!(container.components.len(), 2);
        assert_eq!(container.accent_color, Some(0x1ed760));
    }

    #[test]
    fn separator_defaults_to_small_divider() {
        let separator: Separator = serde_json::from_str("{}").unwrap();
        assert_eq!(separator, Separator::default());
    }
}
