use serde::{Deserialize, Serialize};

use super::{ComponentType, is_unassigned};

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
    Link,
    Premium,
    Unknown(u8),
}

impl From<u8> for ButtonStyle {
    fn from(value: u8) -> Self {
        match value {
            1 => ButtonStyle::Primary,
            2 => ButtonStyle::Secondary,
            3 => ButtonStyle::Success,
            4 => ButtonStyle::Danger,
            5 => ButtonStyle::Link,
            6 => ButtonStyle::Premium,
            other => ButtonStyle::Unknown(other),
        }
    }
}

impl From<ButtonStyle> for u8 {
    fn from(value: ButtonStyle) -> Self {
        match value {
            ButtonStyle::Primary => 1,
            ButtonStyle::Secondary => 2,
            ButtonStyle::Success => 3,
            ButtonStyle::Danger => 4,
            ButtonStyle::Link => 5,
            ButtonStyle::Premium => 6,
            ButtonStyle::Unknown(other) => other,
        }
    }
}

/// A clickable button, either carrying a custom id or linking out.
///
/// Wire keys not listed here (such as `emoji`) are not kept across decode and encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    pub style: ButtonStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl Button {
    pub fn new(style: ButtonStyle, custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            unique_id: 0,
            style,
            label: Some(label.into()),
            custom_id: Some(custom_id.into()),
            url: None,
            disabled: false,
        }
    }

    pub fn primary(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ButtonStyle::Primary, custom_id, label)
    }

    pub fn secondary(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ButtonStyle::Secondary, custom_id, label)
    }

    pub fn danger(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ButtonStyle::Danger, custom_id, label)
    }

    pub fn link(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            unique_id: 0,
            style: ButtonStyle::Link,
            label: Some(label.into()),
            custom_id: None,
            url: Some(url.into()),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub default: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            default: false,
        }
    }
}

/// A select menu over a fixed list of string options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringSelect {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    pub custom_id: String,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl StringSelect {
    pub fn new(custom_id: impl Into<String>, options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            unique_id: 0,
            custom_id: custom_id.into(),
            options: options.into_iter().collect(),
            placeholder: None,
            min_values: None,
            max_values: None,
            disabled: false,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Which entities an [`EntitySelect`] offers; selects the wire discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityTarget {
    #[default]
    User,
    Role,
    Mentionable,
    Channel,
}

impl EntityTarget {
    pub fn component_type(self) -> ComponentType {
        match self {
            EntityTarget::User => ComponentType::UserSelect,
            EntityTarget::Role => ComponentType::RoleSelect,
            EntityTarget::Mentionable => ComponentType::MentionableSelect,
            EntityTarget::Channel => ComponentType::ChannelSelect,
        }
    }

    pub fn from_component_type(kind: ComponentType) -> Option<Self> {
        match kind {
            ComponentType::UserSelect => Some(EntityTarget::User),
            ComponentType::RoleSelect => Some(EntityTarget::Role),
            ComponentType::MentionableSelect => Some(EntityTarget::Mentionable),
            ComponentType::ChannelSelect => Some(EntityTarget::Channel),
            _ => None,
        }
    }
}

/// A select menu whose options are resolved by the remote service (users, roles, channels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySelect {
    /// Not a wire field: carried by the `type` discriminant.
    #[serde(skip)]
    pub target: EntityTarget,
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    pub custom_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl EntitySelect {
    pub fn new(target: EntityTarget, custom_id: impl Into<String>) -> Self {
        Self {
            target,
            unique_id: 0,
            custom_id: custom_id.into(),
            channel_types: Vec::new(),
            placeholder: None,
            min_values: None,
            max_values: None,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum TextInputStyle {
    Short,
    Paragraph,
    Unknown(u8),
}

impl From<u8> for TextInputStyle {
    fn from(value: u8) -> Self {
        match value {
            1 => TextInputStyle::Short,
            2 => TextInputStyle::Paragraph,
            other => TextInputStyle::Unknown(other),
        }
    }
}

impl From<TextInputStyle> for u8 {
    fn from(value: TextInputStyle) -> Self {
        match value {
            TextInputStyle::Short => 1,
            TextInputStyle::Paragraph => 2,
            TextInputStyle::Unknown(other) => other,
        }
    }
}

/// Free-form text field; only valid inside modals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    pub custom_id: String,
    pub style: TextInputStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(default = "default_true")]
    pub required: bool,
}

impl TextInput {
    pub fn new(custom_id: impl Into<String>, style: TextInputStyle) -> Self {
        Self {
            unique_id: 0,
            custom_id: custom_id.into(),
            style,
            label: None,
            placeholder: None,
            value: None,
            min_length: None,
            max_length: None,
            required: true,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
