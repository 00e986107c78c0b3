//! Keyed-map wire representation of components.
//!
//! Every component serializes to an object carrying its integer `type` discriminant, its `id`
//! (omitted when unassigned) and its variant fields. Decoding dispatches on the discriminant;
//! anything this build does not recognise is kept as an [`UnknownComponent`] and re-emitted
//! byte-for-byte.
//!
//! Known variants are lossy in the other direction: they re-emit only the fields they model, so
//! extra keys on a recognised discriminant (a button's `emoji`, say) are dropped on decode.

use metrics::counter;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::components::{
    AnyComponent, Component, ComponentType, EntitySelect, EntityTarget, UnknownComponent,
};
use crate::error::ComponentError;

#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: i64,
    #[serde(flatten)]
    inner: &'a T,
}

fn tagged<'a, T: Serialize, S: Serializer>(
    kind: ComponentType,
    inner: &'a T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    Tagged {
        kind: kind.key(),
        inner,
    }
    .serialize(serializer)
}

impl Serialize for AnyComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.component_type();
        match self {
            AnyComponent::ActionRow(inner) => tagged(kind, inner, serializer),
            AnyComponent::Button(inner) => tagged(kind, inner, serializer),
            AnyComponent::StringSelect(inner) => tagged(kind, inner, serializer),
            AnyComponent::EntitySelect(inner) => tagged(kind, inner, serializer),
            AnyComponent::TextInput(inner) => tagged(kind, inner, serializer),
            AnyComponent::Section(inner) => tagged(kind, inner, serializer),
            AnyComponent::TextDisplay(inner) => tagged(kind, inner, serializer),
            AnyComponent::Thumbnail(inner) => tagged(kind, inner, serializer),
            AnyComponent::MediaGallery(inner) => tagged(kind, inner, serializer),
            AnyComponent::FileDisplay(inner) => tagged(kind, inner, serializer),
            AnyComponent::Separator(inner) => tagged(kind, inner, serializer),
            AnyComponent::Container(inner) => tagged(kind, inner, serializer),
            AnyComponent::Unknown(inner) => inner.data().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AnyComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        AnyComponent::from_data(value).map_err(de::Error::custom)
    }
}

impl AnyComponent {
    /// Decodes one component from its keyed-map form.
    pub fn from_data(value: Value) -> Result<Self, ComponentError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ComponentError::InvalidInput(format!(
                    "component payload must be an object, got {}",
                    json_kind(&other)
                )));
            }
        };
        let kind = match map.get("type") {
            Some(raw) => raw.as_i64().map(ComponentType::from_key).ok_or_else(|| {
                ComponentError::InvalidInput(format!(
                    "component `type` must be an integer, got {raw}"
                ))
            })?,
            None => {
                return Err(ComponentError::InvalidInput(
                    "component payload is missing the `type` discriminant".into(),
                ));
            }
        };
        decode(kind, map)
    }

    /// Parses one component from JSON text.
    pub fn parse(json: &str) -> Result<Self, ComponentError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| ComponentError::InvalidInput(format!("malformed json: {err}")))?;
        Self::from_data(value)
    }

    /// Encodes this component into its keyed-map form.
    pub fn to_data(&self) -> Value {
        match self {
            AnyComponent::Unknown(unknown) => Value::Object(unknown.data().clone()),
            other => serde_json::to_value(other).unwrap_or_else(|err| {
                debug!(error = %err, "component serialization failed");
                Value::Null
            }),
        }
    }
}

/// Maps a discriminant to the constructor of its variant, falling back to [`UnknownComponent`].
fn decode(kind: ComponentType, map: Map<String, Value>) -> Result<AnyComponent, ComponentError> {
    let component = match kind {
        ComponentType::ActionRow => AnyComponent::ActionRow(fields(kind, map)?),
        ComponentType::Button => AnyComponent::Button(fields(kind, map)?),
        ComponentType::StringSelect => AnyComponent::StringSelect(fields(kind, map)?),
        ComponentType::TextInput => AnyComponent::TextInput(fields(kind, map)?),
        ComponentType::UserSelect
        | ComponentType::RoleSelect
        | ComponentType::MentionableSelect
        | ComponentType::ChannelSelect => {
            let mut select: EntitySelect = fields(kind, map)?;
            select.target = EntityTarget::from_component_type(kind).unwrap_or_default();
            AnyComponent::EntitySelect(select)
        }
        ComponentType::Section => AnyComponent::Section(fields(kind, map)?),
        ComponentType::TextDisplay => AnyComponent::TextDisplay(fields(kind, map)?),
        ComponentType::Thumbnail => AnyComponent::Thumbnail(fields(kind, map)?),
        ComponentType::MediaGallery => AnyComponent::MediaGallery(fields(kind, map)?),
        ComponentType::FileDisplay => AnyComponent::FileDisplay(fields(kind, map)?),
        ComponentType::Separator => AnyComponent::Separator(fields(kind, map)?),
        ComponentType::Container => AnyComponent::Container(fields(kind, map)?),
        ComponentType::Unknown(key) => {
            debug!(component_type = key, "preserving unknown component verbatim");
            counter!("component_unknown_preserved_total", "type" => key.to_string()).increment(1);
            AnyComponent::Unknown(UnknownComponent::new(map)?)
        }
    };
    Ok(component)
}

fn fields<T: DeserializeOwned>(
    kind: ComponentType,
    map: Map<String, Value>,
) -> Result<T, ComponentError> {
    serde_json::from_value(Value::Object(map))
        .map_err(|err| ComponentError::InvalidInput(format!("malformed {kind} component: {err}")))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
