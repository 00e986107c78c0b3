use serde_json::{Map, Value};

use super::{Component, ComponentType};
use crate::error::ComponentError;

/// A component whose discriminant this build does not recognise.
///
/// The raw payload is kept verbatim and re-emitted unchanged. The type is a member of every slot,
/// so a tree carrying one still satisfies whatever slot its parent expects.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownComponent {
    kind: i64,
    data: Map<String, Value>,
}

impl UnknownComponent {
    /// Wraps a raw payload. The `type` key must hold an integer.
    pub fn new(data: Map<String, Value>) -> Result<Self, ComponentError> {
        let kind = match data.get("type") {
            Some(value) => value.as_i64().ok_or_else(|| {
                ComponentError::InvalidInput(format!(
                    "component `type` must be an integer, got {value}"
                ))
            })?,
            None => {
                return Err(ComponentError::InvalidInput(
                    "component payload is missing the `type` discriminant".into(),
                ));
            }
        };
        Ok(Self { kind, data })
    }

    /// The unique id exactly as received.
    ///
    /// A missing or non-integer `id` is a defect of the upstream payload and is reported as
    /// [`ComponentError::InvalidInput`].
    pub fn try_unique_id(&self) -> Result<i32, ComponentError> {
        self.data
            .get("id")
            .and_then(Value::as_i64)
            .and_then(|id| i32::try_from(id).ok())
            .ok_or_else(|| {
                ComponentError::InvalidInput(format!(
                    "unknown component of type {} carries no integer `id`",
                    self.kind
                ))
            })
    }

    /// The `id` key at full width: `None` when absent, an error when present but not an integer.
    ///
    /// Ids outside `i32` still identify the component upstream, so duplicate detection keys on
    /// this rather than on [`Component::unique_id`].
    pub fn raw_unique_id(&self) -> Result<Option<i64>, ComponentError> {
        match self.data.get("id") {
            None => Ok(None),
            Some(value) => value.as_i64().map(Some).ok_or_else(|| {
                ComponentError::InvalidInput(format!(
                    "unknown component of type {} carries a non-integer `id`: {value}",
                    self.kind
                ))
            }),
        }
    }

    pub fn raw_type(&self) -> i64 {
        self.kind
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }
}

impl Component for UnknownComponent {
    fn component_type(&self) -> ComponentType {
        ComponentType::Unknown(self.kind)
    }

    /// Falls back to `0` (unassigned) when the payload has no readable id; use
    /// [`UnknownComponent::try_unique_id`] for the strict read.
    fn unique_id(&self) -> i32 {
        self.try_unique_id().unwrap_or_default()
    }

    fn with_unique_id(&self, _unique_id: i32) -> Result<Self, ComponentError> {
        Err(ComponentError::UnsupportedOperation(
            "cannot modify an unknown component",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test payloads are objects"),
        }
    }

    #[test]
    fn reads_type_and_id_through_payload() {
        let unknown = UnknownComponent::new(raw(json!({"type": 99, "id": 12, "x": [1]}))).unwrap();
        assert_eq!(unknown.component_type(), ComponentType::Unknown(99));
        assert_eq!(unknown.try_unique_id().unwrap(), 12);
        assert_eq!(unknown.unique_id(), 12);
    }

    #[test]
    fn missing_id_is_reported_by_strict_read() {
        let unknown = UnknownComponent::new(raw(json!({"type": 99}))).unwrap();
        assert!(matches!(
            unknown.try_unique_id(),
            Err(ComponentError::InvalidInput(_))
        ));
        assert_eq!(unknown.unique_id(), 0);
    }

    #[test]
    fn raw_id_keeps_values_outside_i32() {
        let wide = UnknownComponent::new(raw(json!({"type": 99, "id": 5_000_000_000i64}))).unwrap();
        assert_eq!(wide.raw_unique_id().unwrap(), Some(5_000_000_000));
        assert_eq!(wide.unique_id(), 0);

        let absent = UnknownComponent::new(raw(json!({"type": 99}))).unwrap();
        assert_eq!(absent.raw_unique_id().unwrap(), None);

        let text = UnknownComponent::new(raw(json!({"type": 99, "id": "7"}))).unwrap();
        assert!(matches!(
            text.raw_unique_id(),
            Err(ComponentError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_missing_discriminant() {
        let err = UnknownComponent::new(raw(json!({"id": 1}))).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidInput(_)));
    }

    #[test]
    fn mutator_is_unsupported() {
        let unknown = UnknownComponent::new(raw(json!({"type": 99, "id": 1}))).unwrap();
        let err = unknown.with_unique_id(5).unwrap_err();
        assert!(matches!(err, ComponentError::UnsupportedOperation(_)));
        assert_eq!(unknown.unique_id(), 1);
    }
}
