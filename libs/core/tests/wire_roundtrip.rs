use ctree_core::{
    ActionRow, AnyComponent, Button, Component, ComponentError, ComponentType, Container,
    MediaGallery, MediaItem, MessageComponentTree, Section, Separator, TextDisplay, Thumbnail,
};
use serde_json::json;

fn sample_tree() -> MessageComponentTree {
    MessageComponentTree::new()
        .with_component(TextDisplay::new("Pick a plan").id(1))
        .with_component(
            Container::new()
                .id(2)
                .accent_color(0x5865F2)
                .with_component(
                    Section::new(
                        [TextDisplay::new("Pro").id(4)],
                        Thumbnail::new("https://cdn.example/pro.png").id(5),
                    )
                    .id(3),
                )
                .with_component(Separator::default().id(6))
                .with_component(
                    MediaGallery::new([MediaItem::new("https://cdn.example/a.png")]).id(7),
                ),
        )
        .with_component(
            ActionRow::new()
                .id(8)
                .with_component(Button::primary("buy", "Buy").id(9))
                .with_component(Button::link("https://example.com/docs", "Docs").id(10)),
        )
}

#[test]
fn known_tree_round_trips() {
    let tree = sample_tree();
    let encoded = serde_json::to_string(&tree).expect("serialize");
    let decoded = MessageComponentTree::parse(&encoded).expect("parse");
    assert_eq!(decoded, tree);
    assert_eq!(decoded.to_data(), tree.to_data());
}

#[test]
fn unknown_payload_is_reemitted_byte_for_byte() {
    let raw = r#"{"type":99,"id":4,"zeta":[1,2.5,"x"],"alpha":{"b":true,"a":null},"label":"later"}"#;
    let parsed = AnyComponent::parse(raw).expect("parse");
    assert!(parsed.is_unknown());
    assert_eq!(parsed.component_type(), ComponentType::Unknown(99));
    assert_eq!(parsed.unique_id(), 4);
    assert_eq!(serde_json::to_string(&parsed).expect("serialize"), raw);
}

#[test]
fn unknown_numbers_keep_their_exact_text() {
    for raw in [
        r#"{"type":99,"id":4,"snow":123456789012345678901234567890}"#,
        r#"{"type":99,"v":1.10,"w":1e2}"#,
    ] {
        let parsed = AnyComponent::parse(raw).expect("parse");
        assert!(parsed.is_unknown());
        assert_eq!(serde_json::to_string(&parsed).expect("serialize"), raw);
    }
}

#[test]
fn unknown_children_survive_inside_known_parents() {
    let raw = r#"[{"type":1,"components":[{"type":2,"style":1,"label":"Go","custom_id":"go"},{"type":42,"future":"x","nested":{"type":7}}]}]"#;
    let tree = MessageComponentTree::parse(raw).expect("parse");
    assert_eq!(serde_json::to_string(&tree).expect("serialize"), raw);
    let unknown = tree
        .find_by_type(ComponentType::Unknown(42), |_| true)
        .expect("unknown node reachable");
    assert_eq!(unknown.unique_id(), 0);
}

#[test]
fn unknown_rejects_renumbering() {
    let parsed = AnyComponent::parse(r#"{"type":77,"id":1}"#).expect("parse");
    assert_eq!(
        parsed.with_unique_id(2),
        Err(ComponentError::UnsupportedOperation(
            "cannot modify an unknown component"
        ))
    );
}

#[test]
fn missing_discriminant_is_invalid_input() {
    let err = MessageComponentTree::from_data(json!([{"id": 1, "components": []}]))
        .expect_err("type is required");
    assert!(matches!(err, ComponentError::InvalidInput(_)));
    let err = serde_json::from_str::<AnyComponent>(r#"{"id": 3}"#).expect_err("serde path");
    assert!(err.to_string().contains("missing the `type` discriminant"), "{err}");
}

#[test]
fn serialized_tree_snapshot() {
    let tree = MessageComponentTree::new().with_component(
        ActionRow::new()
            .id(1)
            .with_component(Button::primary("ok", "OK").id(2))
            .with_component(Button::danger("cancel", "Cancel").disabled(true)),
    );
    insta::assert_json_snapshot!(tree, @r#"
    [
      {
        "type": 1,
        "id": 1,
        "components": [
          {
            "type": 2,
            "id": 2,
            "style": 1,
            "label": "OK",
            "custom_id": "ok"
          },
          {
            "type": 2,
            "style": 4,
            "label": "Cancel",
            "custom_id": "cancel",
            "disabled": true
          }
        ]
      }
    ]
    "#);
}

#[cfg(feature = "proptest")]
mod prop {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn button() -> impl Strategy<Value = Button> {
        ("[a-z]{1,8}", "[A-Za-z ]{1,12}", 0i32..1000, any::<bool>()).prop_map(
            |(custom_id, label, id, disabled)| {
                Button::secondary(custom_id, label).id(id).disabled(disabled)
            },
        )
    }

    proptest! {
        #[test]
        fn rows_of_buttons_round_trip(rows in vec(vec(button(), 1..5), 0..6)) {
            let tree = MessageComponentTree::of(rows.into_iter().map(|row| ActionRow::of(row)));
            let decoded = MessageComponentTree::from_data(tree.to_data()).expect("decode");
            prop_assert_eq!(decoded, tree);
        }

        #[test]
        fn unknown_payloads_round_trip(kind in 100i64..10_000, key in "[a-z]{1,6}", value in any::<i64>()) {
            let mut map = serde_json::Map::new();
            map.insert("type".into(), json!(kind));
            map.insert(format!("x_{key}"), json!(value));
            let raw = serde_json::Value::Object(map);
            let parsed = AnyComponent::from_data(raw.clone()).expect("decode");
            prop_assert!(parsed.is_unknown());
            prop_assert_eq!(parsed.to_data(), raw);
        }
    }
}
