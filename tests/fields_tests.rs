use askai_action::action::{ASK_AI_DEFINITION, AskAiAction};
use askai_action::core::FieldKind;

#[test]
fn test_definition_name_and_field_order() {
    assert_eq!(ASK_AI_DEFINITION.name, "Ask AI");

    let keys: Vec<&str> = ASK_AI_DEFINITION.fields.iter().map(|f| f.key).collect();
    assert_eq!(
        keys,
        vec![
            "url",
            "key",
            "model",
            "prompt",
            "systemPrompt",
            "tokenLimit",
            "exceededMessage",
            "store"
        ]
    );
}

#[test]
fn test_field_capture_semantics() {
    for field in ASK_AI_DEFINITION.fields {
        let expected = match field.key {
            "key" => FieldKind::Secret,
            "store" => FieldKind::Storage,
            _ => FieldKind::Text,
        };
        assert_eq!(field.kind, expected, "wrong kind for {}", field.key);
    }
}

#[test]
fn test_field_labels() {
    let label_of = |key: &str| ASK_AI_DEFINITION.field(key).unwrap().label;

    assert_eq!(label_of("url"), "API URL");
    assert_eq!(label_of("systemPrompt"), "System Prompt");
    assert_eq!(
        label_of("exceededMessage"),
        "Message if Token Limit is exceeded"
    );
    assert_eq!(label_of("store"), "Store response");
}

#[test]
fn test_field_lookup_misses_unknown_keys() {
    assert!(ASK_AI_DEFINITION.field("nope").is_none());
}

#[test]
fn test_action_exposes_definition() {
    let action = AskAiAction::new();
    assert_eq!(action.definition().name, "Ask AI");
    assert_eq!(action.definition().fields.len(), 8);
}

#[test]
fn test_definition_serializes_for_host_rendering() {
    let json = serde_json::to_value(&ASK_AI_DEFINITION).unwrap();

    assert_eq!(json["name"], "Ask AI");
    assert_eq!(json["fields"][0]["key"], "url");
    assert_eq!(json["fields"][0]["kind"], "text");
    assert_eq!(json["fields"][1]["kind"], "secret");
    assert_eq!(json["fields"][7]["kind"], "storage");
}
