use serde::{Deserialize, Serialize};

/// Raw field values captured by the host for one Ask AI invocation.
///
/// Values are kept exactly as entered; placeholder resolution happens at
/// run time through the host bridge. `store` names the destination
/// variable and is handed to the sink untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskAiValues {
    pub url: String,
    pub key: String,
    pub model: String,
    pub prompt: String,
    #[serde(rename = "systemPrompt")]
    pub system_prompt: String,
    #[serde(rename = "tokenLimit")]
    pub token_limit: String,
    #[serde(rename = "exceededMessage")]
    pub exceeded_message: String,
    pub store: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_round_trip_with_host_field_keys() {
        let json = r#"{
            "url": "https://api.example.com/v1/chat/completions",
            "key": "sk-test",
            "model": "gpt-4o-mini",
            "prompt": "hi",
            "systemPrompt": "be brief",
            "tokenLimit": "100",
            "exceededMessage": "too long",
            "store": "reply"
        }"#;

        let values: AskAiValues = serde_json::from_str(json).unwrap();
        assert_eq!(values.system_prompt, "be brief");
        assert_eq!(values.token_limit, "100");

        // Serialization keeps the host's capture keys.
        let back = serde_json::to_value(&values).unwrap();
        assert_eq!(back["systemPrompt"], "be brief");
        assert_eq!(back["exceededMessage"], "too long");
    }
}
