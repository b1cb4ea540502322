//! Completion request and response bodies.

use serde::{Deserialize, Serialize};

use super::{ChatMessage, Model};

/// Request body: the ordered message sequence plus the fixed model id.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub messages: &'a [ChatMessage],
    pub model: Model,
}

/// Response body. Only `choices[0].message.content` is consumed; the rest
/// is decoded for logging and ignored otherwise.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The generated message. `role` stays a plain string so unexpected role
/// values do not fail the whole decode.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_messages_in_order() {
        let messages = vec![
            ChatMessage::system("instructions"),
            ChatMessage::user("context"),
            ChatMessage::user("interface"),
        ];
        let request = CompletionRequest {
            messages: &messages,
            model: Model::Mixtral,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mixtral-8x7b-32768");
        assert_eq!(json["messages"].as_array().unwrap().len(), 3);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "context");
        assert_eq!(json["messages"][2]["content"], "interface");
    }

    #[test]
    fn response_decode_ignores_unknown_fields() {
        let body = r#"{
            "id": "fdefed5d-d7a9-936f-868a-f8020d85da83",
            "object": "chat.completion",
            "created": 1710411049,
            "model": "mixtral-8x7b-32768",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "/** ok */"},
                    "logprobs": null,
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 125, "total_time": 0.458},
            "system_fingerprint": null
        }"#;
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        let choice = &parsed.choices[0];
        assert_eq!(choice.index, 0);
        assert_eq!(choice.message.content.as_deref(), Some("/** ok */"));
        assert_eq!(choice.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn response_decode_tolerates_missing_content() {
        let parsed: CompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {}}]}"#).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
