//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、送られた user メッセージをそのまま応答として返します。
//! API キー無しでパイプライン全体を試すとき（dry run）やテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message, Role};
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();
        Ok(json!({ "messages": messages }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 実際の API 呼び出しは行わず、リクエストをそのまま返す
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse echo response: {}", e)))?;
        let text = v["messages"]
            .as_array()
            .and_then(|msgs| {
                msgs.iter()
                    .rev()
                    .find(|m| m["role"] == Role::User.as_str())
            })
            .and_then(|m| m["content"].as_str())
            .map(|s| s.to_string());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_make_request_payload() {
        let payload = EchoProvider::new()
            .make_request_payload(&[Message::system("sys"), Message::user("Hello")])
            .unwrap();
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][1]["content"], "Hello");
    }

    #[test]
    fn test_echo_provider_returns_last_user_message() {
        let p = EchoProvider::new();
        let payload = p
            .make_request_payload(&[Message::system("sys"), Message::user("the prompt")])
            .unwrap();
        let response = p.make_http_request(&payload.to_string()).unwrap();
        assert_eq!(
            p.parse_response_text(&response).unwrap().as_deref(),
            Some("the prompt")
        );
    }

    #[test]
    fn test_echo_provider_no_user_message() {
        let p = EchoProvider::new();
        assert!(p
            .parse_response_text(r#"{"messages":[{"role":"system","content":"s"}]}"#)
            .unwrap()
            .is_none());
    }
}
