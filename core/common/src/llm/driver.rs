//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// system + user の 2 メッセージを送り、最初の応答テキストを返す
    ///
    /// # Arguments
    /// * `query` - ユーザープロンプト（プレースホルダ置換済み）
    /// * `system_instruction` - システム指示（オプション）
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト（空でない）
    /// * `Err(Error)` - ペイロード生成・通信・解析のいずれかの失敗、または応答テキストが無い
    pub fn query(&self, query: &str, system_instruction: Option<&str>) -> Result<String, Error> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_instruction {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(query));

        let payload = self.provider.make_request_payload(&messages)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        // 空文字は「応答なし」と同じ扱い
        self.provider
            .parse_response_text(&response_json)?
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| Error::completion("No text in response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    // モックプロバイダ
    struct MockProvider {
        text: Option<&'static str>,
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
            let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
            Ok(json!({ "roles": roles }))
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            let req: Value = serde_json::from_str(request_json)?;
            Ok(json!({ "text": self.text, "roles": req["roles"] }).to_string())
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)?;
            Ok(v["text"].as_str().map(|s| s.to_string()))
        }
    }

    #[test]
    fn test_llm_driver_query() {
        let driver = LlmDriver::new(MockProvider {
            text: Some("Hello, world!"),
        });
        assert_eq!(driver.query("test", Some("You are helpful")).unwrap(), "Hello, world!");
    }

    #[test]
    fn test_llm_driver_query_no_text() {
        let driver = LlmDriver::new(MockProvider { text: None });
        let err = driver.query("test", None).unwrap_err();
        assert!(matches!(err, Error::Completion(_)));
        assert!(err.to_string().contains("No text in response"));
    }

    #[test]
    fn test_llm_driver_query_blank_text_is_failure() {
        let driver = LlmDriver::new(MockProvider { text: Some("  \n") });
        assert!(driver.query("test", None).is_err());
    }

    // エラーハンドリングのテスト用モックプロバイダ
    struct ErrorMockProvider {
        error_type: ErrorType,
    }

    enum ErrorType {
        PayloadError,
        HttpError,
        ParseError,
    }

    impl LlmProvider for ErrorMockProvider {
        fn name(&self) -> &str {
            "error_mock"
        }

        fn make_request_payload(&self, _messages: &[Message]) -> Result<Value, Error> {
            match self.error_type {
                ErrorType::PayloadError => Err(Error::json("Failed to create payload")),
                _ => Ok(json!({})),
            }
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            match self.error_type {
                ErrorType::HttpError => Err(Error::http("HTTP request failed")),
                _ => Ok("{}".to_string()),
            }
        }

        fn parse_response_text(&self, _response_json: &str) -> Result<Option<String>, Error> {
            match self.error_type {
                ErrorType::ParseError => Err(Error::json("Failed to parse response")),
                _ => Ok(Some("ok".to_string())),
            }
        }
    }

    #[test]
    fn test_llm_driver_query_payload_error() {
        let driver = LlmDriver::new(ErrorMockProvider {
            error_type: ErrorType::PayloadError,
        });
        let err = driver.query("test", None).unwrap_err();
        assert!(err.to_string().contains("Failed to create payload"));
    }

    #[test]
    fn test_llm_driver_query_http_error() {
        let driver = LlmDriver::new(ErrorMockProvider {
            error_type: ErrorType::HttpError,
        });
        let err = driver.query("test", None).unwrap_err();
        assert!(err.to_string().contains("HTTP request failed"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_llm_driver_query_parse_error() {
        let driver = LlmDriver::new(ErrorMockProvider {
            error_type: ErrorType::ParseError,
        });
        let err = driver.query("test", None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse response"));
    }

    // Echoプロバイダを使った実際のテスト
    #[test]
    fn test_llm_driver_with_echo_provider_returns_prompt() {
        use crate::llm::echo::EchoProvider;
        let driver = LlmDriver::new(EchoProvider::new());
        let response = driver.query("Hello, echo!", Some("You are helpful")).unwrap();
        assert_eq!(response, "Hello, echo!");
    }
}
