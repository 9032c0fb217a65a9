//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能。ストリーミングは行わず、1 リクエストで全文を受け取る。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};
use crate::llm::settings::CompletionSettings;
use serde_json::{json, Value};

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    settings: CompletionSettings,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `settings` - モデル・温度・最大出力長・ベース URL・タイムアウト
    /// * `api_key` - Bearer トークン（None のとき Authorization を付けない）
    pub fn new(settings: CompletionSettings, api_key: Option<String>) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        let settings = CompletionSettings {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            ..settings
        };
        Ok(Self {
            settings,
            api_key,
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url)
    }
}

/// エラーレスポンス本文から人が読めるメッセージを取り出す
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();

        Ok(json!({
            "model": self.settings.model,
            "messages": messages,
            "temperature": self.settings.temperature,
            "max_tokens": self.settings.max_tokens,
            "stream": false
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let mut builder = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Chat completions error: {}",
                error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        // finish_reason == "length"（途中で切れた）でもそのまま返す。構造の検証はしない。
        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}
