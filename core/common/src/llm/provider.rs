//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（OpenAI 互換、Echo など）はこのトレイトを実装する必要があります。
/// 1 回の呼び出しは「ペイロード生成 → HTTP → テキスト抽出」の 3 段階で、LlmDriver が順に呼ぶ。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `messages` - system / user などロール付きメッセージ（送る順）
    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}

/// メッセージのロール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// メッセージ構造体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
