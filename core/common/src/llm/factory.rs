//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::openai_compat::OpenAiCompatProvider;
use crate::llm::provider::{LlmProvider, Message};
use crate::llm::settings::CompletionSettings;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// OpenAI Chat Completions（互換エンドポイント含む）
    OpenAiCompat,
    /// Echo（プロンプトをそのまま返す）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" | "gpt" | "openai_compat" => Some(Self::OpenAiCompat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_request_payload(messages),
            Self::Echo(p) => p.make_request_payload(messages),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::OpenAiCompat(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `settings` - モデル・温度・最大出力長など（Echo では使わない）
/// * `api_key` - 認証用キー（Echo では使わない）
pub fn create_provider(
    provider_type: ProviderType,
    settings: CompletionSettings,
    api_key: Option<String>,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::OpenAiCompat => {
            let provider = OpenAiCompatProvider::new(settings, api_key)?;
            Ok(AnyProvider::OpenAiCompat(provider))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}

/// ドライバーを作成する（create_provider + LlmDriver::new）
pub fn create_driver(
    provider_type: ProviderType,
    settings: CompletionSettings,
    api_key: Option<String>,
) -> Result<LlmDriver<AnyProvider>, Error> {
    let provider = create_provider(provider_type, settings, api_key)?;
    Ok(LlmDriver::new(provider))
}
