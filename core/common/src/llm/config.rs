//! profiles.json 用の設定型
//!
//! プロファイル名から ProviderType とオプション（base_url / model / api_key_env / temperature / max_tokens / timeout_secs）を解決するための構造体。

use serde::Deserialize;
use std::collections::HashMap;

/// profiles.json のルート
#[derive(Debug, Clone, Default)]
pub struct ProfilesConfig {
    /// 未指定時に使うプロファイル名
    pub default_provider: Option<String>,
    /// プロファイル名 -> プロファイル
    pub providers: HashMap<String, ProviderProfile>,
}

/// 1 プロファイル分の設定
#[derive(Debug, Clone, Default)]
pub struct ProviderProfile {
    /// プロバイダ種別: openai | openai_compat | echo
    pub type_: ProviderTypeKind,
    /// API のベース URL（省略時はデフォルト）
    pub base_url: Option<String>,
    /// モデル名（省略時はデフォルト）
    pub model: Option<String>,
    /// API キーを読む環境変数名（省略時は OPENAI_API_KEY）
    pub api_key_env: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    /// HTTP タイムアウト秒（省略時は無制限）
    pub timeout_secs: Option<u64>,
}

/// JSON の "type" で使うプロバイダ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderTypeKind {
    #[default]
    Openai,
    OpenaiCompat,
    Echo,
}

impl ProviderTypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Openai => "openai",
            Self::OpenaiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }
}

/// serde 用の内部構造（type が予約語のため）
#[derive(Debug, Deserialize)]
struct ProfilesConfigRaw {
    #[serde(alias = "default")]
    default_provider: Option<String>,
    providers: Option<HashMap<String, ProviderProfileRaw>>,
}

#[derive(Debug, Deserialize)]
struct ProviderProfileRaw {
    #[serde(rename = "type", alias = "provider")]
    type_: ProviderTypeKindSerde,
    base_url: Option<String>,
    #[serde(alias = "default_model")]
    model: Option<String>,
    api_key_env: Option<String>,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ProviderTypeKindSerde {
    #[serde(alias = "gpt")]
    Openai,
    #[serde(rename = "openai_compat", alias = "ollama")]
    OpenaiCompat,
    Echo,
}

impl From<ProviderTypeKindSerde> for ProviderTypeKind {
    fn from(s: ProviderTypeKindSerde) -> Self {
        match s {
            ProviderTypeKindSerde::Openai => ProviderTypeKind::Openai,
            ProviderTypeKindSerde::OpenaiCompat => ProviderTypeKind::OpenaiCompat,
            ProviderTypeKindSerde::Echo => ProviderTypeKind::Echo,
        }
    }
}

impl ProfilesConfig {
    /// JSON 文字列からパース（ファイル読みは resolver で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: ProfilesConfigRaw = serde_json::from_str(json)?;
        let providers = raw
            .providers
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k, v.into()))
            .collect();
        Ok(ProfilesConfig {
            default_provider: raw.default_provider,
            providers,
        })
    }
}

impl From<ProviderProfileRaw> for ProviderProfile {
    fn from(r: ProviderProfileRaw) -> Self {
        ProviderProfile {
            type_: r.type_.into(),
            base_url: r.base_url,
            model: r.model,
            api_key_env: r.api_key_env,
            temperature: r.temperature,
            max_tokens: r.max_tokens,
            timeout_secs: r.timeout_secs,
        }
    }
}
