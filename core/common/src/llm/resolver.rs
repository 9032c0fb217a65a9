//! profiles.json の読み込みとプロバイダ解決

use crate::domain::{ModelName, ProviderName};
use crate::error::Error;
use crate::llm::config::{ProfilesConfig, ProviderTypeKind};
use crate::llm::factory::ProviderType;
use crate::llm::settings::CompletionSettings;
use crate::ports::outbound::{EnvResolver, FileSystem};
use std::time::Duration;

/// プロファイル未指定・default_provider 未設定のときに使うプロファイル
pub const DEFAULT_PROFILE: &str = "openai";
/// api_key_env 未指定のときに API キーを読む環境変数
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 解決済みプロバイダ（ProviderType + オプション）
#[derive(Debug, Clone, Default)]
pub struct ResolvedProvider {
    /// 解決に使ったプロファイル名（例: "openai", "local"）。エラー表示・ログ用
    pub profile_name: String,
    pub provider_type: Option<ProviderType>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl ResolvedProvider {
    /// プロバイダ種別（未設定なら OpenAI 互換）
    pub fn provider_type(&self) -> ProviderType {
        self.provider_type.unwrap_or(ProviderType::OpenAiCompat)
    }

    /// API キーを読む環境変数名
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// プロファイルの値をデフォルトに重ねて CompletionSettings を作る。`model` 指定があれば最優先。
    pub fn settings(&self, model: Option<&ModelName>) -> CompletionSettings {
        let defaults = CompletionSettings::default();
        CompletionSettings {
            model: model
                .map(|m| m.to_string())
                .or_else(|| self.model.clone())
                .unwrap_or(defaults.model),
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// profiles.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_profiles_config(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
) -> Result<Option<ProfilesConfig>, Error> {
    let path = env.resolve_profiles_config_path()?;
    if !fs.exists(path.as_path()) {
        return Ok(None);
    }
    let contents = fs.read_to_string(path.as_path())?;
    ProfilesConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

fn provider_type_kind_to_provider_type(k: ProviderTypeKind) -> ProviderType {
    match k {
        ProviderTypeKind::Openai | ProviderTypeKind::OpenaiCompat => ProviderType::OpenAiCompat,
        ProviderTypeKind::Echo => ProviderType::Echo,
    }
}

/// 利用可能なビルトインプロファイル名
fn builtin_provider_names() -> &'static [&'static str] {
    &["echo", "openai"]
}

/// 要求されたプロファイル名（None の場合は default）と ProfilesConfig から ResolvedProvider を解決する。
/// 不明なプロファイルの場合は Error::invalid_argument（is_usage == true）で利用可能一覧を返す。
pub fn resolve_provider(
    requested: Option<&ProviderName>,
    cfg: Option<&ProfilesConfig>,
) -> Result<ResolvedProvider, Error> {
    let effective_name: &str = requested.map(|r| r.as_ref()).unwrap_or_else(|| {
        cfg.and_then(|c| c.default_provider.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
    });

    // 1) cfg.providers に名前があればそれを優先
    if let Some(profile) = cfg.and_then(|c| c.providers.get(effective_name)) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type: Some(provider_type_kind_to_provider_type(profile.type_)),
            base_url: profile.base_url.clone(),
            model: profile.model.clone(),
            api_key_env: profile.api_key_env.clone(),
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
            timeout_secs: profile.timeout_secs,
        });
    }

    // 2) ビルトイン (ProviderType::from_str) を試す
    if let Some(provider_type) = ProviderType::from_str(effective_name) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type: Some(provider_type),
            ..ResolvedProvider::default()
        });
    }

    // 3) どれも無ければ usage エラー
    let (available, _) = list_profiles(cfg);
    Err(Error::invalid_argument(format!(
        "Unknown profile: '{}'. Available: {}",
        effective_name,
        available.join(", ")
    )))
}

/// 利用可能なプロファイル名（ビルトイン + profiles.json、ソート済み）とデフォルトのプロファイル名
pub fn list_profiles(cfg: Option<&ProfilesConfig>) -> (Vec<String>, Option<String>) {
    let mut names: Vec<String> = builtin_provider_names()
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    if let Some(cfg) = cfg {
        for k in cfg.providers.keys() {
            if !names.contains(k) {
                names.push(k.clone());
            }
        }
    }
    names.sort();
    let default = cfg
        .and_then(|c| c.default_provider.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    (names, Some(default))
}
