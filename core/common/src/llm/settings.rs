//! 完了呼び出しの固定設定（モデル・温度・最大出力長・接続先）

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// 適度な創造性（決定的ではない）
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// 複数セクションの構造化応答が切れない程度に大きく取る
pub const DEFAULT_MAX_TOKENS: u32 = 8000;

/// 1 回の完了呼び出しに使う設定。セッション中は変わらない。
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// HTTP タイムアウト（None のとき無制限）
    pub timeout: Option<Duration>,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = CompletionSettings::default();
        assert_eq!(s.model, "gpt-4o");
        assert_eq!(s.temperature, 0.7);
        assert_eq!(s.max_tokens, 8000);
        assert_eq!(s.base_url, "https://api.openai.com/v1");
        assert!(s.timeout.is_none());
    }
}
