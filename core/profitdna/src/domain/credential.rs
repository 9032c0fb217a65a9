//! API キー（セッション中に 1 度だけ渡される認証情報）

use common::error::Error;

/// 空でない API キー。Debug 出力では値を伏せる。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn parse(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into().trim().to_string();
        if s.is_empty() {
            return Err(Error::invalid_argument(
                "Please enter your OpenAI API key (--api-key or OPENAI_API_KEY) to begin.",
            ));
        }
        Ok(Self(s))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        assert_eq!(ApiKey::parse(" sk-abc\n").unwrap().expose(), "sk-abc");
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = ApiKey::parse("  ").unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_debug_redacts() {
        let key = ApiKey::parse("sk-secret").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(****)");
    }
}
