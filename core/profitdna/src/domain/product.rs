//! 商品説明のドメイン型（パイプラインの入力）

use common::error::Error;

/// ユーザーが入力した商品・商品アイデアの説明
///
/// 空（空白のみ含む）でないことだけを保証する。内容の検証はしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDescription(String);

impl ProductDescription {
    pub fn parse(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(Error::invalid_argument("Please enter a product description."));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ProductDescription {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ProductDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
