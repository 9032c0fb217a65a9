//! 1 行入力の Outbound ポート（対話セッションの API キー・商品説明入力）

use common::error::Error;

pub trait LineInput: Send + Sync {
    /// プロンプトを表示して 1 行読む。EOF なら None。末尾の改行は含まない。
    fn read_line(&self, prompt: &str) -> Result<Option<String>, Error>;
}
