//! 単発 LLM 完了の Outbound ポート
//!
//! 1 回のプロンプトで全文応答を取得する。リトライ・ストリーミングはしない。

use common::error::Error;

/// 単発の LLM 完了（system + user で応答文字列を取得）
///
/// 成功時は空でないテキストを返す。失敗は原因を区別せず `Error::Completion` にまとめる。
pub trait LlmCompletion: Send + Sync {
    fn complete(&self, system_role: &str, user_prompt: &str) -> Result<String, Error>;
}
