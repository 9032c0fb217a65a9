//! API キーから LlmCompletion を組み立てる Outbound ポート

use crate::domain::ApiKey;
use crate::ports::outbound::LlmCompletion;
use common::error::Error;
use std::sync::Arc;

/// セッションで使う完了クライアントを作る。キーが渡されたときに 1 度だけ呼ばれる。
pub trait CompletionClientFactory: Send + Sync {
    fn create(&self, credential: &ApiKey) -> Result<Arc<dyn LlmCompletion>, Error>;
}
