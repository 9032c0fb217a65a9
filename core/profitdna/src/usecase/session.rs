//! 対話セッションの状態
//!
//! グローバルには持たず、呼び出し側が値として所有して use case に渡す。
//! セッション同士は何も共有しない。

use std::sync::Arc;

use crate::domain::{AnalysisResult, ApiKey};
use crate::ports::outbound::LlmCompletion;

/// API キー・完了クライアント・直近の分析結果
///
/// キーとクライアントは必ず同時に設定される。結果は成功した実行ごとに丸ごと差し替わる。
#[derive(Default)]
pub struct SessionState {
    credential: Option<ApiKey>,
    client: Option<Arc<dyn LlmCompletion>>,
    result: Option<AnalysisResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credential(&self) -> Option<&ApiKey> {
        self.credential.as_ref()
    }

    pub fn client(&self) -> Option<Arc<dyn LlmCompletion>> {
        self.client.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub(crate) fn set_connection(&mut self, credential: ApiKey, client: Arc<dyn LlmCompletion>) {
        self.credential = Some(credential);
        self.client = Some(client);
    }

    pub(crate) fn replace_result(&mut self, result: AnalysisResult) -> &AnalysisResult {
        self.result.insert(result)
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("credential", &self.credential)
            .field("connected", &self.client.is_some())
            .field("result", &self.result)
            .finish()
    }
}
