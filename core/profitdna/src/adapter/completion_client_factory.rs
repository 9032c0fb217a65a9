//! 解決済みプロファイルと API キーから完了クライアントを組み立てる

use std::sync::Arc;

use common::domain::ModelName;
use common::error::Error;
use common::llm::{create_driver, ResolvedProvider};

use crate::adapter::DriverLlmCompletion;
use crate::domain::ApiKey;
use crate::ports::outbound::{CompletionClientFactory, LlmCompletion};

/// 標準の完了クライアントファクトリ（プロファイル 1 つ + モデル上書き）
pub struct StdCompletionClientFactory {
    resolved: ResolvedProvider,
    model: Option<ModelName>,
}

impl StdCompletionClientFactory {
    pub fn new(resolved: ResolvedProvider, model: Option<ModelName>) -> Self {
        Self { resolved, model }
    }
}

impl CompletionClientFactory for StdCompletionClientFactory {
    fn create(&self, credential: &ApiKey) -> Result<Arc<dyn LlmCompletion>, Error> {
        let settings = self.resolved.settings(self.model.as_ref());
        let driver = create_driver(
            self.resolved.provider_type(),
            settings,
            Some(credential.expose().to_string()),
        )?;
        Ok(Arc::new(DriverLlmCompletion::new(driver)))
    }
}
