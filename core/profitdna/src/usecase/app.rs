//! 商品分析のユースケース（アダプター経由で I/O を行う）

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{AnalysisResult, ApiKey, ProductDescription};
use crate::ports::outbound::{CompletionClientFactory, ProfileLister};
use crate::usecase::pipeline::AnalysisPipeline;
use crate::usecase::session::SessionState;

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct AnalyzerDeps {
    pub model: ModelDeps,
    pub obs: ObsDeps,
}

pub struct ModelDeps {
    pub client_factory: Arc<dyn CompletionClientFactory>,
    pub profile_lister: Arc<dyn ProfileLister>,
}

pub struct ObsDeps {
    pub log: Arc<dyn Log>,
}

/// 商品分析ユースケース
///
/// 自身は状態を持たない。セッションごとの状態は `SessionState` に置く。
pub struct AnalyzerUseCase {
    deps: AnalyzerDeps,
    pipeline: AnalysisPipeline,
}

impl AnalyzerUseCase {
    pub fn new(deps: AnalyzerDeps, pipeline: AnalysisPipeline) -> Self {
        Self { deps, pipeline }
    }

    /// API キーを検証し、完了クライアントを作ってセッションに保存する。
    /// 空のキーはクライアントを作らずに usage エラー。
    pub fn connect(&self, session: &mut SessionState, credential: &str) -> Result<(), Error> {
        let key = ApiKey::parse(credential)?;
        let client = self.deps.model.client_factory.create(&key)?;
        session.set_connection(key, client);
        self.log(LogRecord::new(LogLevel::Info, "session connected").kind("session"));
        Ok(())
    }

    /// 商品説明を分析し、成功したらセッションの結果を差し替えて返す。
    ///
    /// 未接続・空の説明はいずれも LLM を呼ばずに usage エラー。
    /// 失敗したときは以前の結果をそのまま残す。
    pub fn analyze<'s>(
        &self,
        session: &'s mut SessionState,
        description: &str,
    ) -> Result<&'s AnalysisResult, Error> {
        let client = session.client().ok_or_else(|| {
            Error::invalid_argument(
                "Please enter your OpenAI API key (--api-key or OPENAI_API_KEY) to begin.",
            )
        })?;
        let product = ProductDescription::parse(description)?;

        match self.pipeline.analyze(client.as_ref(), &product) {
            Ok(result) => Ok(session.replace_result(result)),
            Err(e) => {
                self.log(
                    LogRecord::new(LogLevel::Warn, format!("analysis failed: {}", e))
                        .kind("session")
                        .field("stage", e.stage_name().unwrap_or("")),
                );
                Err(e)
            }
        }
    }

    /// 現在有効なプロファイル一覧を返す（ソート済み名前リストとデフォルトプロファイル名）。
    /// 表示は CLI の責務のため、usecase はデータのみ返す。
    pub fn list_profiles(&self) -> Result<(Vec<String>, Option<String>), Error> {
        self.deps.model.profile_lister.list_profiles()
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.obs.log.log(&record.layer("usecase"));
    }
}
