//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FanoutLog, FileJsonLog, NoopLog, StderrLog, StdEnvResolver, StdFileSystem};
use common::domain::ModelName;
use common::error::Error;
use common::llm::{load_profiles_config, resolve_provider, ResolvedProvider};
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{StdCompletionClientFactory, StdProfileLister, StdinLineInput, StderrProgress};
use crate::domain::ConnectOptions;
use crate::ports::outbound::{LineInput, ProfileLister, StageProgress};
use crate::usecase::{AnalysisPipeline, AnalyzerDeps, AnalyzerUseCase, ModelDeps, ObsDeps};

/// main が使う依存一式
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub line_input: Arc<dyn LineInput>,
    pub progress: Arc<dyn StageProgress>,
    profile_lister: Arc<dyn ProfileLister>,
}

impl App {
    /// -p（未指定なら profiles.json の default_provider）を解決する
    pub fn resolve_profile(&self, connect: &ConnectOptions) -> Result<ResolvedProvider, Error> {
        let cfg = load_profiles_config(self.fs.as_ref(), self.env_resolver.as_ref())?;
        resolve_provider(connect.profile.as_ref(), cfg.as_ref())
    }

    /// 解決済みプロファイルとモデル上書きで AnalyzerUseCase を組み立てる
    pub fn analyzer(&self, resolved: ResolvedProvider, model: Option<ModelName>) -> AnalyzerUseCase {
        let deps = AnalyzerDeps {
            model: ModelDeps {
                client_factory: Arc::new(StdCompletionClientFactory::new(resolved, model)),
                profile_lister: Arc::clone(&self.profile_lister),
            },
            obs: ObsDeps {
                log: Arc::clone(&self.logger),
            },
        };
        let pipeline = AnalysisPipeline::new(Arc::clone(&self.logger), Arc::clone(&self.progress));
        AnalyzerUseCase::new(deps, pipeline)
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_app(verbose: bool) -> App {
    wire_app_with(Arc::new(StdEnvResolver), Arc::new(StdinLineInput::new()), verbose)
}

/// 環境変数解決と行入力を差し替えて App を組み立てる（テストもここを通る）
pub fn wire_app_with(
    env_resolver: Arc<dyn EnvResolver>,
    line_input: Arc<dyn LineInput>,
    verbose: bool,
) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger = build_logger(Arc::clone(&fs), env_resolver.as_ref(), verbose);
    let profile_lister: Arc<dyn ProfileLister> =
        Arc::new(StdProfileLister::new(Arc::clone(&fs), Arc::clone(&env_resolver)));
    App {
        fs,
        env_resolver,
        logger,
        line_input,
        progress: Arc::new(StderrProgress),
        profile_lister,
    }
}

/// ホームが解決できなければファイルログは出さない（コマンド自体は失敗させない）
fn build_logger(fs: Arc<dyn FileSystem>, env: &dyn EnvResolver, verbose: bool) -> Arc<dyn Log> {
    let file_log: Arc<dyn Log> = match env.resolve_log_file_path() {
        Ok(path) => Arc::new(FileJsonLog::new(fs, path)),
        Err(_) => Arc::new(NoopLog),
    };
    if verbose {
        Arc::new(FanoutLog::new(vec![file_log, Arc::new(StderrLog)]))
    } else {
        file_log
    }
}
