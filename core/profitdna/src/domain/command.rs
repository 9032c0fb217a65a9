//! profitdna コマンドの enum（Command Pattern）
//!
//! 単発実行と対話セッションの分岐を enum で明示する。

use common::domain::{ModelName, ProviderName};
use std::path::PathBuf;

/// 商品説明の入力元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionSource {
    /// 位置引数の単語を空白で結合したもの
    Inline(String),
    /// ファイルから読む
    File(PathBuf),
}

/// 結果の出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 3 つの見出し付き Markdown
    #[default]
    Markdown,
    /// revenue_analysis / implementation_plan / profit_summary の JSON
    Json,
}

/// モデル接続に関する指定（プロファイル・モデル・API キー）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectOptions {
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// --api-key で直接渡されたキー（未指定なら環境変数）
    pub api_key: Option<String>,
}

/// profitdna の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// ヘルプ表示
    Help,
    /// プロファイル一覧
    ListProfiles,
    /// 1 回だけ分析して終了
    Analyze {
        connect: ConnectOptions,
        source: DescriptionSource,
        format: OutputFormat,
        output: Option<PathBuf>,
    },
    /// 対話セッション（API キーを 1 度入力し、商品説明を繰り返し分析する）
    Interactive {
        connect: ConnectOptions,
        format: OutputFormat,
    },
}
