//! エラーハンドリング
//!
//! 全レイヤーで共通の `Error` を使い、`exit_code()` で終了コードに変換する。

/// エラー型
///
/// 終了コードは sysexits.h に準拠（64: 引数不正、70: 内部エラー、74: I/O・通信エラー）。
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数の解決失敗
    #[error("{0}")]
    Env(String),
    /// ファイル I/O
    #[error("{0}")]
    Io(String),
    /// HTTP 通信
    #[error("{0}")]
    Http(String),
    /// JSON の解析・生成
    #[error("{0}")]
    Json(String),
    /// LLM 完了呼び出しの失敗（原因の区別はしない）
    #[error("completion failed: {0}")]
    Completion(String),
    /// プロンプトテンプレートの定義ミス
    #[error("template error: {0}")]
    Template(String),
    /// パイプラインの段階で発生したエラー
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// 下位のエラー（HTTP・JSON 等）を 1 種類の「完了失敗」にまとめる。メッセージはそのまま保持する。
    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// どの段階で失敗したかを付けて包む
    pub fn stage(stage: impl Into<String>, source: Error) -> Self {
        Self::Stage {
            stage: stage.into(),
            source: Box::new(source),
        }
    }

    /// 失敗した段階名（Stage でなければ None）
    pub fn stage_name(&self) -> Option<&str> {
        match self {
            Self::Stage { stage, .. } => Some(stage.as_str()),
            _ => None,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Template(_) => 70,
            Self::Io(_) | Self::Http(_) | Self::Json(_) | Self::Completion(_) => 74,
            Self::Stage { source, .. } => source.exit_code(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
