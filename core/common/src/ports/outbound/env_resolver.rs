//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・設定ファイル・ログファイル・API キーを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. PROFITDNA_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/profitdna（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/profitdna
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// プロバイダプロファイル設定ファイルのパス（ホーム直下の profiles.json）
    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("profiles.json"))
    }

    /// 構造化ログ（JSONL）の出力先
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("logs").join("profitdna.jsonl"))
    }

    /// 任意の環境変数（空文字は未設定扱い）。API キーの取得に使う。
    fn var(&self, name: &str) -> Option<String>;
}
