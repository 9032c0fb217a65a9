//! プロファイル一覧取得の Outbound ポート

use common::error::Error;

/// 現在有効なプロファイル名（ソート済み）とデフォルトのプロファイル名を返す
pub trait ProfileLister: Send + Sync {
    fn list_profiles(&self) -> Result<(Vec<String>, Option<String>), Error>;
}
