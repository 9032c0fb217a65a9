//! パイプライン段階の進捗通知 Outbound ポート（CLI ではビジー表示に使う）

use crate::domain::Stage;
use std::time::Duration;

pub trait StageProgress: Send + Sync {
    fn stage_started(&self, stage: Stage);
    fn stage_finished(&self, stage: Stage, elapsed: Duration);
}
