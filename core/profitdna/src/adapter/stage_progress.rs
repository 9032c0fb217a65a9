//! 段階進捗の表示アダプタ

use std::time::Duration;

use crate::domain::Stage;
use crate::ports::outbound::StageProgress;

/// stderr に `[n/3] stage...` を出すビジー表示
pub struct StderrProgress;

impl StageProgress for StderrProgress {
    fn stage_started(&self, stage: Stage) {
        eprintln!("[{}/{}] {}...", stage.number(), Stage::ALL.len(), stage);
    }

    fn stage_finished(&self, stage: Stage, elapsed: Duration) {
        eprintln!(
            "[{}/{}] {} done ({:.1}s)",
            stage.number(),
            Stage::ALL.len(),
            stage,
            elapsed.as_secs_f64()
        );
    }
}


#[cfg(test)]
pub use recording::RecordingProgress;
