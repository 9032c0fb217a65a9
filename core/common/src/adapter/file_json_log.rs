//! Log 実装（ファイルへ JSONL 追記 / stderr / 複数出力 / 何もしない）
//!
//! ログの出力先はエラー時のコンソール表示とは別。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut w = self.fs.open_append(&self.path)?;
        let line = serde_json::to_string(record)?;
        w.write_all(line.as_bytes())
            .and_then(|_| w.write_all(b"\n"))
            .and_then(|_| w.flush())
            .map_err(|e| Error::io_msg(e.to_string()))
    }
}

/// stderr へ 1 行ずつ整形して出す Log 実装（--verbose 用）
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl StderrLog {
    fn format(record: &LogRecord) -> String {
        let mut line = format!("[{}] {}", record.level.as_str(), record.message);
        if let Some(ref fields) = record.fields {
            for (k, v) in fields {
                line.push_str(&format!(" {}={}", k, v));
            }
        }
        line
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", Self::format(record));
        Ok(())
    }
}

/// 複数の Log に同じレコードを書き出す。1 つが失敗しても残りには書く。
pub struct FanoutLog {
    logs: Vec<Arc<dyn Log>>,
}

impl FanoutLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for FanoutLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use crate::ports::outbound::LogLevel;
    use std::sync::Mutex;

    struct CollectLog(Mutex<Vec<String>>);

    impl Log for CollectLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    struct FailLog;

    impl Log for FailLog {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            Err(Error::io_msg("disk full"))
        }
    }

    #[test]
    fn test_noop_log() {
        let rec = LogRecord::new(LogLevel::Info, "test");
        assert!(NoopLog.log(&rec).is_ok());
    }

    #[test]
    fn test_file_json_log_creates_parent_and_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("profitdna.jsonl");
        let log = FileJsonLog::new(Arc::new(StdFileSystem), &path);
        log.log(&LogRecord::new(LogLevel::Info, "one")).unwrap();
        log.log(&LogRecord::new(LogLevel::Error, "two").kind("error")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(v["message"], "two");
        assert_eq!(v["level"], "error");
        assert_eq!(v["kind"], "error");
    }

    #[test]
    fn test_stderr_log_format_includes_fields() {
        let rec = LogRecord::new(LogLevel::Info, "stage finished").field("stage", "summary");
        assert_eq!(
            StderrLog::format(&rec),
            "[info] stage finished stage=\"summary\""
        );
    }

    #[test]
    fn test_fanout_log_writes_all_and_reports_failure() {
        let collect = Arc::new(CollectLog(Mutex::new(Vec::new())));
        let log = FanoutLog::new(vec![
            Arc::new(FailLog) as Arc<dyn Log>,
            Arc::clone(&collect) as Arc<dyn Log>,
        ]);
        let res = log.log(&LogRecord::new(LogLevel::Info, "hello"));
        assert!(res.is_err());
        assert_eq!(*collect.0.lock().unwrap(), vec!["hello".to_string()]);
    }
}
