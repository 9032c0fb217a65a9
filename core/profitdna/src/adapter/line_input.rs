//! 1 行入力の CLI 実装
//!
//! usecase / main は LineInput trait 経由でのみ利用する。

use crate::ports::outbound::LineInput;
use common::error::Error;
use std::io::{self, BufRead, Write};

/// プロンプトを stderr に出して標準入力から 1 行読む
pub struct StdinLineInput;

impl StdinLineInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinLineInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for StdinLineInput {
    fn read_line(&self, prompt: &str) -> Result<Option<String>, Error> {
        eprint!("{}", prompt);
        let _ = io::stderr().flush();

        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}


#[cfg(test)]
pub use scripted::ScriptedLineInput;
