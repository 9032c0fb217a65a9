//! テスト用: 呼び出しを記録する LlmCompletion 実装

#[cfg(test)]
mod stub {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use common::error::Error;

    use crate::ports::outbound::LlmCompletion;

    /// 1 回分の呼び出し（system ロールと user プロンプト）
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub system_role: String,
        pub user_prompt: String,
    }

    /// テスト用 Stub
    ///
    /// 台本（replies）があれば先頭から順に返し、尽きたら user プロンプトをそのまま返す（echo）。
    /// `failing_on(n)` を指定すると n 回目（1 始まり）の呼び出しで Completion エラーを返す。
    pub struct StubLlm {
        replies: Mutex<VecDeque<String>>,
        fail_on: Option<usize>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl StubLlm {
        pub fn echo() -> Self {
            Self::scripted(Vec::<String>::new())
        }

        pub fn scripted<S: Into<String>>(replies: Vec<S>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_on(mut self, call_number: usize) -> Self {
            self.fail_on = Some(call_number);
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn prompts(&self) -> Vec<String> {
            self.calls().into_iter().map(|c| c.user_prompt).collect()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl LlmCompletion for StubLlm {
        fn complete(&self, system_role: &str, user_prompt: &str) -> Result<String, Error> {
            let n = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(RecordedCall {
                    system_role: system_role.to_string(),
                    user_prompt: user_prompt.to_string(),
                });
                calls.len()
            };
            if self.fail_on == Some(n) {
                return Err(Error::completion(format!("stub failure on call {}", n)));
            }
            Ok(self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| user_prompt.to_string()))
        }
    }
}

#[cfg(test)]
pub use stub::{RecordedCall, StubLlm};
