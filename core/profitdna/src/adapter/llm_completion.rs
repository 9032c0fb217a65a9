//! 単発 LLM 完了の標準実装（common::llm の LlmDriver に委譲）

use common::error::Error;
use common::llm::{AnyProvider, LlmDriver};

use crate::ports::outbound::LlmCompletion;

/// LlmDriver<AnyProvider> で 1 回のチャット完了を行うアダプタ
///
/// 通信・HTTP ステータス・API の error オブジェクト・JSON 不正のいずれも、
/// 元のメッセージを保ったまま `Error::Completion` にまとめて返す。
pub struct DriverLlmCompletion {
    driver: LlmDriver<AnyProvider>,
}

impl DriverLlmCompletion {
    pub fn new(driver: LlmDriver<AnyProvider>) -> Self {
        Self { driver }
    }
}

impl LlmCompletion for DriverLlmCompletion {
    fn complete(&self, system_role: &str, user_prompt: &str) -> Result<String, Error> {
        self.driver
            .query(user_prompt, Some(system_role))
            .map_err(into_completion_error)
    }
}

fn into_completion_error(e: Error) -> Error {
    match e {
        Error::Completion(_) => e,
        other => Error::completion(other.to_string()),
    }
}
