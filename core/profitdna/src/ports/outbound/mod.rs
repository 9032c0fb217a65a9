//! Outbound ポート: アプリが外界（LLM・進捗表示・入力・設定）を使うための trait

pub mod completion_client_factory;
pub mod line_input;
pub mod llm_completion;
pub mod profile_lister;
pub mod stage_progress;

pub use completion_client_factory::CompletionClientFactory;
pub use line_input::LineInput;
pub use llm_completion::LlmCompletion;
pub use profile_lister::ProfileLister;
pub use stage_progress::StageProgress;
