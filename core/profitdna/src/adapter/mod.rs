//! Outbound ポートの実装

mod completion_client_factory;
mod line_input;
mod llm_completion;
mod profile_lister;
pub(crate) mod report;
mod stage_progress;
mod stub_llm;

pub use completion_client_factory::StdCompletionClientFactory;
pub use line_input::StdinLineInput;
pub use llm_completion::DriverLlmCompletion;
pub use profile_lister::StdProfileLister;
pub use stage_progress::StderrProgress;

#[cfg(test)]
pub use line_input::ScriptedLineInput;
#[cfg(test)]
pub use stage_progress::RecordingProgress;
#[cfg(test)]
pub use stub_llm::{RecordedCall, StubLlm};
