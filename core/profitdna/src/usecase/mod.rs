pub mod app;
pub mod pipeline;
pub mod session;

pub use app::{AnalyzerDeps, AnalyzerUseCase, ModelDeps, ObsDeps};
pub use pipeline::AnalysisPipeline;
pub use session::SessionState;
