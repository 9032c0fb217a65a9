//! profitdna 固有のドメイン型（型と不変条件）

pub mod analysis;
pub mod command;
pub mod credential;
pub mod product;
pub mod prompts;
pub mod stage;
pub mod template;

pub use analysis::AnalysisResult;
pub use command::{AppCommand, ConnectOptions, DescriptionSource, OutputFormat};
pub use credential::ApiKey;
pub use product::ProductDescription;
pub use stage::Stage;
pub use template::{Bindings, PromptTemplate};
