//! LLMドライバーとプロバイダの実装
//!
//! OpenAI 互換エンドポイントと Echo（オフライン）で共通する処理を提供します。

pub mod config;
pub mod driver;
pub mod echo;
pub mod factory;
pub mod openai_compat;
pub mod provider;
pub mod resolver;
pub mod settings;

pub use driver::LlmDriver;
pub use factory::{create_driver, create_provider, AnyProvider, ProviderType};
pub use provider::{LlmProvider, Message, Role};
pub use resolver::{list_profiles, load_profiles_config, resolve_provider, ResolvedProvider};
pub use settings::CompletionSettings;
