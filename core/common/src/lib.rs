//! ProfitDNA 共通ライブラリ
//!
//! `profitdna` コマンドが使うエラー型・ドメイン型・LLM ドライバー・ポートと標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
