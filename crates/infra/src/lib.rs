//! # IncaFlow インフラ層
//!
//! メール送信とリポジトリの実装を提供する。
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー（SpanTrace 付き）
//! - [`notification`] - メール送信（SMTP / Noop）
//! - [`repository`] - リポジトリトレイト
//! - [`memory`] - インメモリリポジトリ実装（開発用 CLI・テスト向け）
//! - [`mock`] - テスト用モック送信（`test-utils` feature）

pub mod error;
pub mod memory;
pub mod notification;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
