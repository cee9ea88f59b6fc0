//! # IncaFlow ドメイン層
//!
//! 休暇届（incapacidad）通知のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: Usuario, Incapacidad）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: Email, RolId）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（SMTP、リポジトリ実装）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダの抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`incapacidad`] - 休暇届エンティティ
//! - [`notification`] - 通知イベントとメールメッセージ
//! - [`usuario`] - ユーザーエンティティと値オブジェクト

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod incapacidad;
pub mod notification;
pub mod usuario;

pub use error::DomainError;
