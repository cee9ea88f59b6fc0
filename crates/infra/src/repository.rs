//! # リポジトリ
//!
//! 永続化層との境界となるリポジトリトレイトを定義する。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: ユースケース層は trait のみに依存する
//! - **永続化実装は対象外**: 本サービスでは DB スキーマ・ORM を扱わないため、
//!   出荷する実装はインメモリ（[`crate::memory`]）のみ。実 DB 実装は
//!   外部コラボレータとして与えられる前提
//! - **フィルタはリポジトリ側**: 「アクティブな管理者一覧」のような条件は
//!   呼び出し側ではなくリポジトリに寄せる

pub mod incapacidad_repository;
pub mod notification_log_repository;
pub mod usuario_repository;

pub use incapacidad_repository::IncapacidadRepository;
pub use notification_log_repository::{NotificationLog, NotificationLogRepository};
pub use usuario_repository::UsuarioRepository;
