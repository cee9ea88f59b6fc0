//! # IncaFlow Notifier
//!
//! 休暇届（incapacidad）の登録・審査・却下イベントをメールで通知するサービス。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - ユースケース層エラー
//! - [`fixture`] - 開発用 CLI の投入データ読み込み
//! - [`usecase`] - 通知サービス（レンダリング + 送信 + ログ記録）
//! - [`diagnosticos`] - 診断コード SQL シーダー（独立した一回きりのツール）

pub mod config;
pub mod diagnosticos;
pub mod error;
pub mod fixture;
pub mod usecase;
