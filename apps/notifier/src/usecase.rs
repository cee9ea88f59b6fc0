//! # ユースケース層
//!
//! 休暇届通知サービスのアプリケーションロジックを提供する。

pub mod notification;

pub use notification::{EnvioResumen, NotificationService, TemplateRenderer};
