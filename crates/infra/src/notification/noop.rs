//! Noop 通知送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! SMTP 認証情報が未設定の環境や通知無効化時に使用する。
//! 元システムの「SMTP 未設定なら送信をシミュレートして成功を返す」挙動に対応する。

use async_trait::async_trait;
use incaflow_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}
