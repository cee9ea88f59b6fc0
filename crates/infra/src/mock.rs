//! # テスト用モック送信
//!
//! ユースケーステストで使用するモックの `NotificationSender` 実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! incaflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use incaflow_domain::{
    notification::{EmailMessage, NotificationError, NotificationLogId},
    usuario::UsuarioId,
};

use crate::{
    error::InfraError,
    notification::NotificationSender,
    repository::{NotificationLog, NotificationLogRepository},
};

// ===== MockNotificationSender =====

/// 送信したメールを記録するモック送信
///
/// 常に成功し、送信メッセージを [`sent_emails`](Self::sent_emails) で
/// 参照できる。送信試行回数のアサーションに使用する。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 送信済みメールのスナップショットを取得する
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

// ===== FailingNotificationSender =====

/// 常に送信失敗するモック送信
///
/// 送信失敗パス（通知ログの status = "failed" 記録）のテストに使用する。
#[derive(Debug, Clone, Default)]
pub struct FailingNotificationSender;

#[async_trait]
impl NotificationSender for FailingNotificationSender {
    async fn send_email(&self, _email: &EmailMessage) -> Result<(), NotificationError> {
        Err(NotificationError::SendFailed(
            "conexión rechazada (mock)".to_string(),
        ))
    }
}

// ===== FailingNotificationLogRepository =====

/// 常に失敗するモック通知ログリポジトリ
///
/// ログ記録失敗が通知操作を失敗させないこと（fire-and-forget）の
/// テストに使用する。
#[derive(Debug, Clone, Default)]
pub struct FailingNotificationLogRepository;

#[async_trait]
impl NotificationLogRepository for FailingNotificationLogRepository {
    async fn insert(&self, _log: &NotificationLog) -> Result<(), InfraError> {
        Err(InfraError::unexpected("INSERT 失敗 (mock)"))
    }

    async fn find_by_recipient(
        &self,
        _usuario_id: UsuarioId,
        _skip: usize,
        _limit: usize,
    ) -> Result<Vec<NotificationLog>, InfraError> {
        Err(InfraError::unexpected("SELECT 失敗 (mock)"))
    }

    async fn mark_as_read(
        &self,
        _id: &NotificationLogId,
        _usuario_id: UsuarioId,
        _now: DateTime<Utc>,
    ) -> Result<bool, InfraError> {
        Err(InfraError::unexpected("UPDATE 失敗 (mock)"))
    }
}
