//! # NotificationLogRepository
//!
//! 通知ログの記録・参照を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **fire-and-forget ログ**: 送信成功・失敗どちらも記録する
//! - **通知履歴の基盤**: ユーザーごとの通知履歴と既読管理もこのログで賄う

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use incaflow_domain::{
    incapacidad::IncapacidadId,
    notification::NotificationLogId,
    usuario::UsuarioId,
};

use crate::error::InfraError;

/// 通知ログ（リポジトリ INSERT 用データ型）
#[derive(Debug, Clone)]
pub struct NotificationLog {
    pub id: NotificationLogId,
    pub event_type: String,
    pub incapacidad_id: IncapacidadId,
    pub recipient_usuario_id: UsuarioId,
    pub recipient_email: String,
    pub subject: String,
    pub status: String,
    pub error_message: Option<String>,
    pub read_at: Option<DateTime<Utc>>,
    pub sent_at: DateTime<Utc>,
}

/// 通知ログリポジトリトレイト
#[async_trait]
pub trait NotificationLogRepository: Send + Sync {
    /// 通知ログを挿入する
    async fn insert(&self, log: &NotificationLog) -> Result<(), InfraError>;

    /// 受信者ごとの通知履歴を取得する（送信日時の降順）
    ///
    /// `skip` / `limit` でページングする。
    async fn find_by_recipient(
        &self,
        usuario_id: UsuarioId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<NotificationLog>, InfraError>;

    /// 通知を既読にする
    ///
    /// 対象ログの受信者が `usuario_id` と一致する場合のみ `read_at` を設定する。
    ///
    /// # 戻り値
    ///
    /// - `Ok(true)`: 既読化した場合
    /// - `Ok(false)`: ログが存在しない、または受信者が一致しない場合
    async fn mark_as_read(
        &self,
        id: &NotificationLogId,
        usuario_id: UsuarioId,
        now: DateTime<Utc>,
    ) -> Result<bool, InfraError>;
}
