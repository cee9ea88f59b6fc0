//! # インメモリリポジトリ
//!
//! `Arc<Mutex<Vec<_>>>` ベースのリポジトリ実装。
//!
//! 永続化層（DB スキーマ・ORM）は本サービスの対象外のため、
//! 開発用 CLI とテストはこの実装でリポジトリトレイトを満たす。
//! フィクスチャファイルからの投入は notifier アプリ側で行う。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use incaflow_domain::{
    incapacidad::{Incapacidad, IncapacidadId},
    notification::NotificationLogId,
    usuario::{Usuario, UsuarioId},
};

use crate::{
    error::InfraError,
    repository::{
        IncapacidadRepository,
        NotificationLog,
        NotificationLogRepository,
        UsuarioRepository,
    },
};

// ===== InMemoryUsuarioRepository =====

/// インメモリのユーザーリポジトリ
#[derive(Clone, Default)]
pub struct InMemoryUsuarioRepository {
    usuarios: Arc<Mutex<Vec<Usuario>>>,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self {
            usuarios: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// ユーザーを追加する
    pub fn add_usuario(&self, usuario: Usuario) {
        self.usuarios.lock().unwrap().push(usuario);
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn find_by_id(&self, id: UsuarioId) -> Result<Option<Usuario>, InfraError> {
        Ok(self
            .usuarios
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id() == id)
            .cloned())
    }

    async fn find_administradores_activos(&self) -> Result<Vec<Usuario>, InfraError> {
        Ok(self
            .usuarios
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.is_administrador_activo())
            .cloned()
            .collect())
    }
}

// ===== InMemoryIncapacidadRepository =====

/// インメモリの休暇届リポジトリ
#[derive(Clone, Default)]
pub struct InMemoryIncapacidadRepository {
    incapacidades: Arc<Mutex<Vec<Incapacidad>>>,
}

impl InMemoryIncapacidadRepository {
    pub fn new() -> Self {
        Self {
            incapacidades: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 休暇届を追加する
    pub fn add_incapacidad(&self, incapacidad: Incapacidad) {
        self.incapacidades.lock().unwrap().push(incapacidad);
    }
}

#[async_trait]
impl IncapacidadRepository for InMemoryIncapacidadRepository {
    async fn find_by_id(&self, id: IncapacidadId) -> Result<Option<Incapacidad>, InfraError> {
        Ok(self
            .incapacidades
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id() == id)
            .cloned())
    }
}

// ===== InMemoryNotificationLogRepository =====

/// インメモリの通知ログリポジトリ
#[derive(Clone, Default)]
pub struct InMemoryNotificationLogRepository {
    logs: Arc<Mutex<Vec<NotificationLog>>>,
}

impl InMemoryNotificationLogRepository {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 記録済みログのスナップショットを取得する（テスト用アサーション向け）
    pub fn logs(&self) -> Vec<NotificationLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationLogRepository for InMemoryNotificationLogRepository {
    async fn insert(&self, log: &NotificationLog) -> Result<(), InfraError> {
        self.logs.lock().unwrap().push(log.clone());
        Ok(())
    }

    async fn find_by_recipient(
        &self,
        usuario_id: UsuarioId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<NotificationLog>, InfraError> {
        let mut logs: Vec<NotificationLog> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.recipient_usuario_id == usuario_id)
            .cloned()
            .collect();

        // 送信日時の降順（新しいものから）
        logs.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));

        Ok(logs.into_iter().skip(skip).take(limit).collect())
    }

    async fn mark_as_read(
        &self,
        id: &NotificationLogId,
        usuario_id: UsuarioId,
        now: DateTime<Utc>,
    ) -> Result<bool, InfraError> {
        let mut logs = self.logs.lock().unwrap();

        let Some(log) = logs
            .iter_mut()
            .find(|l| &l.id == id && l.recipient_usuario_id == usuario_id)
        else {
            return Ok(false);
        };

        log.read_at = Some(now);
        Ok(true)
    }
}
