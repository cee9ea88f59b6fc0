//! # 通知サービス
//!
//! テンプレートレンダリング → メール送信 → ログ記録を統合するサービス。
//!
//! ## 設計方針
//!
//! - **fire-and-forget 送信**: 個々のメール送信失敗はエラーを返さず、結果サマリに反映する
//! - **ログ記録**: 成功・失敗どちらも通知ログに記録
//! - **依存性注入**: リポジトリ・送信・時刻は trait で抽象化

use std::sync::Arc;

use incaflow_domain::{
    clock::Clock,
    incapacidad::{Incapacidad, IncapacidadId},
    notification::{IncapacidadNotification, NotificationLogId},
    usuario::{Usuario, UsuarioId},
};
use incaflow_infra::{
    notification::NotificationSender,
    repository::{
        IncapacidadRepository,
        NotificationLog,
        NotificationLogRepository,
        UsuarioRepository,
    },
};
use incaflow_shared::{event_log::event, log_business_event};
use itertools::Itertools as _;

use super::TemplateRenderer;
use crate::error::NotifierError;

/// 通知送信の結果サマリ
///
/// fan-out 送信（管理者全員への通知）で、何件中何件送信できたかを表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvioResumen {
    /// 送信に成功した件数
    pub enviados:      usize,
    /// 宛先の総数
    pub destinatarios: usize,
}

/// 通知サービス
///
/// 休暇届の操作に伴うメール通知の全体フローを統合する。
pub struct NotificationService {
    usuario_repo: Arc<dyn UsuarioRepository>,
    incapacidad_repo: Arc<dyn IncapacidadRepository>,
    sender: Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
    log_repo: Arc<dyn NotificationLogRepository>,
    clock: Arc<dyn Clock>,
    admin_panel_url: Option<String>,
}

impl NotificationService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        usuario_repo: Arc<dyn UsuarioRepository>,
        incapacidad_repo: Arc<dyn IncapacidadRepository>,
        sender: Arc<dyn NotificationSender>,
        template_renderer: TemplateRenderer,
        log_repo: Arc<dyn NotificationLogRepository>,
        clock: Arc<dyn Clock>,
        admin_panel_url: Option<String>,
    ) -> Self {
        Self {
            usuario_repo,
            incapacidad_repo,
            sender,
            template_renderer,
            log_repo,
            clock,
            admin_panel_url,
        }
    }

    /// 新規休暇届の通知をアクティブな管理者全員に送信する
    ///
    /// 管理者が存在しない場合は警告を出し、宛先 0 件のサマリを返す
    /// （エラーにはしない）。個々の送信失敗もエラーにせず、
    /// サマリの `enviados` に反映する。`Result` だけでは宛先 0 件と
    /// 送信成功を区別できないため、呼び出し側はサマリの
    /// `destinatarios` を確認すること。
    pub async fn notify_nueva_incapacidad(
        &self,
        incapacidad_id: IncapacidadId,
    ) -> Result<EnvioResumen, NotifierError> {
        let (incapacidad, empleado) = self.cargar_incapacidad_y_empleado(incapacidad_id).await?;

        let administradores = self.usuario_repo.find_administradores_activos().await?;

        if administradores.is_empty() {
            tracing::warn!(
                incapacidad_id = %incapacidad_id,
                "通知対象のアクティブな管理者が存在しません"
            );
            return Ok(EnvioResumen {
                enviados:      0,
                destinatarios: 0,
            });
        }

        tracing::info!(
            incapacidad_id = %incapacidad_id,
            destinatarios = %administradores
                .iter()
                .map(|a| a.correo().as_str())
                .join(", "),
            "新規休暇届の通知を送信します"
        );

        let mut enviados = 0;
        for admin in &administradores {
            let notification = IncapacidadNotification::NuevaIncapacidad {
                incapacidad_id,
                empleado_nombre: empleado.nombre().as_str().to_string(),
                empleado_email: empleado.correo().as_str().to_string(),
                fecha_inicio: incapacidad.fecha_inicio(),
                fecha_final: incapacidad.fecha_final(),
                dias: incapacidad.dias(),
                admin_email: admin.correo().as_str().to_string(),
                admin_usuario_id: admin.id(),
            };

            if self.enviar(notification).await {
                enviados += 1;
            }
        }

        Ok(EnvioResumen {
            enviados,
            destinatarios: administradores.len(),
        })
    }

    /// 審査完了（承認）の通知を申請従業員に送信する
    pub async fn notify_incapacidad_revisada(
        &self,
        incapacidad_id: IncapacidadId,
        admin_usuario_id: UsuarioId,
    ) -> Result<EnvioResumen, NotifierError> {
        let (_, empleado) = self.cargar_incapacidad_y_empleado(incapacidad_id).await?;
        let admin = self.cargar_usuario(admin_usuario_id).await?;

        let notification = IncapacidadNotification::IncapacidadRevisada {
            incapacidad_id,
            empleado_nombre: empleado.nombre().as_str().to_string(),
            admin_nombre: admin.nombre().as_str().to_string(),
            empleado_email: empleado.correo().as_str().to_string(),
            empleado_usuario_id: empleado.id(),
        };

        let enviado = self.enviar(notification).await;

        Ok(EnvioResumen {
            enviados:      usize::from(enviado),
            destinatarios: 1,
        })
    }

    /// 却下の通知を申請従業員に送信する
    ///
    /// `motivo_rechazo` が指定されている場合は本文に却下理由を含める。
    pub async fn notify_incapacidad_rechazada(
        &self,
        incapacidad_id: IncapacidadId,
        admin_usuario_id: UsuarioId,
        motivo_rechazo: Option<String>,
    ) -> Result<EnvioResumen, NotifierError> {
        let (incapacidad, empleado) = self.cargar_incapacidad_y_empleado(incapacidad_id).await?;
        let admin = self.cargar_usuario(admin_usuario_id).await?;

        let notification = IncapacidadNotification::IncapacidadRechazada {
            incapacidad_id,
            empleado_nombre: empleado.nombre().as_str().to_string(),
            admin_nombre: admin.nombre().as_str().to_string(),
            motivo_rechazo,
            fecha_inicio: incapacidad.fecha_inicio(),
            fecha_final: incapacidad.fecha_final(),
            dias: incapacidad.dias(),
            empleado_email: empleado.correo().as_str().to_string(),
            empleado_usuario_id: empleado.id(),
        };

        let enviado = self.enviar(notification).await;

        Ok(EnvioResumen {
            enviados:      usize::from(enviado),
            destinatarios: 1,
        })
    }

    /// 受信者ごとの通知履歴を取得する（送信日時の降順、ページング付き）
    pub async fn historial_notificaciones(
        &self,
        usuario_id: UsuarioId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<NotificationLog>, NotifierError> {
        Ok(self
            .log_repo
            .find_by_recipient(usuario_id, skip, limit)
            .await?)
    }

    /// 通知を既読にする
    ///
    /// 受信者本人のみ既読化できる。対象が存在しない、または受信者が
    /// 一致しない場合は `Ok(false)` を返す。
    pub async fn marcar_leida(
        &self,
        log_id: &NotificationLogId,
        usuario_id: UsuarioId,
    ) -> Result<bool, NotifierError> {
        let marcada = self
            .log_repo
            .mark_as_read(log_id, usuario_id, self.clock.now())
            .await?;

        if marcada {
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_READ,
                event.entity_type = event::entity_type::NOTIFICATION_LOG,
                event.entity_id = %log_id,
                event.result = event::result::SUCCESS,
                "通知を既読にしました"
            );
        }

        Ok(marcada)
    }

    /// 休暇届とその申請従業員を取得する
    async fn cargar_incapacidad_y_empleado(
        &self,
        incapacidad_id: IncapacidadId,
    ) -> Result<(Incapacidad, Usuario), NotifierError> {
        let incapacidad = self
            .incapacidad_repo
            .find_by_id(incapacidad_id)
            .await?
            .ok_or_else(|| NotifierError::not_found("incapacidad", incapacidad_id.to_string()))?;

        let empleado = self.cargar_usuario(incapacidad.usuario_id()).await?;

        Ok((incapacidad, empleado))
    }

    async fn cargar_usuario(&self, usuario_id: UsuarioId) -> Result<Usuario, NotifierError> {
        self.usuario_repo
            .find_by_id(usuario_id)
            .await?
            .ok_or_else(|| NotifierError::not_found("usuario", usuario_id.to_string()))
    }

    /// 通知を 1 件送信する（fire-and-forget）
    ///
    /// テンプレートレンダリング → メール送信 → ログ記録を行い、
    /// 送信に成功したかを返す。いずれのステップで失敗しても
    /// エラーは伝播しない（ログ出力のみ）。
    async fn enviar(&self, notification: IncapacidadNotification) -> bool {
        let event_type = notification.event_type();
        let event_type_str: &str = event_type.into();
        let incapacidad_id = notification.incapacidad_id();
        let recipient_usuario_id = notification.recipient_usuario_id();
        let recipient_email = notification.recipient_email().to_string();

        // テンプレートレンダリング
        let email = match self
            .template_renderer
            .render(&notification, self.admin_panel_url.as_deref())
        {
            Ok(email) => email,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    event_type = event_type_str,
                    "通知テンプレートのレンダリングに失敗"
                );
                return false;
            }
        };

        let subject = email.subject.clone();

        // メール送信
        let (enviado, status, error_message) = match self.sender.send_email(&email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.entity_type = event::entity_type::INCAPACIDAD,
                    event.entity_id = %incapacidad_id,
                    event.result = event::result::SUCCESS,
                    notification.event_type = event_type_str,
                    notification.recipient = %recipient_email,
                    "通知メール送信成功"
                );
                (true, "sent".to_string(), None)
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = event::entity_type::INCAPACIDAD,
                    event.entity_id = %incapacidad_id,
                    event.result = event::result::FAILURE,
                    notification.event_type = event_type_str,
                    notification.recipient = %recipient_email,
                    error = %e,
                    "通知メール送信失敗"
                );
                (false, "failed".to_string(), Some(e.to_string()))
            }
        };

        // 通知ログ記録
        let log = NotificationLog {
            id: NotificationLogId::new(),
            event_type: event_type_str.to_string(),
            incapacidad_id,
            recipient_usuario_id,
            recipient_email,
            subject,
            status,
            error_message,
            read_at: None,
            sent_at: self.clock.now(),
        };

        if let Err(e) = self.log_repo.insert(&log).await {
            tracing::error!(
                error = %e,
                "通知ログの記録に失敗"
            );
        }

        enviado
    }
}
