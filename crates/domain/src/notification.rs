//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`IncapacidadNotification`] | 休暇届通知イベント | 3 種類: 新規登録、承認（審査完了）、却下 |
//! | [`NotificationEventType`] | 通知イベント種別 | 通知ログの `event_type` に格納 |
//!
//! ## 設計方針
//!
//! - **enum による通知イベント**: 各バリアントが宛先（メールアドレスとユーザー ID）を持つ
//! - **fire-and-forget**: 通知送信の失敗は休暇届の操作に影響しない
//! - **テンプレート分離**: 通知イベントとメール生成は分離（TemplateRenderer は notifier アプリ側）

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;
use uuid::Uuid;

use crate::{incapacidad::IncapacidadId, usuario::UsuarioId};

/// 通知ログ ID（一意識別子）
///
/// 通知ログの主キー。UUID v7 を使用し、生成順にソート可能。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{_0}")]
pub struct NotificationLogId(Uuid);

impl NotificationLogId {
    /// 新しい ID を生成する（UUID v7）
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// 既存の UUID から ID を作成する
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 内部の UUID 参照を取得する
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NotificationLogId {
    fn default() -> Self {
        Self::new()
    }
}

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// 通知イベント種別
///
/// 通知ログの `event_type` カラムに格納される値。
/// snake_case でシリアライズされ、元システムの `tipo` 文字列と一致する。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationEventType {
    /// 新規登録: 休暇届が登録されたとき → 管理者全員に送信
    NuevaIncapacidad,
    /// 承認（審査完了）: 管理者が審査を完了したとき → 申請従業員に送信
    IncapacidadRevisada,
    /// 却下: 管理者が却下したとき → 申請従業員に送信（却下理由つき）
    IncapacidadRechazada,
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// 休暇届通知イベント
///
/// 各バリアントが宛先（メールアドレスとユーザー ID）を持つ。
/// `NuevaIncapacidad` は管理者 1 名分で、サービス層が管理者ごとに
/// 複製して fan-out する。
#[derive(Debug, Clone)]
pub enum IncapacidadNotification {
    /// 新規登録: 休暇届が登録された → 管理者に送信
    NuevaIncapacidad {
        incapacidad_id:   IncapacidadId,
        empleado_nombre:  String,
        empleado_email:   String,
        fecha_inicio:     Option<NaiveDate>,
        fecha_final:      Option<NaiveDate>,
        dias:             i32,
        admin_email:      String,
        admin_usuario_id: UsuarioId,
    },
    /// 承認（審査完了）: 管理者が審査を完了した → 申請従業員に送信
    IncapacidadRevisada {
        incapacidad_id:      IncapacidadId,
        empleado_nombre:     String,
        admin_nombre:        String,
        empleado_email:      String,
        empleado_usuario_id: UsuarioId,
    },
    /// 却下: 管理者が却下した → 申請従業員に送信
    IncapacidadRechazada {
        incapacidad_id: IncapacidadId,
        empleado_nombre: String,
        admin_nombre: String,
        motivo_rechazo: Option<String>,
        fecha_inicio: Option<NaiveDate>,
        fecha_final: Option<NaiveDate>,
        dias: i32,
        empleado_email: String,
        empleado_usuario_id: UsuarioId,
    },
}

impl IncapacidadNotification {
    /// 通知イベント種別を返す
    pub fn event_type(&self) -> NotificationEventType {
        match self {
            Self::NuevaIncapacidad { .. } => NotificationEventType::NuevaIncapacidad,
            Self::IncapacidadRevisada { .. } => NotificationEventType::IncapacidadRevisada,
            Self::IncapacidadRechazada { .. } => NotificationEventType::IncapacidadRechazada,
        }
    }

    /// 対象の休暇届 ID を返す
    pub fn incapacidad_id(&self) -> IncapacidadId {
        match self {
            Self::NuevaIncapacidad { incapacidad_id, .. }
            | Self::IncapacidadRevisada { incapacidad_id, .. }
            | Self::IncapacidadRechazada { incapacidad_id, .. } => *incapacidad_id,
        }
    }

    /// 受信者のメールアドレスを返す
    pub fn recipient_email(&self) -> &str {
        match self {
            Self::NuevaIncapacidad { admin_email, .. } => admin_email,
            Self::IncapacidadRevisada { empleado_email, .. }
            | Self::IncapacidadRechazada { empleado_email, .. } => empleado_email,
        }
    }

    /// 受信者のユーザー ID を返す
    pub fn recipient_usuario_id(&self) -> UsuarioId {
        match self {
            Self::NuevaIncapacidad {
                admin_usuario_id, ..
            } => *admin_usuario_id,
            Self::IncapacidadRevisada {
                empleado_usuario_id,
                ..
            }
            | Self::IncapacidadRechazada {
                empleado_usuario_id,
                ..
            } => *empleado_usuario_id,
        }
    }

    /// 申請従業員の氏名を返す（件名の生成に使用）
    pub fn empleado_nombre(&self) -> &str {
        match self {
            Self::NuevaIncapacidad {
                empleado_nombre, ..
            }
            | Self::IncapacidadRevisada {
                empleado_nombre, ..
            }
            | Self::IncapacidadRechazada {
                empleado_nombre, ..
            } => empleado_nombre,
        }
    }
}
