//! # ユーザー（usuario）
//!
//! 人事システムのユーザーエンティティと関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`Usuario`] | 従業員・管理者を含むシステム利用者 | 休暇届（incapacidad）の申請者または審査者 |
//! | [`RolId`] | ロール識別子 | 元システムでは `rol_id = 10` が管理者（administrador） |
//! | [`EstadoUsuario`] | ユーザー状態 | 無効化されたユーザーは通知対象外 |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: UsuarioId は整数主キーをラップし、型安全性を確保
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
//! - **不変性**: エンティティフィールドは不変、参照は getter 経由

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

define_int_id! {
    /// ユーザー ID（一意識別子）
    ///
    /// 元システムの `usuarios.id_usuario`（整数連番）に対応する。
    pub struct UsuarioId;
}

define_validated_string! {
    /// 氏名（値オブジェクト）
    ///
    /// 元システムの `nombre_completo`。通知メールの宛名に使用する。
    pub struct NombreCompleto {
        label: "el nombre completo",
        max_length: 200,
    }
}

/// ロール ID（値オブジェクト）
///
/// 元システムのロールマスタの整数 ID をラップする。
/// 管理者ロールは `10` 固定（[`RolId::ADMINISTRADOR`]）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{_0}")]
pub struct RolId(i32);

impl RolId {
    /// 管理者ロール（元システムの rol_id = 10）
    pub const ADMINISTRADOR: RolId = RolId(10);

    /// 生の整数からロール ID を作成する
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// 管理者ロールか判定する
    pub fn is_administrador(&self) -> bool {
        *self == Self::ADMINISTRADOR
    }
}

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形式である
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "el correo electrónico es obligatorio".to_string(),
            ));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "el formato del correo electrónico es inválido".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "el formato del correo electrónico es inválido".to_string(),
            ));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "el correo electrónico no puede superar 255 caracteres".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ユーザーステータス
///
/// 元システムの `estado`（boolean）を列挙型で表現する。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EstadoUsuario {
    /// アクティブ（通知対象）
    Activo,
    /// 非アクティブ（退職・停止中。通知対象外）
    Inactivo,
}

impl From<bool> for EstadoUsuario {
    fn from(estado: bool) -> Self {
        if estado { Self::Activo } else { Self::Inactivo }
    }
}

/// ユーザーエンティティ
///
/// 休暇届の申請者（従業員）と審査者（管理者）の両方を表現する。
///
/// # 不変条件
///
/// - `correo` は生成時にバリデーション済み
/// - `estado` が `Inactivo` のユーザーは通知の宛先にならない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usuario {
    id:     UsuarioId,
    nombre: NombreCompleto,
    correo: Email,
    rol_id: RolId,
    estado: EstadoUsuario,
}

impl Usuario {
    /// 新しいユーザーを作成する
    pub fn new(
        id: UsuarioId,
        nombre: NombreCompleto,
        correo: Email,
        rol_id: RolId,
        estado: EstadoUsuario,
    ) -> Self {
        Self {
            id,
            nombre,
            correo,
            rol_id,
            estado,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> UsuarioId {
        self.id
    }

    pub fn nombre(&self) -> &NombreCompleto {
        &self.nombre
    }

    pub fn correo(&self) -> &Email {
        &self.correo
    }

    pub fn rol_id(&self) -> RolId {
        self.rol_id
    }

    pub fn estado(&self) -> EstadoUsuario {
        self.estado
    }

    // ビジネスロジックメソッド

    /// ユーザーがアクティブか判定する
    pub fn is_activo(&self) -> bool {
        self.estado == EstadoUsuario::Activo
    }

    /// 通知対象の管理者か判定する
    ///
    /// 管理者ロール（rol_id = 10）かつアクティブであること。
    pub fn is_administrador_activo(&self) -> bool {
        self.rol_id.is_administrador() && self.is_activo()
    }
}
