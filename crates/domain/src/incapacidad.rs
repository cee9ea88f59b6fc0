//! # 休暇届（incapacidad）
//!
//! 従業員の病欠・就業不能届のエンティティを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`Incapacidad`] | 休暇届（病欠・就業不能の記録） | 登録・承認・却下の各イベントで通知を発行する |
//!
//! ## 設計方針
//!
//! - **通知に必要なフィールドのみ保持**: 永続化スキーマは本サービスの対象外
//! - **日付は `Option<NaiveDate>`**: 元データに欠損があり得るため、
//!   表示時に "N/A" へフォールバックする（[`fecha_corta`]）

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::usuario::UsuarioId;

define_int_id! {
    /// 休暇届 ID（一意識別子）
    ///
    /// 元システムの `incapacidades.id`（整数連番）に対応する。
    pub struct IncapacidadId;
}

/// 日付を `AAAA-MM-DD` 形式の短い文字列にする
///
/// 値がない場合は `"N/A"` を返す。メール本文・件名での表示用。
pub fn fecha_corta(fecha: Option<NaiveDate>) -> String {
    match fecha {
        Some(f) => f.format("%Y-%m-%d").to_string(),
        None => "N/A".to_string(),
    }
}

/// 休暇届エンティティ
///
/// 通知メールの本文生成に必要な属性を保持する。
/// EPS・診療科・診断名は元データで欠損があり得るため Option とし、
/// 表示時に "N/A" へフォールバックする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incapacidad {
    id: IncapacidadId,
    usuario_id: UsuarioId,
    tipo_incapacidad_id: Option<i64>,
    clase: String,
    fecha_inicio: Option<NaiveDate>,
    fecha_final: Option<NaiveDate>,
    dias: i32,
    eps_afiliado: Option<String>,
    servicio: Option<String>,
    diagnostico: Option<String>,
}

impl Incapacidad {
    /// 新しい休暇届を作成する
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: IncapacidadId,
        usuario_id: UsuarioId,
        tipo_incapacidad_id: Option<i64>,
        clase: Option<String>,
        fecha_inicio: Option<NaiveDate>,
        fecha_final: Option<NaiveDate>,
        dias: i32,
        eps_afiliado: Option<String>,
        servicio: Option<String>,
        diagnostico: Option<String>,
    ) -> Self {
        Self {
            id,
            usuario_id,
            tipo_incapacidad_id,
            // 元システムのデフォルト値
            clase: clase.unwrap_or_else(|| "incapacidad".to_string()),
            fecha_inicio,
            fecha_final,
            dias,
            eps_afiliado,
            servicio,
            diagnostico,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> IncapacidadId {
        self.id
    }

    pub fn usuario_id(&self) -> UsuarioId {
        self.usuario_id
    }

    pub fn tipo_incapacidad_id(&self) -> Option<i64> {
        self.tipo_incapacidad_id
    }

    pub fn clase(&self) -> &str {
        &self.clase
    }

    pub fn fecha_inicio(&self) -> Option<NaiveDate> {
        self.fecha_inicio
    }

    pub fn fecha_final(&self) -> Option<NaiveDate> {
        self.fecha_final
    }

    pub fn dias(&self) -> i32 {
        self.dias
    }

    /// EPS（加入保険）。欠損時は "N/A"
    pub fn eps_afiliado(&self) -> &str {
        self.eps_afiliado.as_deref().unwrap_or("N/A")
    }

    /// 診療科。欠損時は "N/A"
    pub fn servicio(&self) -> &str {
        self.servicio.as_deref().unwrap_or("N/A")
    }

    /// 診断名。欠損時は "N/A"
    pub fn diagnostico(&self) -> &str {
        self.diagnostico.as_deref().unwrap_or("N/A")
    }
}
