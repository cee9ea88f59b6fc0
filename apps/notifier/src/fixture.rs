//! # フィクスチャ読み込み
//!
//! 開発用 CLI が使用するユーザー・休暇届の投入データを JSON から読み込む。
//!
//! 永続化層は本サービスの対象外のため、インメモリリポジトリへの
//! 初期データ投入はこのフィクスチャで行う。日付フィールドは
//! `AAAA-MM-DD` と `AAAA-MM-DDTHH:MM:SS` の両形式を受け入れる
//! （元データのエクスポート形式が混在しているため）。

use chrono::NaiveDate;
use incaflow_domain::{
    incapacidad::{Incapacidad, IncapacidadId},
    usuario::{Email, EstadoUsuario, NombreCompleto, Usuario, UsuarioId},
};
use incaflow_infra::InfraError;
use serde::Deserialize;

use crate::error::NotifierError;

/// フィクスチャファイル全体
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub usuarios:      Vec<UsuarioDto>,
    pub incapacidades: Vec<IncapacidadDto>,
}

/// ユーザーの投入データ
#[derive(Debug, Deserialize)]
pub struct UsuarioDto {
    pub id:              i64,
    pub nombre_completo: String,
    pub correo:          String,
    pub rol_id:          i32,
    /// 元システムの boolean `estado`（true = activo）
    pub estado:          bool,
}

/// 休暇届の投入データ
#[derive(Debug, Deserialize)]
pub struct IncapacidadDto {
    pub id: i64,
    pub usuario_id: i64,
    #[serde(default)]
    pub tipo_incapacidad_id: Option<i64>,
    #[serde(default)]
    pub clase: Option<String>,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_final: Option<String>,
    #[serde(default)]
    pub dias: i32,
    #[serde(default)]
    pub eps_afiliado: Option<String>,
    #[serde(default)]
    pub servicio: Option<String>,
    #[serde(default)]
    pub diagnostico: Option<String>,
}

impl Fixture {
    /// JSON ファイルからフィクスチャを読み込む
    pub fn load(path: &str) -> Result<Self, NotifierError> {
        let contents = std::fs::read_to_string(path).map_err(InfraError::from)?;
        let fixture: Fixture = serde_json::from_str(&contents).map_err(InfraError::from)?;
        Ok(fixture)
    }

    /// ドメインエンティティに変換する
    ///
    /// 値オブジェクトのバリデーションに失敗した場合は
    /// `NotifierError::Validation` を返す。
    pub fn into_domain(self) -> Result<(Vec<Usuario>, Vec<Incapacidad>), NotifierError> {
        let usuarios = self
            .usuarios
            .into_iter()
            .map(UsuarioDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        let incapacidades = self
            .incapacidades
            .into_iter()
            .map(IncapacidadDto::into_domain)
            .collect::<Vec<_>>();

        Ok((usuarios, incapacidades))
    }
}

impl UsuarioDto {
    fn into_domain(self) -> Result<Usuario, NotifierError> {
        let nombre = NombreCompleto::new(self.nombre_completo)
            .map_err(|e| NotifierError::Validation(e.to_string()))?;
        let correo =
            Email::new(self.correo).map_err(|e| NotifierError::Validation(e.to_string()))?;

        Ok(Usuario::new(
            UsuarioId::new(self.id),
            nombre,
            correo,
            incaflow_domain::usuario::RolId::new(self.rol_id),
            EstadoUsuario::from(self.estado),
        ))
    }
}

impl IncapacidadDto {
    fn into_domain(self) -> Incapacidad {
        Incapacidad::new(
            IncapacidadId::new(self.id),
            UsuarioId::new(self.usuario_id),
            self.tipo_incapacidad_id,
            self.clase,
            self.fecha_inicio.as_deref().and_then(parse_fecha),
            self.fecha_final.as_deref().and_then(parse_fecha),
            self.dias,
            self.eps_afiliado,
            self.servicio,
            self.diagnostico,
        )
    }
}

/// 日付文字列をパースする
///
/// `AAAA-MM-DD` と `AAAA-MM-DDTHH:MM:SS`（または空白区切り）の
/// 両形式を受け入れる。パースできない値は `None` とし、表示時に
/// "N/A" へフォールバックさせる。
fn parse_fecha(s: &str) -> Option<NaiveDate> {
    let date_part = s
        .split_once(['T', ' '])
        .map_or(s, |(fecha, _hora)| fecha);

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
