//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで通知メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **件名パターン**: `{絵文字} {イベント種別} - {従業員氏名}`
//! - **管理パネルリンク**: `admin_panel_url` が設定されている場合のみ CTA を表示
//! - **ロゴ画像**: 起動時に読み込み、Base64 で HTML に埋め込む

use base64::Engine as _;
use incaflow_domain::{
    incapacidad::fecha_corta,
    notification::{EmailMessage, IncapacidadNotification, NotificationError},
};
use tera::{Context, Tera};

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`IncapacidadNotification` から
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine:      Tera,
    logo_base64: Option<String>,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    /// `logo_file` が指定されている場合はロゴ画像を読み込み、
    /// Base64 エンコードして保持する。
    pub fn new(logo_file: Option<&str>) -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "nueva_incapacidad.html",
                    include_str!("../../../templates/notifications/nueva_incapacidad.html"),
                ),
                (
                    "nueva_incapacidad.txt",
                    include_str!("../../../templates/notifications/nueva_incapacidad.txt"),
                ),
                (
                    "incapacidad_revisada.html",
                    include_str!("../../../templates/notifications/incapacidad_revisada.html"),
                ),
                (
                    "incapacidad_revisada.txt",
                    include_str!("../../../templates/notifications/incapacidad_revisada.txt"),
                ),
                (
                    "incapacidad_rechazada.html",
                    include_str!("../../../templates/notifications/incapacidad_rechazada.html"),
                ),
                (
                    "incapacidad_rechazada.txt",
                    include_str!("../../../templates/notifications/incapacidad_rechazada.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let logo_base64 = match logo_file {
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    NotificationError::TemplateFailed(format!(
                        "ロゴ画像の読み込みに失敗 ({path}): {e}"
                    ))
                })?;
                Some(base64::engine::general_purpose::STANDARD.encode(bytes))
            }
            None => None,
        };

        Ok(Self {
            engine,
            logo_base64,
        })
    }

    /// 通知イベントからメールメッセージを生成する
    ///
    /// # 引数
    ///
    /// - `notification`: 休暇届通知イベント
    /// - `admin_panel_url`: 管理パネル URL（`None` の場合 CTA リンク非表示）
    pub fn render(
        &self,
        notification: &IncapacidadNotification,
        admin_panel_url: Option<&str>,
    ) -> Result<EmailMessage, NotificationError> {
        let (template_name, subject, context) =
            self.build_template_params(notification, admin_panel_url);

        let html_body = self
            .engine
            .render(&format!("{template_name}.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{template_name}.txt"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: notification.recipient_email().to_string(),
            subject,
            html_body,
            text_body,
        })
    }

    /// テンプレート名、件名、コンテキストを構築する
    fn build_template_params(
        &self,
        notification: &IncapacidadNotification,
        admin_panel_url: Option<&str>,
    ) -> (String, String, Context) {
        let empleado_nombre = notification.empleado_nombre().to_string();

        let mut context = Context::new();
        context.insert("empleado_nombre", &empleado_nombre);
        if let Some(url) = admin_panel_url {
            context.insert("panel_url", url);
        }
        if let Some(logo) = &self.logo_base64 {
            context.insert("logo_base64", logo);
        }

        let (template_name, subject) = match notification {
            IncapacidadNotification::NuevaIncapacidad {
                empleado_email,
                fecha_inicio,
                fecha_final,
                dias,
                ..
            } => {
                context.insert("empleado_email", empleado_email);
                context.insert("fecha_inicio", &fecha_corta(*fecha_inicio));
                context.insert("fecha_final", &fecha_corta(*fecha_final));
                context.insert("dias", dias);
                (
                    "nueva_incapacidad".to_string(),
                    format!("🆕 Nueva incapacidad - {empleado_nombre}"),
                )
            }
            IncapacidadNotification::IncapacidadRevisada { admin_nombre, .. } => {
                context.insert("admin_nombre", admin_nombre);
                (
                    "incapacidad_revisada".to_string(),
                    format!("✅ Incapacidad Revisada - {empleado_nombre}"),
                )
            }
            IncapacidadNotification::IncapacidadRechazada {
                admin_nombre,
                motivo_rechazo,
                fecha_inicio,
                fecha_final,
                dias,
                ..
            } => {
                context.insert("admin_nombre", admin_nombre);
                // 元システムの表示仕様: 理由未指定は "No especificado"
                context.insert(
                    "motivo_rechazo",
                    motivo_rechazo.as_deref().unwrap_or("No especificado"),
                );
                context.insert("fecha_inicio", &fecha_corta(*fecha_inicio));
                context.insert("fecha_final", &fecha_corta(*fecha_final));
                context.insert("dias", dias);
                (
                    "incapacidad_rechazada".to_string(),
                    format!("❌ Incapacidad Rechazada - {empleado_nombre}"),
                )
            }
        };

        (template_name, subject, context)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use incaflow_domain::{incapacidad::IncapacidadId, usuario::UsuarioId};

    use super::*;

    fn make_nueva() -> IncapacidadNotification {
        IncapacidadNotification::NuevaIncapacidad {
            incapacidad_id:   IncapacidadId::new(15),
            empleado_nombre:  "Carlos Pérez".to_string(),
            empleado_email:   "carlos.perez@example.com".to_string(),
            fecha_inicio:     NaiveDate::from_ymd_opt(2026, 1, 15),
            fecha_final:      NaiveDate::from_ymd_opt(2026, 1, 20),
            dias:             5,
            admin_email:      "laura.gomez@example.com".to_string(),
            admin_usuario_id: UsuarioId::new(7),
        }
    }

    #[test]
    fn newが正常に初期化される() {
        let renderer = TemplateRenderer::new(None);
        assert!(renderer.is_ok());
    }

    #[test]
    fn newで存在しないロゴファイルはエラーになる() {
        let renderer = TemplateRenderer::new(Some("/no/existe/logo.png"));
        assert!(renderer.is_err());
    }

    #[test]
    fn nueva_incapacidadのレンダリングが正しい() {
        let renderer = TemplateRenderer::new(None).unwrap();

        let email = renderer.render(&make_nueva(), None).unwrap();

        assert_eq!(email.to, "laura.gomez@example.com");
        assert_eq!(email.subject, "🆕 Nueva incapacidad - Carlos Pérez");
        assert!(email.html_body.contains("Carlos Pérez"));
        assert!(email.html_body.contains("carlos.perez@example.com"));
        assert!(email.html_body.contains("2026-01-15"));
        assert!(email.html_body.contains("2026-01-20"));
        assert!(email.text_body.contains("Carlos Pérez"));
        assert!(email.text_body.contains("2026-01-15"));
    }

    #[test]
    fn nueva_incapacidadで日付なしはnaと表示される() {
        let renderer = TemplateRenderer::new(None).unwrap();
        let notification = IncapacidadNotification::NuevaIncapacidad {
            incapacidad_id:   IncapacidadId::new(15),
            empleado_nombre:  "Carlos Pérez".to_string(),
            empleado_email:   "carlos.perez@example.com".to_string(),
            fecha_inicio:     None,
            fecha_final:      None,
            dias:             0,
            admin_email:      "laura.gomez@example.com".to_string(),
            admin_usuario_id: UsuarioId::new(7),
        };

        let email = renderer.render(&notification, None).unwrap();

        assert!(email.text_body.contains("N/A"));
    }

    #[test]
    fn incapacidad_revisadaのレンダリングが正しい() {
        let renderer = TemplateRenderer::new(None).unwrap();
        let notification = IncapacidadNotification::IncapacidadRevisada {
            incapacidad_id:      IncapacidadId::new(15),
            empleado_nombre:     "Carlos Pérez".to_string(),
            admin_nombre:        "Laura Gómez".to_string(),
            empleado_email:      "carlos.perez@example.com".to_string(),
            empleado_usuario_id: UsuarioId::new(42),
        };

        let email = renderer.render(&notification, None).unwrap();

        assert_eq!(email.to, "carlos.perez@example.com");
        assert_eq!(email.subject, "✅ Incapacidad Revisada - Carlos Pérez");
        assert!(email.html_body.contains("Laura Gómez"));
        assert!(email.text_body.contains("Laura Gómez"));
    }

    #[test]
    fn incapacidad_rechazadaで却下理由ありの場合が正しい() {
        let renderer = TemplateRenderer::new(None).unwrap();
        let notification = IncapacidadNotification::IncapacidadRechazada {
            incapacidad_id: IncapacidadId::new(15),
            empleado_nombre: "Carlos Pérez".to_string(),
            admin_nombre: "Laura Gómez".to_string(),
            motivo_rechazo: Some("Documento ilegible".to_string()),
            fecha_inicio: NaiveDate::from_ymd_opt(2026, 1, 15),
            fecha_final: NaiveDate::from_ymd_opt(2026, 1, 20),
            dias: 5,
            empleado_email: "carlos.perez@example.com".to_string(),
            empleado_usuario_id: UsuarioId::new(42),
        };

        let email = renderer.render(&notification, None).unwrap();

        assert_eq!(email.subject, "❌ Incapacidad Rechazada - Carlos Pérez");
        assert!(email.html_body.contains("Documento ilegible"));
        assert!(email.text_body.contains("Documento ilegible"));
    }

    #[test]
    fn incapacidad_rechazadaで却下理由なしはno_especificadoになる() {
        let renderer = TemplateRenderer::new(None).unwrap();
        let notification = IncapacidadNotification::IncapacidadRechazada {
            incapacidad_id: IncapacidadId::new(15),
            empleado_nombre: "Carlos Pérez".to_string(),
            admin_nombre: "Laura Gómez".to_string(),
            motivo_rechazo: None,
            fecha_inicio: NaiveDate::from_ymd_opt(2026, 1, 15),
            fecha_final: NaiveDate::from_ymd_opt(2026, 1, 20),
            dias: 5,
            empleado_email: "carlos.perez@example.com".to_string(),
            empleado_usuario_id: UsuarioId::new(42),
        };

        let email = renderer.render(&notification, None).unwrap();

        assert!(email.html_body.contains("No especificado"));
        assert!(email.text_body.contains("No especificado"));
    }

    #[test]
    fn panel_urlありの場合はhtmlにリンクが含まれる() {
        let renderer = TemplateRenderer::new(None).unwrap();

        let email = renderer
            .render(&make_nueva(), Some("https://admin.incaflow.example.com"))
            .unwrap();

        assert!(
            email
                .html_body
                .contains("https://admin.incaflow.example.com")
        );
    }

    #[test]
    fn panel_urlなしの場合はhtmlにリンクが含まれない() {
        let renderer = TemplateRenderer::new(None).unwrap();

        let email = renderer.render(&make_nueva(), None).unwrap();

        assert!(!email.html_body.contains("Ir al panel"));
    }
}
