//! # Notifier 設定
//!
//! 環境変数から通知サービスの設定を読み込む。

use std::env;

/// Notifier サービスの設定
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// フィクスチャファイルのパス（ユーザー・休暇届の投入データ）
    pub fixture_path: String,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: SMTP サーバー経由で送信
/// - `noop`: 送信しない（ログ出力のみ）
///
/// 未設定の場合は SMTP 認証情報の有無から推定する
/// （[`infer_backend`] を参照）。
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド（"smtp" | "noop"）
    pub backend:         String,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:       String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:       u16,
    /// SMTP ユーザー名（認証付き送信の場合に使用）
    pub smtp_username:   Option<String>,
    /// SMTP パスワード（認証付き送信の場合に使用）
    pub smtp_password:   Option<String>,
    /// 送信元メールアドレス
    pub from_address:    String,
    /// 管理パネル URL（メール内 CTA リンク用、未設定でリンク非表示）
    pub admin_panel_url: Option<String>,
    /// メールロゴ画像のパス（未設定でロゴ非表示）
    pub logo_file:       Option<String>,
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            fixture_path: env::var("FIXTURE_PATH")
                .unwrap_or_else(|_| "fixtures/incapacidades.json".to_string()),
            notification: NotificationConfig::from_env(),
        }
    }
}

impl NotificationConfig {
    /// 環境変数から通知設定を読み込む
    pub fn from_env() -> Self {
        let smtp_username = env::var("SMTP_USERNAME").ok().filter(|s| !s.is_empty());
        let smtp_password = env::var("SMTP_PASSWORD").ok().filter(|s| !s.is_empty());

        Self {
            backend: env::var("NOTIFICATION_BACKEND").unwrap_or_else(|_| {
                infer_backend(smtp_username.as_deref(), smtp_password.as_deref()).to_string()
            }),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .expect("SMTP_PORT は有効なポート番号である必要があります"),
            smtp_username,
            smtp_password,
            from_address: env::var("NOTIFICATION_FROM_ADDRESS")
                .unwrap_or_else(|_| "noreply@incaflow.example.com".to_string()),
            admin_panel_url: env::var("ADMIN_PANEL_URL").ok().filter(|s| !s.is_empty()),
            logo_file: env::var("EMAIL_LOGO_FILE").ok().filter(|s| !s.is_empty()),
        }
    }
}

/// SMTP 認証情報の有無から送信バックエンドを推定する
///
/// ユーザー名とパスワードの両方が設定されている場合のみ `smtp`。
/// どちらかが欠けている環境（ローカル開発など）では実送信せず `noop` とし、
/// 通知フロー自体は成功として扱う。
pub fn infer_backend(smtp_username: Option<&str>, smtp_password: Option<&str>) -> &'static str {
    match (smtp_username, smtp_password) {
        (Some(_), Some(_)) => "smtp",
        _ => "noop",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ===== infer_backend テスト =====

    #[test]
    fn 認証情報が両方あればsmtpになる() {
        assert_eq!(infer_backend(Some("user"), Some("pass")), "smtp");
    }

    #[test]
    fn 認証情報が欠けていればnoopになる() {
        assert_eq!(infer_backend(None, None), "noop");
        assert_eq!(infer_backend(Some("user"), None), "noop");
        assert_eq!(infer_backend(None, Some("pass")), "noop");
    }
}
