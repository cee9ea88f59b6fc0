//! # Notifier CLI
//!
//! 休暇届の通知フローを実行する開発用エントリーポイント。
//! Web ルーティング層は本サービスの対象外のため、イベントのディスパッチは
//! このコマンドライン引数で代替する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `FIXTURE_PATH` | No | 投入データ JSON（デフォルト: `fixtures/incapacidades.json`） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` \| `noop`（未設定時は認証情報から推定） |
//! | `SMTP_HOST` / `SMTP_PORT` | No | SMTP 接続先 |
//! | `SMTP_USERNAME` / `SMTP_PASSWORD` | No | SMTP 認証情報（両方未設定なら noop） |
//! | `NOTIFICATION_FROM_ADDRESS` | No | 送信元メールアドレス |
//! | `ADMIN_PANEL_URL` | No | メール内 CTA リンク |
//! | `EMAIL_LOGO_FILE` | No | メールに埋め込むロゴ画像 |
//! | `LOG_FORMAT` | No | `json` \| `pretty` |
//!
//! ## 使い方
//!
//! ```bash
//! cargo run -p incaflow-notifier -- nueva 15
//! cargo run -p incaflow-notifier -- revisada 15 7
//! cargo run -p incaflow-notifier -- rechazada 15 7 "Documento ilegible"
//! ```

use std::sync::Arc;

use anyhow::{Context as _, bail};
use incaflow_domain::{clock::SystemClock, incapacidad::IncapacidadId, usuario::UsuarioId};
use incaflow_infra::{
    memory::{
        InMemoryIncapacidadRepository,
        InMemoryNotificationLogRepository,
        InMemoryUsuarioRepository,
    },
    notification::{NoopNotificationSender, NotificationSender, SmtpNotificationSender},
};
use incaflow_notifier::{
    config::{NotificationConfig, NotifierConfig},
    fixture::Fixture,
    usecase::{NotificationService, TemplateRenderer},
};
use incaflow_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("notifier"));

    let config = NotifierConfig::from_env();

    // フィクスチャからインメモリリポジトリに投入
    let (usuarios, incapacidades) = Fixture::load(&config.fixture_path)
        .with_context(|| format!("フィクスチャの読み込みに失敗: {}", config.fixture_path))?
        .into_domain()?;

    let usuario_repo = InMemoryUsuarioRepository::new();
    for usuario in usuarios {
        usuario_repo.add_usuario(usuario);
    }

    let incapacidad_repo = InMemoryIncapacidadRepository::new();
    for incapacidad in incapacidades {
        incapacidad_repo.add_incapacidad(incapacidad);
    }

    let sender = build_sender(&config.notification)?;
    let template_renderer = TemplateRenderer::new(config.notification.logo_file.as_deref())?;

    let service = NotificationService::new(
        Arc::new(usuario_repo),
        Arc::new(incapacidad_repo),
        sender,
        template_renderer,
        Arc::new(InMemoryNotificationLogRepository::new()),
        Arc::new(SystemClock),
        config.notification.admin_panel_url.clone(),
    );

    // コマンドディスパッチ
    let args: Vec<String> = std::env::args().skip(1).collect();
    let resumen = match args.as_slice() {
        [cmd, id] if cmd == "nueva" => {
            service
                .notify_nueva_incapacidad(parse_incapacidad_id(id)?)
                .await?
        }
        [cmd, id, admin_id] if cmd == "revisada" => {
            service
                .notify_incapacidad_revisada(
                    parse_incapacidad_id(id)?,
                    parse_usuario_id(admin_id)?,
                )
                .await?
        }
        [cmd, id, admin_id, resto @ ..] if cmd == "rechazada" && resto.len() <= 1 => {
            service
                .notify_incapacidad_rechazada(
                    parse_incapacidad_id(id)?,
                    parse_usuario_id(admin_id)?,
                    resto.first().cloned(),
                )
                .await?
        }
        _ => {
            bail!(
                "使い方: notifier <nueva <id> | revisada <id> <admin_id> | rechazada <id> <admin_id> [motivo]>"
            );
        }
    };

    tracing::info!(
        enviados = resumen.enviados,
        destinatarios = resumen.destinatarios,
        "通知フローが完了しました"
    );

    Ok(())
}

/// 設定から送信バックエンドを構築する
///
/// 不明なバックエンド名は警告を出して noop にフォールバックする。
fn build_sender(config: &NotificationConfig) -> anyhow::Result<Arc<dyn NotificationSender>> {
    let sender: Arc<dyn NotificationSender> = match config.backend.as_str() {
        "smtp" => match (&config.smtp_username, &config.smtp_password) {
            (Some(username), Some(password)) => Arc::new(SmtpNotificationSender::with_credentials(
                &config.smtp_host,
                config.smtp_port,
                username.clone(),
                password.clone(),
                config.from_address.clone(),
            )?),
            _ => Arc::new(SmtpNotificationSender::new(
                &config.smtp_host,
                config.smtp_port,
                config.from_address.clone(),
            )),
        },
        "noop" => Arc::new(NoopNotificationSender),
        other => {
            tracing::warn!(backend = other, "不明な通知バックエンド。noop を使用します");
            Arc::new(NoopNotificationSender)
        }
    };

    tracing::info!(backend = %config.backend, "通知バックエンドを初期化しました");

    Ok(sender)
}

fn parse_incapacidad_id(s: &str) -> anyhow::Result<IncapacidadId> {
    let id: i64 = s
        .parse()
        .with_context(|| format!("休暇届 ID が不正です: {s}"))?;
    Ok(IncapacidadId::new(id))
}

fn parse_usuario_id(s: &str) -> anyhow::Result<UsuarioId> {
    let id: i64 = s
        .parse()
        .with_context(|| format!("ユーザー ID が不正です: {s}"))?;
    Ok(UsuarioId::new(id))
}
