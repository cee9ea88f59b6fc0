//! 通知フローの統合テスト
//!
//! フィクスチャ読み込み → インメモリリポジトリ投入 → 通知サービス実行までを
//! 実際のエントリーポイントと同じ組み立てで検証する。

use std::sync::Arc;

use incaflow_domain::{
    clock::FixedClock,
    incapacidad::IncapacidadId,
    usuario::UsuarioId,
};
use incaflow_infra::{
    memory::{
        InMemoryIncapacidadRepository,
        InMemoryNotificationLogRepository,
        InMemoryUsuarioRepository,
    },
    mock::MockNotificationSender,
    notification::{NoopNotificationSender, NotificationSender},
};
use incaflow_notifier::{
    error::NotifierError,
    fixture::Fixture,
    usecase::{NotificationService, TemplateRenderer},
};
use pretty_assertions::assert_eq;

const FIXTURE_JSON: &str = r#"{
    "usuarios": [
        {
            "id": 42,
            "nombre_completo": "Carlos Pérez",
            "correo": "carlos.perez@example.com",
            "rol_id": 2,
            "estado": true
        },
        {
            "id": 7,
            "nombre_completo": "Laura Gómez",
            "correo": "laura.gomez@example.com",
            "rol_id": 10,
            "estado": true
        },
        {
            "id": 8,
            "nombre_completo": "Ana Ruiz",
            "correo": "ana.ruiz@example.com",
            "rol_id": 10,
            "estado": true
        },
        {
            "id": 9,
            "nombre_completo": "Pedro Díaz",
            "correo": "pedro.diaz@example.com",
            "rol_id": 10,
            "estado": false
        }
    ],
    "incapacidades": [
        {
            "id": 15,
            "usuario_id": 42,
            "tipo_incapacidad_id": 3,
            "fecha_inicio": "2026-01-15",
            "fecha_final": "2026-01-20T00:00:00",
            "dias": 5,
            "diagnostico": "A090 Otras gastroenteritis"
        }
    ]
}"#;

fn make_service(sender: Arc<dyn NotificationSender>) -> (NotificationService, InMemoryNotificationLogRepository) {
    let fixture: Fixture = serde_json::from_str(FIXTURE_JSON).unwrap();
    let (usuarios, incapacidades) = fixture.into_domain().unwrap();

    let usuario_repo = InMemoryUsuarioRepository::new();
    for usuario in usuarios {
        usuario_repo.add_usuario(usuario);
    }

    let incapacidad_repo = InMemoryIncapacidadRepository::new();
    for incapacidad in incapacidades {
        incapacidad_repo.add_incapacidad(incapacidad);
    }

    let log_repo = InMemoryNotificationLogRepository::new();

    let service = NotificationService::new(
        Arc::new(usuario_repo),
        Arc::new(incapacidad_repo),
        sender,
        TemplateRenderer::new(None).unwrap(),
        Arc::new(log_repo.clone()),
        Arc::new(FixedClock::new(chrono::Utc::now())),
        Some("https://admin.incaflow.example.com".to_string()),
    );

    (service, log_repo)
}

#[tokio::test]
async fn 新規休暇届のフローはアクティブな管理者の数だけ送信する() {
    let sender = MockNotificationSender::new();
    let (service, log_repo) = make_service(Arc::new(sender.clone()));

    let resumen = service
        .notify_nueva_incapacidad(IncapacidadId::new(15))
        .await
        .unwrap();

    // アクティブな管理者は Laura と Ana の 2 名（Pedro は inactivo）
    assert_eq!(resumen.enviados, 2);
    assert_eq!(resumen.destinatarios, 2);

    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 2);

    let destinos: Vec<&str> = sent.iter().map(|e| e.to.as_str()).collect();
    assert!(destinos.contains(&"laura.gomez@example.com"));
    assert!(destinos.contains(&"ana.ruiz@example.com"));
    assert!(!destinos.contains(&"pedro.diaz@example.com"));
    assert!(!destinos.contains(&"carlos.perez@example.com"));

    assert_eq!(sent[0].subject, "🆕 Nueva incapacidad - Carlos Pérez");
    assert!(sent[0].html_body.contains("2026-01-15"));
    assert!(sent[0].html_body.contains("2026-01-20"));
    assert!(
        sent[0]
            .html_body
            .contains("https://admin.incaflow.example.com")
    );

    // 送信 1 件につき通知ログが 1 行記録される
    let logs = log_repo.logs();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l.status == "sent"));
    assert!(logs.iter().all(|l| l.event_type == "nueva_incapacidad"));
}

#[tokio::test]
async fn noopバックエンドでもフローは成功として扱われる() {
    // SMTP 認証情報なしの環境に相当: 実送信せず成功を報告する
    let (service, log_repo) = make_service(Arc::new(NoopNotificationSender));

    let resumen = service
        .notify_nueva_incapacidad(IncapacidadId::new(15))
        .await
        .unwrap();

    assert_eq!(resumen.enviados, 2);
    assert_eq!(resumen.destinatarios, 2);
    assert!(log_repo.logs().iter().all(|l| l.status == "sent"));
}

#[tokio::test]
async fn 存在しない休暇届はエラーになり送信は発生しない() {
    let sender = MockNotificationSender::new();
    let (service, log_repo) = make_service(Arc::new(sender.clone()));

    let result = service.notify_nueva_incapacidad(IncapacidadId::new(999)).await;

    assert!(matches!(result, Err(NotifierError::NotFound { .. })));
    assert!(sender.sent_emails().is_empty());
    assert!(log_repo.logs().is_empty());
}

#[tokio::test]
async fn 却下フローの通知は履歴から既読化できる() {
    let sender = MockNotificationSender::new();
    let (service, _log_repo) = make_service(Arc::new(sender.clone()));

    service
        .notify_incapacidad_rechazada(
            IncapacidadId::new(15),
            UsuarioId::new(7),
            Some("Documento ilegible".to_string()),
        )
        .await
        .unwrap();

    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "carlos.perez@example.com");
    assert!(sent[0].text_body.contains("Documento ilegible"));

    // 従業員本人の履歴に表示され、既読化できる
    let historial = service
        .historial_notificaciones(UsuarioId::new(42), 0, 10)
        .await
        .unwrap();
    assert_eq!(historial.len(), 1);
    assert_eq!(historial[0].event_type, "incapacidad_rechazada");

    let marcada = service
        .marcar_leida(&historial[0].id, UsuarioId::new(42))
        .await
        .unwrap();
    assert!(marcada);

    // 管理者の履歴には表示されない
    let historial_admin = service
        .historial_notificaciones(UsuarioId::new(7), 0, 10)
        .await
        .unwrap();
    assert!(historial_admin.is_empty());
}
