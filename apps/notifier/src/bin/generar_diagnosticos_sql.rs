//! # 診断コード SQL 生成 CLI
//!
//! タブ区切りの診断コード一覧を読み込み、`parametro_hijo` への
//! INSERT スクリプトを生成する一回きりのツール。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run -p incaflow-notifier --bin generar_diagnosticos_sql -- \
//!     diagnosticos.txt insert_diagnosticos_mysql.sql
//! ```

use anyhow::{Context as _, bail};
use incaflow_notifier::diagnosticos::{contar_registros, generar_sql, parse_diagnosticos};
use incaflow_shared::observability::{TracingConfig, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::from_env("generar-diagnosticos-sql"));

    let args: Vec<String> = std::env::args().collect();
    let [_, entrada, salida] = args.as_slice() else {
        bail!("使い方: generar_diagnosticos_sql <entrada.txt> <salida.sql>");
    };

    let contenido = std::fs::read_to_string(entrada)
        .with_context(|| format!("入力ファイルを読み込めません: {entrada}"))?;

    let diagnosticos = parse_diagnosticos(&contenido);
    if diagnosticos.is_empty() {
        bail!("診断コードが 1 件も見つかりませんでした: {entrada}");
    }
    tracing::info!(total = diagnosticos.len(), "診断コードを読み込みました");

    let sql = generar_sql(&diagnosticos, entrada);
    std::fs::write(salida, &sql)
        .with_context(|| format!("出力ファイルを書き込めません: {salida}"))?;

    // 書き込み後の検証: 出力ファイルを読み直して件数を突き合わせる
    let escrito = std::fs::read_to_string(salida)?;
    let registros = contar_registros(&escrito)?;
    if registros != diagnosticos.len() {
        tracing::error!(
            esperados = diagnosticos.len(),
            encontrados = registros,
            "出力 SQL の件数が入力と一致しません"
        );
        bail!("検証失敗: {registros}/{} 件", diagnosticos.len());
    }

    tracing::info!(
        salida = %salida,
        registros,
        "SQL スクリプトを生成しました"
    );

    Ok(())
}
