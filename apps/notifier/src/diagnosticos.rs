//! # 診断コード SQL シーダー
//!
//! タブ区切りの診断コード一覧（CIE-10）を MySQL の `INSERT` 文に変換する。
//! `parametro_hijo` テーブルへの初期データ投入用の一回きりのバッチ処理。
//!
//! ## 入力形式
//!
//! ```text
//! COD_4	DESCRIPCION
//! A090	OTRAS GASTROENTERITIS Y COLITIS DE ORIGEN INFECCIOSO
//! ```
//!
//! - 空行とヘッダー行（`COD_4` / `DESCRIPCION` で始まる行）はスキップ
//! - コードは 4 文字以上、先頭がアルファベット、残りが数字であること

use std::fmt::Write as _;

use itertools::Itertools as _;
use regex::Regex;

use crate::error::NotifierError;

/// 1 バッチあたりの行数
const TAMANO_LOTE: usize = 100;

/// `parametro_hijo.parametro_id` の固定値（診断コードカテゴリ）
const PARAMETRO_ID: i64 = 7;

/// INSERT 行の検証用パターン
///
/// 文字列リテラル部分は `\'` / `\"` のエスケープシーケンスを許容する。
const PATRON_REGISTRO: &str = r"\(7, '(?:\\.|[^'\\])+', '(?:\\.|[^'\\])+', 1\)";

/// 診断コードと説明のペア
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostico {
    pub codigo:      String,
    pub descripcion: String,
}

/// タブ区切りテキストから診断コードを抽出する
///
/// 不正な行（タブなし、コード形式違反）は黙ってスキップする。
/// 元データにはヘッダーや空行が混在しているため、エラーにはしない。
pub fn parse_diagnosticos(contenido: &str) -> Vec<Diagnostico> {
    contenido
        .lines()
        .filter_map(|linea| {
            let linea = linea.trim();
            if linea.is_empty()
                || linea.starts_with("COD_4")
                || linea.starts_with("DESCRIPCION")
            {
                return None;
            }

            let (codigo, descripcion) = linea.split_once('\t')?;
            let codigo = codigo.trim();
            let descripcion = descripcion.trim();

            if !es_codigo_valido(codigo) {
                return None;
            }

            Some(Diagnostico {
                codigo:      codigo.to_string(),
                descripcion: descripcion.to_string(),
            })
        })
        .collect()
}

/// 診断コードの形式を検証する
///
/// 4 文字以上、先頭がアルファベット、残りがすべて数字。
fn es_codigo_valido(codigo: &str) -> bool {
    let mut chars = codigo.chars();
    let Some(primero) = chars.next() else {
        return false;
    };

    codigo.chars().count() >= 4 && primero.is_alphabetic() && chars.all(|c| c.is_ascii_digit())
}

/// MySQL の INSERT スクリプトを生成する
///
/// 100 行ずつのバッチに分割し、各バッチに `-- Lote i de n` マーカーを付ける。
/// シングルクォートとダブルクォートはバックスラッシュでエスケープする。
pub fn generar_sql(diagnosticos: &[Diagnostico], origen: &str) -> String {
    let mut sql = String::new();
    let total_lotes = diagnosticos.len().div_ceil(TAMANO_LOTE);

    let _ = writeln!(
        sql,
        "-- INSERT para tabla parametro_hijo con parametro_id = {PARAMETRO_ID} (Diagnosticos)"
    );
    let _ = writeln!(sql, "-- Generado automaticamente desde {origen}");
    let _ = writeln!(sql, "-- Base de datos: MySQL");
    let _ = writeln!(sql, "-- Total de diagnosticos: {}\n", diagnosticos.len());

    sql.push_str("SET NAMES utf8mb4;\n");
    sql.push_str("SET FOREIGN_KEY_CHECKS = 0;\n\n");

    for (num_lote, lote) in diagnosticos.chunks(TAMANO_LOTE).enumerate() {
        let _ = writeln!(sql, "-- Lote {} de {total_lotes}", num_lote + 1);
        sql.push_str(
            "INSERT INTO parametro_hijo (parametro_id, nombre, descripcion, estado) VALUES\n",
        );

        let valores = lote
            .iter()
            .map(|diag| {
                format!(
                    "({PARAMETRO_ID}, '{}', '{}', 1)",
                    escapar(&diag.codigo),
                    escapar(&diag.descripcion)
                )
            })
            .join(",\n");

        sql.push_str(&valores);
        sql.push_str(";\n\n");
    }

    sql.push_str("SET FOREIGN_KEY_CHECKS = 1;\n\n");
    sql.push_str("-- Verificacion\n");
    let _ = writeln!(
        sql,
        "SELECT COUNT(*) as total FROM parametro_hijo WHERE parametro_id = {PARAMETRO_ID};"
    );

    sql
}

/// MySQL 文字列リテラル用にクォートをエスケープする
fn escapar(s: &str) -> String {
    s.replace('\'', "\\'").replace('"', "\\\"")
}

/// 生成済み SQL に含まれる INSERT 行を数える（書き込み後の検証用）
pub fn contar_registros(sql: &str) -> Result<usize, NotifierError> {
    let patron =
        Regex::new(PATRON_REGISTRO).map_err(|e| NotifierError::Internal(e.to_string()))?;
    Ok(patron.find_iter(sql).count())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn make_diagnosticos(n: usize) -> Vec<Diagnostico> {
        (0..n)
            .map(|i| Diagnostico {
                codigo:      format!("A{i:03}"),
                descripcion: format!("Diagnostico numero {i}"),
            })
            .collect()
    }

    // ===== parse_diagnosticos テスト =====

    #[test]
    fn ヘッダーと空行と不正な行はスキップされる() {
        let contenido = "COD_4\tDESCRIPCION\n\
                         \n\
                         A090\tOTRAS GASTROENTERITIS Y COLITIS\n\
                         sin-tabulador\n\
                         DESCRIPCION\tcabecera duplicada\n\
                         B015\tVARICELA CON OTRAS COMPLICACIONES\n";

        let diagnosticos = parse_diagnosticos(contenido);

        assert_eq!(diagnosticos.len(), 2);
        assert_eq!(diagnosticos[0].codigo, "A090");
        assert_eq!(diagnosticos[1].descripcion, "VARICELA CON OTRAS COMPLICACIONES");
    }

    #[rstest]
    #[case("A090", true)]
    #[case("B0159", true)]
    #[case("A09", false)] // 4文字未満
    #[case("A09X", false)] // 数字以外を含む
    #[case("AB12", false)] // 2文字目がアルファベット
    #[case("0090", false)] // 先頭が数字
    #[case("", false)]
    fn コード形式の検証が正しい(#[case] codigo: &str, #[case] esperado: bool) {
        assert_eq!(es_codigo_valido(codigo), esperado);
    }

    #[test]
    fn フィールド前後の空白はトリムされる() {
        let diagnosticos = parse_diagnosticos("A090 \t DESCRIPCION CON ESPACIOS \n");

        assert_eq!(diagnosticos[0].codigo, "A090");
        assert_eq!(diagnosticos[0].descripcion, "DESCRIPCION CON ESPACIOS");
    }

    // ===== generar_sql テスト =====

    #[test]
    fn 生成されたsqlは100行ずつのバッチに分割される() {
        let sql = generar_sql(&make_diagnosticos(250), "diagnosticos.txt");

        assert!(sql.contains("-- Lote 1 de 3"));
        assert!(sql.contains("-- Lote 3 de 3"));
        assert!(!sql.contains("-- Lote 4"));
        assert_eq!(
            sql.matches("INSERT INTO parametro_hijo (parametro_id, nombre, descripcion, estado) VALUES")
                .count(),
            3
        );
    }

    #[test]
    fn 生成されたsqlにヘッダーとガードが含まれる() {
        let sql = generar_sql(&make_diagnosticos(5), "diagnosticos.txt");

        assert!(sql.contains("-- Total de diagnosticos: 5"));
        assert!(sql.contains("SET NAMES utf8mb4;"));
        assert!(sql.contains("SET FOREIGN_KEY_CHECKS = 0;"));
        assert!(sql.contains("SET FOREIGN_KEY_CHECKS = 1;"));
        assert!(sql.contains(
            "SELECT COUNT(*) as total FROM parametro_hijo WHERE parametro_id = 7;"
        ));
    }

    #[test]
    fn クォートはエスケープされる() {
        let diagnosticos = vec![Diagnostico {
            codigo:      "A090".to_string(),
            descripcion: "SINDROME DE L'HOMME \"RIGIDO\"".to_string(),
        }];

        let sql = generar_sql(&diagnosticos, "diagnosticos.txt");

        assert!(sql.contains(r#"(7, 'A090', 'SINDROME DE L\'HOMME \"RIGIDO\"', 1)"#));
        // エスケープ済みの行も検証カウントの対象になること
        assert_eq!(contar_registros(&sql).unwrap(), 1);
    }

    // ===== contar_registros テスト =====

    #[test]
    fn 出力の行数が入力の件数と一致する() {
        let diagnosticos = make_diagnosticos(123);
        let sql = generar_sql(&diagnosticos, "diagnosticos.txt");

        assert_eq!(contar_registros(&sql).unwrap(), 123);
    }

    #[test]
    fn 入力が空の場合はバッチなしで件数0になる() {
        let sql = generar_sql(&[], "diagnosticos.txt");

        assert!(!sql.contains("-- Lote"));
        assert_eq!(contar_registros(&sql).unwrap(), 0);
    }
}
