//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **利用者向けメッセージはスペイン語**: バリデーション文言はそのまま
//!   画面・メールに出るため、利用部門の言語（スペイン語）で記述する

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// ビジネスロジックの実行中に発生する例外状態を表現する。
/// ユースケース層でこのエラーを受け取り、操作結果に変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力
    /// - 文字数制限の超過
    /// - 不正なフォーマット
    #[error("error de validación: {0}")]
    Validation(String),

    /// エンティティが見つからない
    ///
    /// 指定された ID のエンティティが存在しない場合に使用する。
    /// `entity_type` にはエンティティの種類（"Incapacidad", "Usuario" など）を
    /// 指定し、エラーメッセージを具体的にする。
    #[error("{entity_type} no encontrado: {id}")]
    NotFound {
        /// エンティティの種類（"Incapacidad", "Usuario" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
