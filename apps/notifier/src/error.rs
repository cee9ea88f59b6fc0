//! # Notifier エラー型
//!
//! ユースケース層で発生するエラーを集約する。

use incaflow_infra::InfraError;
use thiserror::Error;

/// 通知ユースケースのエラー
#[derive(Debug, Error)]
pub enum NotifierError {
    /// 対象エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        entity_type: &'static str,
        id:          String,
    },

    /// 入力値の検証エラー
    #[error("検証エラー: {0}")]
    Validation(String),

    /// インフラ層エラー
    #[error(transparent)]
    Infra(#[from] InfraError),

    /// その他の内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl NotifierError {
    /// NotFound エラーを生成する
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}
