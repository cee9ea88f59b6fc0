//! # IncapacidadRepository
//!
//! 休暇届の取得を担当するリポジトリトレイト。

use async_trait::async_trait;
use incaflow_domain::incapacidad::{Incapacidad, IncapacidadId};

use crate::error::InfraError;

/// 休暇届リポジトリトレイト
#[async_trait]
pub trait IncapacidadRepository: Send + Sync {
    /// ID で休暇届を検索
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(incapacidad))`: 休暇届が見つかった場合
    /// - `Ok(None)`: 休暇届が見つからない場合
    /// - `Err(_)`: ストレージエラー
    async fn find_by_id(&self, id: IncapacidadId) -> Result<Option<Incapacidad>, InfraError>;
}
