//! # UsuarioRepository
//!
//! ユーザー情報の取得を担当するリポジトリトレイト。

use async_trait::async_trait;
use incaflow_domain::usuario::{Usuario, UsuarioId};

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
///
/// ユーザー情報の取得操作を定義する。
/// 実装はインフラ層で提供し、ユースケース層から利用する。
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// ID でユーザーを検索
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(usuario))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    /// - `Err(_)`: ストレージエラー
    async fn find_by_id(&self, id: UsuarioId) -> Result<Option<Usuario>, InfraError>;

    /// 通知対象の管理者一覧を取得
    ///
    /// 管理者ロール（rol_id = 10）かつステータスがアクティブな
    /// ユーザーのみを返す。休暇届の新規登録通知の宛先に使用する。
    async fn find_administradores_activos(&self) -> Result<Vec<Usuario>, InfraError>;
}
