//! 验证辅助函数
//!
//! 提供统一的验证逻辑，确保数据一致性：
//! - ensure_user：验证会话上下文携带有效用户
//! - ensure_admin：验证管理员权限（导入/整体替换等操作）

use crate::error::StorageError;
use domain::SessionContext;

/// 验证会话上下文携带有效用户
///
/// 确保所有数据访问都有已登录的会话。
pub fn ensure_user(ctx: &SessionContext) -> Result<(), StorageError> {
    if ctx.user_id.is_empty() {
        return Err(StorageError::new("user_id required"));
    }
    Ok(())
}

/// 验证管理员权限
///
/// 导入、整体替换等写操作仅限管理员会话。
pub fn ensure_admin(ctx: &SessionContext) -> Result<(), StorageError> {
    ensure_user(ctx)?;
    if !ctx.is_admin {
        return Err(StorageError::new("admin required"));
    }
    Ok(())
}
