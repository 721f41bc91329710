//! 会话能力：登录校验与不透明会话 token。
//!
//! 不签发 JWT：会话是服务端内存表中的不透明 UUID，携带管理员标记
//! 与过期时间；重启即失效，与前端 localStorage 的会话语义对应。

mod password;

use domain::SessionContext;
use rms_storage::{UserRecord, UserStore};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub use password::{PasswordCheck, hash_password, verify_password_and_maybe_upgrade};

/// 认证相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("session expired")]
    SessionExpired,
    #[error("session invalid")]
    SessionInvalid,
    #[error("internal error: {0}")]
    Internal(String),
}

/// 登录成功后返回的会话句柄。
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub session_id: String,
    pub expires_at_ms: i64,
}

struct SessionEntry {
    ctx: SessionContext,
    expires_at_ms: i64,
}

/// 会话服务实现（基于 UserStore + 内存会话表）。
pub struct SessionService {
    user_store: Arc<dyn UserStore>,
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl_ms: i64,
}

impl SessionService {
    /// 创建会话服务实例。
    pub fn new(user_store: Arc<dyn UserStore>, ttl_seconds: u64) -> Self {
        Self {
            user_store,
            sessions: RwLock::new(HashMap::new()),
            ttl_ms: (ttl_seconds as i64).saturating_mul(1000),
        }
    }

    /// 登录校验并登记会话。
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(UserRecord, SessionHandle), AuthError> {
        let ctx = SessionContext::default();
        let user = self
            .user_store
            .find_by_username(&ctx, username)
            .await
            .map_err(|err| AuthError::Internal(err.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;
        let check = verify_password_and_maybe_upgrade(&user.password, password)?;
        if !check.verified {
            return Err(AuthError::InvalidCredentials);
        }
        if let Some(password_hash) = check.upgrade_hash {
            let ctx = user.to_session_context();
            let updated = self
                .user_store
                .update_password_hash(&ctx, &user.user_id, &password_hash)
                .await
                .map_err(|err| AuthError::Internal(err.to_string()))?;
            if !updated {
                return Err(AuthError::Internal("password migration update failed".to_string()));
            }
        }

        let handle = SessionHandle {
            session_id: uuid::Uuid::new_v4().to_string(),
            expires_at_ms: now_epoch_ms().saturating_add(self.ttl_ms),
        };
        let entry = SessionEntry {
            ctx: user.to_session_context(),
            expires_at_ms: handle.expires_at_ms,
        };
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AuthError::Internal("lock failed".to_string()))?;
        sessions.insert(handle.session_id.clone(), entry);
        Ok((user, handle))
    }

    /// 校验会话并提取 SessionContext。
    pub fn resolve(&self, session_id: &str) -> Result<SessionContext, AuthError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AuthError::Internal("lock failed".to_string()))?;
        let entry = sessions.get(session_id).ok_or(AuthError::SessionInvalid)?;
        if entry.expires_at_ms <= now_epoch_ms() {
            sessions.remove(session_id);
            return Err(AuthError::SessionExpired);
        }
        Ok(entry.ctx.clone())
    }

    /// 注销会话；不存在时返回 false。
    pub fn logout(&self, session_id: &str) -> bool {
        self.sessions
            .write()
            .map(|mut sessions| sessions.remove(session_id).is_some())
            .unwrap_or(false)
    }
}

fn now_epoch_ms() -> i64 {
    let now = std::time::SystemTime::now();
    let duration = now
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_millis() as i64
}
