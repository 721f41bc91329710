//! 用户内存存储实现

use crate::error::StorageError;
use crate::models::UserRecord;
use crate::traits::UserStore;
use domain::SessionContext;
use std::collections::HashMap;
use std::sync::RwLock;

/// 用户内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储，按 user_id 建键。
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    /// 创建空的用户存储
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// 以给定记录初始化（fixture 种子）
    pub fn with_users(records: Vec<UserRecord>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.users.write() {
            for record in records {
                map.insert(record.user_id.clone(), record);
            }
        }
        store
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    /// 根据用户名查找用户
    async fn find_by_username(
        &self,
        _ctx: &SessionContext,
        username: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let item = self
            .users
            .read()
            .ok()
            .and_then(|map| map.values().find(|user| user.username == username).cloned());
        Ok(item)
    }

    /// 更新口令哈希
    async fn update_password_hash(
        &self,
        _ctx: &SessionContext,
        user_id: &str,
        password_hash: &str,
    ) -> Result<bool, StorageError> {
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        match map.get_mut(user_id) {
            Some(user) => {
                user.password = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
