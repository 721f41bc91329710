//! 楼塔内存存储实现
//!
//! 功能：
//! - 楼塔列表/查询
//! - 导入后的整体替换（仅限管理员）

use crate::error::StorageError;
use crate::traits::TowerStore;
use crate::validation::{ensure_admin, ensure_user};
use domain::{SessionContext, Tower};
use std::collections::HashMap;
use std::sync::RwLock;

/// 楼塔内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemoryTowerStore {
    towers: RwLock<HashMap<String, Tower>>,
}

impl InMemoryTowerStore {
    /// 创建空的楼塔存储
    pub fn new() -> Self {
        Self {
            towers: RwLock::new(HashMap::new()),
        }
    }

    /// 以给定集合初始化（fixture 或快照恢复；不做权限校验）
    pub fn with_towers(towers: Vec<Tower>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.towers.write() {
            for tower in towers {
                map.insert(tower.tower_id.clone(), tower);
            }
        }
        store
    }
}

impl Default for InMemoryTowerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TowerStore for InMemoryTowerStore {
    /// 列出所有楼塔（按名称排序，列表顺序稳定）
    async fn list_towers(&self, ctx: &SessionContext) -> Result<Vec<Tower>, StorageError> {
        ensure_user(ctx)?;
        let mut items: Vec<Tower> = self
            .towers
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// 查找指定楼塔
    async fn find_tower(
        &self,
        ctx: &SessionContext,
        tower_id: &str,
    ) -> Result<Option<Tower>, StorageError> {
        ensure_user(ctx)?;
        let item = self
            .towers
            .read()
            .ok()
            .and_then(|map| map.get(tower_id).cloned());
        Ok(item)
    }

    /// 整体替换楼塔集合
    async fn replace_all(
        &self,
        ctx: &SessionContext,
        towers: Vec<Tower>,
    ) -> Result<usize, StorageError> {
        ensure_admin(ctx)?;
        let mut map = self
            .towers
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.clear();
        let count = towers.len();
        for tower in towers {
            map.insert(tower.tower_id.clone(), tower);
        }
        Ok(count)
    }
}
