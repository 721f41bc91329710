//! 巡检内存存储实现

use crate::error::StorageError;
use crate::traits::InspectionStore;
use crate::validation::ensure_user;
use domain::{Inspection, InspectionStatus, Photo, SessionContext};
use std::collections::HashMap;
use std::sync::RwLock;

/// 巡检内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储；照片内嵌于巡检记录。
pub struct InMemoryInspectionStore {
    inspections: RwLock<HashMap<String, Inspection>>,
}

impl InMemoryInspectionStore {
    /// 创建空的巡检存储
    pub fn new() -> Self {
        Self {
            inspections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryInspectionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InspectionStore for InMemoryInspectionStore {
    /// 列出指定房间的巡检记录（按日期倒序）
    async fn list_inspections(
        &self,
        ctx: &SessionContext,
        room_id: &str,
    ) -> Result<Vec<Inspection>, StorageError> {
        ensure_user(ctx)?;
        let mut items: Vec<Inspection> = self
            .inspections
            .read()
            .map(|map| {
                map.values()
                    .filter(|item| item.room_id == room_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        items.sort_by_key(|item| std::cmp::Reverse(item.date_ms));
        Ok(items)
    }

    /// 查找指定巡检
    async fn find_inspection(
        &self,
        ctx: &SessionContext,
        inspection_id: &str,
    ) -> Result<Option<Inspection>, StorageError> {
        ensure_user(ctx)?;
        let item = self
            .inspections
            .read()
            .ok()
            .and_then(|map| map.get(inspection_id).cloned());
        Ok(item)
    }

    /// 创建巡检记录
    async fn create_inspection(
        &self,
        ctx: &SessionContext,
        record: Inspection,
    ) -> Result<Inspection, StorageError> {
        ensure_user(ctx)?;
        let mut map = self
            .inspections
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.contains_key(&record.inspection_id) {
            return Err(StorageError::new("inspection exists"));
        }
        map.insert(record.inspection_id.clone(), record.clone());
        Ok(record)
    }

    /// 向巡检追加照片
    async fn add_photo(
        &self,
        ctx: &SessionContext,
        inspection_id: &str,
        photo: Photo,
    ) -> Result<Option<Inspection>, StorageError> {
        ensure_user(ctx)?;
        let mut map = self
            .inspections
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let inspection = match map.get_mut(inspection_id) {
            Some(inspection) => inspection,
            None => return Ok(None),
        };
        inspection.photos.push(photo);
        Ok(Some(inspection.clone()))
    }

    /// 更新巡检状态
    async fn update_status(
        &self,
        ctx: &SessionContext,
        inspection_id: &str,
        status: InspectionStatus,
    ) -> Result<Option<Inspection>, StorageError> {
        ensure_user(ctx)?;
        let mut map = self
            .inspections
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let inspection = match map.get_mut(inspection_id) {
            Some(inspection) => inspection,
            None => return Ok(None),
        };
        inspection.status = status;
        Ok(Some(inspection.clone()))
    }
}
