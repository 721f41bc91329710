//! 导入快照文件存储
//!
//! 最近一次导入的楼塔/房间集合以 JSON 序列化写入单个文件，
//! 进程重启后在 mock 模式下恢复（浏览器 localStorage 的服务端对应物）。
//!
//! 约束：
//! - 文件不存在视为无快照（Ok(None)），不是错误
//! - 文件内容损坏返回 StorageError，由调用方决定是否回退到 fixture

use crate::error::StorageError;
use crate::models::Snapshot;
use crate::traits::SnapshotStore;
use crate::validation::{ensure_admin, ensure_user};
use domain::SessionContext;
use std::path::{Path, PathBuf};

/// JSON 文件快照存储
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// 绑定快照文件路径
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 启动期读取：无会话上下文（进程自举），仅用于 main 恢复数据
    pub fn load_at_startup(&self) -> Result<Option<Snapshot>, StorageError> {
        read_snapshot(&self.path)
    }
}

#[async_trait::async_trait]
impl SnapshotStore for FileSnapshotStore {
    /// 保存快照（整文件覆盖写）
    async fn save(&self, ctx: &SessionContext, snapshot: &Snapshot) -> Result<(), StorageError> {
        ensure_admin(ctx)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }

    /// 读取快照
    async fn load(&self, ctx: &SessionContext) -> Result<Option<Snapshot>, StorageError> {
        ensure_user(ctx)?;
        read_snapshot(&self.path)
    }
}

fn read_snapshot(path: &Path) -> Result<Option<Snapshot>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }
    let payload = std::fs::read_to_string(path)?;
    let snapshot = serde_json::from_str::<Snapshot>(&payload)?;
    Ok(Some(snapshot))
}
