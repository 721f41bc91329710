//! # RMS Storage 模块
//!
//! 本模块提供统一的数据存储抽象层，支持 mock 模式（内存）与
//! aws 模式（远端占位）两套实现。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：定义所有资源存储的异步 Trait 接口
//! 2. **数据模型层** (`models.rs`)：用户记录与导入快照（楼宇层级实体直接复用 domain）
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **验证辅助层** (`validation.rs`)：会话与管理员权限验证
//! 5. **实现层**：
//!    - `in_memory/`：内存存储实现（mock 模式与测试的数据路径）
//!    - `snapshot.rs`：最近导入快照的 JSON 文件存储
//!    - `remote.rs`：AWS 远端占位实现（契约存在、调用一律未实现）
//!
//! ## 设计约束
//!
//! - **显式上下文**：所有数据访问方法必须显式接收 `SessionContext`
//! - **管理员门控**：导入落库（replace_all）与快照写入仅限管理员会话
//! - **替换式生命周期**：实体没有逐条 update/delete，导入即整体替换
//! - **禁止隐藏重试**：远端占位错误直接上抛，调用方负责向用户呈现

pub mod error;
pub mod in_memory;
pub mod models;
pub mod remote;
pub mod snapshot;
pub mod traits;
pub mod validation;

pub use error::*;
pub use models::*;
pub use snapshot::FileSnapshotStore;
pub use traits::*;
pub use validation::*;

// 导出内存存储实现类型
pub use in_memory::{
    InMemoryInspectionStore, InMemoryRoomStore, InMemoryTowerStore, InMemoryUserStore,
};

// 导出远端占位实现类型
pub use remote::{
    RemoteBackend, RemoteInspectionStore, RemoteRequest, RemoteRoomStore, RemoteSnapshotStore,
    RemoteTowerStore, RemoteUserStore,
};
