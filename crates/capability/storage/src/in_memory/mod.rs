//! 内存存储实现模块
//!
//! mock 模式与测试的数据路径。
//!
//! 包含以下实现：
//! - UserStore: InMemoryUserStore
//! - TowerStore: InMemoryTowerStore
//! - RoomStore: InMemoryRoomStore
//! - InspectionStore: InMemoryInspectionStore

pub mod inspection;
pub mod room;
pub mod tower;
pub mod user;

pub use inspection::*;
pub use room::*;
pub use tower::*;
pub use user::*;
