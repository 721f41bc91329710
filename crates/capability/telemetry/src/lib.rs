//! 追踪与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub api_requests: u64,
    pub auth_failures: u64,
    pub import_runs: u64,
    pub import_failures: u64,
    pub import_rows: u64,
    pub towers_imported: u64,
    pub rooms_imported: u64,
    pub fixture_rooms: u64,
    pub remote_stub_calls: u64,
}

/// 基础指标（进程内计数器）。
pub struct TelemetryMetrics {
    api_requests: AtomicU64,
    auth_failures: AtomicU64,
    import_runs: AtomicU64,
    import_failures: AtomicU64,
    import_rows: AtomicU64,
    towers_imported: AtomicU64,
    rooms_imported: AtomicU64,
    fixture_rooms: AtomicU64,
    remote_stub_calls: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            api_requests: AtomicU64::new(0),
            auth_failures: AtomicU64::new(0),
            import_runs: AtomicU64::new(0),
            import_failures: AtomicU64::new(0),
            import_rows: AtomicU64::new(0),
            towers_imported: AtomicU64::new(0),
            rooms_imported: AtomicU64::new(0),
            fixture_rooms: AtomicU64::new(0),
            remote_stub_calls: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            api_requests: self.api_requests.load(Ordering::Relaxed),
            auth_failures: self.auth_failures.load(Ordering::Relaxed),
            import_runs: self.import_runs.load(Ordering::Relaxed),
            import_failures: self.import_failures.load(Ordering::Relaxed),
            import_rows: self.import_rows.load(Ordering::Relaxed),
            towers_imported: self.towers_imported.load(Ordering::Relaxed),
            rooms_imported: self.rooms_imported.load(Ordering::Relaxed),
            fixture_rooms: self.fixture_rooms.load(Ordering::Relaxed),
            remote_stub_calls: self.remote_stub_calls.load(Ordering::Relaxed),
        }
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化结构化日志（幂等）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录一次 API 请求。
pub fn record_api_request() {
    metrics().api_requests.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次认证失败。
pub fn record_auth_failure() {
    metrics().auth_failures.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次导入运行。
pub fn record_import_run() {
    metrics().import_runs.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次导入失败。
pub fn record_import_failure() {
    metrics().import_failures.fetch_add(1, Ordering::Relaxed);
}

/// 记录导入处理的行数与产出规模。
pub fn record_import_outcome(rows: u64, towers: u64, rooms: u64) {
    metrics().import_rows.fetch_add(rows, Ordering::Relaxed);
    metrics().towers_imported.fetch_add(towers, Ordering::Relaxed);
    metrics().rooms_imported.fetch_add(rooms, Ordering::Relaxed);
}

/// 记录 fixture 生成的房间数。
pub fn record_fixture_rooms(rooms: u64) {
    metrics().fixture_rooms.fetch_add(rooms, Ordering::Relaxed);
}

/// 记录一次远端占位后端调用。
pub fn record_remote_stub_call() {
    metrics().remote_stub_calls.fetch_add(1, Ordering::Relaxed);
}
