//! 输入验证辅助函数
//!
//! 验证规则：去除首尾空格后非空才通过；失败返回 bad_request_error 响应。

use crate::utils::response::bad_request_error;
use axum::response::Response;

/// 验证必填字符串字段。
pub fn normalize_required(value: String, field: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 验证可选字符串字段；提供了就不允许为空白。
pub fn normalize_optional(value: Option<String>, field: &str) -> Result<Option<String>, Response> {
    value
        .map(|value| normalize_required(value, field))
        .transpose()
}
