use rms_config::{ApiMode, AppConfig, ConfigError};

// 环境变量为进程级共享状态，全部场景串行放在一个测试内。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("RMS_HTTP_ADDR", "127.0.0.1:8081");
        std::env::set_var("RMS_API_MODE", "mock");
        std::env::set_var("RMS_MOCK_LATENCY_MS", "50");
        std::env::set_var("RMS_FIXTURE_SEED", "7");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert_eq!(config.api_mode, ApiMode::Mock);
    assert_eq!(config.mock_latency_ms, 50);
    assert_eq!(config.fixture_seed, Some(7));
    assert_eq!(config.session_ttl_seconds, 8 * 3600);

    // 非法延迟值
    unsafe {
        std::env::set_var("RMS_MOCK_LATENCY_MS", "fast");
    }
    let err = AppConfig::from_env().expect_err("invalid latency");
    assert!(matches!(err, ConfigError::Invalid(key, _) if key == "RMS_MOCK_LATENCY_MS"));
    unsafe {
        std::env::set_var("RMS_MOCK_LATENCY_MS", "50");
    }

    // aws 模式要求 endpoint 与 token
    unsafe {
        std::env::set_var("RMS_API_MODE", "aws");
        std::env::remove_var("RMS_AWS_ENDPOINT");
        std::env::remove_var("RMS_AWS_TOKEN");
    }
    let err = AppConfig::from_env().expect_err("missing endpoint");
    assert!(matches!(err, ConfigError::Missing(key) if key == "RMS_AWS_ENDPOINT"));

    unsafe {
        std::env::set_var("RMS_AWS_ENDPOINT", "https://api.example.com");
    }
    let err = AppConfig::from_env().expect_err("missing token");
    assert!(matches!(err, ConfigError::Missing(key) if key == "RMS_AWS_TOKEN"));

    unsafe {
        std::env::set_var("RMS_AWS_TOKEN", "token-1");
    }
    let config = AppConfig::from_env().expect("aws config");
    assert_eq!(config.api_mode, ApiMode::Aws);
    assert_eq!(
        config.aws_endpoint.as_deref(),
        Some("https://api.example.com")
    );

    unsafe {
        std::env::set_var("RMS_API_MODE", "mock");
    }
}
