//! Floor configuration

use std::time::Duration;

use crate::timer::DEFAULT_DURATION_MINUTES;

/// 楼面配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | MESA_DEFAULT_DURATION_MIN | 120 | 默认用餐时长(分钟) |
/// | MESA_REFRESH_INTERVAL_SECS | 60 | 计时刷新间隔(秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志 |
/// | LOG_DIR | (none) | 日志目录 |
#[derive(Debug, Clone)]
pub struct FloorConfig {
    /// Time budget for a table when the caller gives none
    pub default_duration_minutes: u32,
    /// Timer refresh cadence
    pub refresh_interval: Duration,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl FloorConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_duration_minutes: std::env::var("MESA_DEFAULT_DURATION_MIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_duration_minutes),
            refresh_interval: std::env::var("MESA_REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.refresh_interval),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration_minutes = minutes;
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            refresh_interval: crate::timer::Refresher::DEFAULT_INTERVAL,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}

/// Load a `.env` file if present
pub fn load_env() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FloorConfig::default();
        assert_eq!(config.default_duration_minutes, 120);
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_builders() {
        let config = FloorConfig::default()
            .with_default_duration(90)
            .with_refresh_interval(Duration::from_secs(5));
        assert_eq!(config.default_duration_minutes, 90);
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
    }
}
