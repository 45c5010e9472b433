// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// - 过滤器: RUST_LOG 优先, 否则使用配置的默认过滤器
// - 格式: 文本（本地开发）/ JSON（采集到日志平台）
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// 解析格式名（不区分大小写）
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// 构建过滤器
///
/// # 参数
/// - default_filter: RUST_LOG 未设置时使用的过滤器（如 "info"）
fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// 初始化日志系统
///
/// # 参数
/// - default_filter: RUST_LOG 未设置时使用的过滤器
/// - format: 输出格式
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器，优先于 default_filter
///   例如: RUST_LOG=debug 或 RUST_LOG=inventory_reorder=trace,tower_http=debug
///
/// # 示例
/// ```no_run
/// use inventory_reorder::logging::{self, LogFormat};
/// logging::init("info", LogFormat::Text);
/// ```
pub fn init(default_filter: &str, format: LogFormat) {
    let builder = fmt()
        .with_env_filter(build_filter(default_filter))
        .with_target(true)
        .with_line_number(true);

    let result = match format {
        LogFormat::Text => builder.with_thread_ids(false).try_init(),
        LogFormat::Json => builder
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .try_init(),
    };

    // 全局 subscriber 只能设置一次
    if let Err(e) = result {
        eprintln!("日志系统初始化失败: {}", e);
    }
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试; 重复调用安全
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
