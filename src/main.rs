use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use student_records::config::AppConfig;
use student_records::errors::Result;
use student_records::runtime::{lifetime, session};

fn main() -> Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init()?;
    let config = AppConfig::get();

    // 初始化日志，stdout 专用于响应输出，日志写入 stderr
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = lifetime::startup::prepare_startup(config)?;

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time)
            .num_milliseconds()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::serve(&startup.services, stdin.lock(), stdout.lock())?;

    warn!("Input closed, shutting down");
    Ok(())
}
