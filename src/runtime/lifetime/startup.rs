use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::RecordServices;
use tracing::{debug, warn};

pub struct StartupContext {
    pub services: RecordServices,
}

/// 准备启动上下文
/// 包括存储与演示数据
pub fn prepare_startup(config: &AppConfig) -> Result<StartupContext> {
    let records = &config.records;

    let storage = crate::storage::create_storage(records)?;
    warn!(
        "Storage backend initialized with {} course(s)",
        records.courses.len()
    );

    if records.seed_demo_data {
        debug!("Demo students and enrollments loaded");
    } else {
        debug!("Demo data disabled, starting with an empty student list");
    }

    Ok(StartupContext {
        services: RecordServices::new(storage),
    })
}
