use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 建立数据库连接并完成迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    debug!(
        "Connecting storage backend (pool size: {})",
        config.database.pool_size
    );
    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext { storage })
}
