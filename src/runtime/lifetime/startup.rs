use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::LifecycleController;

/// 根据配置创建会话
///
/// 存储后端由 `storage.type` 决定；`session.seed_on_startup` 控制是否载入示例数据，
/// 关闭时仅载入用户目录。
pub fn prepare_session(config: &AppConfig) -> Result<LifecycleController> {
    warn!(
        "Attempting to create {} storage backend",
        config.storage.storage_type
    );

    let storage =
        crate::storage::create_storage(&config.storage, config.session.seed_on_startup)?;

    if config.session.seed_on_startup {
        debug!("Session seeded with sample roster, assignments and submissions");
    } else {
        debug!("Session started with roster only");
    }

    Ok(LifecycleController::new(storage, config.session.clone()))
}
