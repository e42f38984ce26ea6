use tracing::info;

use super::LifecycleController;
use crate::errors::{HomeworkHubError, Result};
use crate::models::users::entities::User;

/// 选择账号登录（无凭据校验，仅解析用户目录）
pub fn login(controller: &LifecycleController, user_id: i64) -> Result<User> {
    let user = controller
        .storage()
        .get_user_by_id(user_id)?
        .ok_or_else(|| HomeworkHubError::not_found(format!("用户不存在: {user_id}")))?;
    info!("User {} logged in as {}", user.name, user.role);
    Ok(user)
}
