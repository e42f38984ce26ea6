use super::LifecycleController;
use crate::errors::Result;
use crate::models::session::SessionSnapshot;
use crate::models::submissions::requests::SubmissionListQuery;

/// 导出会话状态副本
pub fn snapshot(controller: &LifecycleController) -> Result<SessionSnapshot> {
    let storage = controller.storage();
    Ok(SessionSnapshot {
        taken_at: chrono::Utc::now(),
        users: storage.list_users()?,
        assignments: storage.list_assignments()?,
        read_receipts: storage.list_read_receipts(None)?,
        submissions: storage.list_submissions(SubmissionListQuery::default())?,
    })
}
