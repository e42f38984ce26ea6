use tracing::info;

use super::LifecycleController;
use crate::errors::{HomeworkHubError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentChanges};
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::utils::validate::{validate_due_date, validate_required};

/// 编辑作业：仅覆盖科目、要求与截止日期
pub fn edit_assignment(
    controller: &mut LifecycleController,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
) -> Result<Assignment> {
    controller.require_assignment(assignment_id)?;

    let changes = AssignmentChanges {
        subject: validate_required("subject", &req.subject)?,
        details: validate_required("details", &req.details)?,
        due_date: validate_due_date(&req.due_date)?,
    };

    let updated = controller
        .storage_mut()
        .update_assignment(assignment_id, changes)?
        .ok_or_else(|| HomeworkHubError::not_found(format!("作业不存在: {assignment_id}")))?;

    info!("Assignment {} updated", assignment_id);
    Ok(updated)
}
