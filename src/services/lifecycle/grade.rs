use tracing::{info, warn};

use super::LifecycleController;
use crate::errors::{HomeworkHubError, Result};
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::submissions::requests::{GradeDecision, GradeSubmissionRequest};

/// 批改提交
///
/// - 通过：状态置为 Approved，保留原有评语
/// - 要求修改：状态置为 NeedsRevision，评语必填
pub fn grade_submission(
    controller: &mut LifecycleController,
    assignment_id: i64,
    student_id: i64,
    req: GradeSubmissionRequest,
) -> Result<Submission> {
    let mut submission = controller
        .storage()
        .get_submission(assignment_id, student_id)?
        .ok_or_else(|| {
            HomeworkHubError::not_found(format!(
                "提交不存在: 作业 {assignment_id}, 学生 {student_id}"
            ))
        })?;

    if submission.is_approved() {
        warn!(
            "Rejected grading of approved submission ({}, {})",
            assignment_id, student_id
        );
        return Err(HomeworkHubError::invalid_state("提交已通过，不能再次批改"));
    }

    match req.decision {
        GradeDecision::Approve => {
            submission.status = SubmissionStatus::Approved;
        }
        GradeDecision::RequestRevision => {
            let comment = req
                .comment
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .ok_or_else(|| HomeworkHubError::invalid_state("要求修改时必须填写评语"))?;
            submission.status = SubmissionStatus::NeedsRevision;
            submission.teacher_comment = Some(comment.to_string());
        }
    }

    let graded = controller
        .storage_mut()
        .update_submission(submission)?
        .ok_or_else(|| HomeworkHubError::not_found("提交不存在"))?;

    info!(
        "Submission ({}, {}) graded as {}",
        assignment_id, student_id, graded.status
    );
    Ok(graded)
}
