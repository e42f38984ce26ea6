use chrono::Utc;
use tracing::{info, warn};

use super::LifecycleController;
use crate::errors::{HomeworkHubError, Result};
use crate::models::submissions::entities::{Submission, SubmissionContent, SubmissionStatus};
use crate::models::submissions::requests::SubmitHomeworkRequest;
use crate::utils::validate::validate_submission_content;

/// 提交作业
///
/// 同一学生对同一作业只保留最新提交；已通过的提交不允许再次提交。
/// 提交同时视为已读。
pub fn submit_homework(
    controller: &mut LifecycleController,
    assignment_id: i64,
    student_id: i64,
    req: SubmitHomeworkRequest,
) -> Result<Submission> {
    controller.require_assignment(assignment_id)?;
    controller.require_student(student_id)?;
    let content = validate_submission_content(req.content)?;

    if let Some(existing) = controller
        .storage()
        .get_submission(assignment_id, student_id)?
        && existing.is_approved()
    {
        warn!(
            "Rejected resubmission for approved assignment {} by student {}",
            assignment_id, student_id
        );
        return Err(HomeworkHubError::invalid_state("作业已通过，不能再次提交"));
    }

    let submission = Submission {
        assignment_id,
        student_id,
        content,
        submitted_at: Utc::now(),
        status: SubmissionStatus::Submitted,
        teacher_comment: None,
    };

    let recorded = controller.storage_mut().record_submission(submission)?;

    info!(
        "Student {} submitted assignment {} ({:?})",
        student_id,
        assignment_id,
        recorded.kind()
    );
    Ok(recorded)
}

/// 教师代交：输入文本是 `http` 开头的完整 URL 时视为链接，否则视为文件名
pub fn submit_on_behalf(
    controller: &mut LifecycleController,
    assignment_id: i64,
    student_id: i64,
    raw_input: &str,
) -> Result<Submission> {
    let content = SubmissionContent::from_teacher_input(
        raw_input,
        &controller.settings().file_placeholder_url,
    )?;
    submit_homework(
        controller,
        assignment_id,
        student_id,
        SubmitHomeworkRequest { content },
    )
}
