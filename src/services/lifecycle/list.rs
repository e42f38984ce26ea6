use std::collections::HashMap;

use tracing::debug;

use super::LifecycleController;
use crate::errors::{HomeworkHubError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentFilter};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::requests::SubmissionListQuery;

/// 作业列表，按创建时间倒序（同一时间按 ID 倒序）
pub fn list_assignments(
    controller: &LifecycleController,
    filter: AssignmentFilter,
) -> Result<Vec<Assignment>> {
    let mut assignments = controller.storage().list_assignments()?;
    assignments.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });

    let filtered = match filter {
        AssignmentFilter::All => assignments,
        AssignmentFilter::ForTeacher(teacher_id) => {
            match controller.storage().get_user_by_id(teacher_id)? {
                Some(user) if user.is_teacher() => {}
                _ => {
                    return Err(HomeworkHubError::not_found(format!(
                        "教师不存在: {teacher_id}"
                    )));
                }
            }
            assignments
                .into_iter()
                .filter(|a| a.author_id == teacher_id)
                .collect()
        }
        AssignmentFilter::PendingForStudent(student_id) => {
            let statuses = submission_statuses(controller, student_id)?;
            assignments
                .into_iter()
                .filter(|a| !statuses.contains_key(&a.id))
                .collect()
        }
        AssignmentFilter::SubmittedForStudent(student_id) => {
            let statuses = submission_statuses(controller, student_id)?;
            assignments
                .into_iter()
                .filter(|a| statuses.get(&a.id) == Some(&SubmissionStatus::Submitted))
                .collect()
        }
        AssignmentFilter::GradedForStudent(student_id) => {
            let statuses = submission_statuses(controller, student_id)?;
            assignments
                .into_iter()
                .filter(|a| statuses.get(&a.id).is_some_and(SubmissionStatus::is_graded))
                .collect()
        }
    };

    debug!("Listed {} assignments for {:?}", filtered.len(), filter);
    Ok(filtered)
}

/// 某学生各作业的提交状态
fn submission_statuses(
    controller: &LifecycleController,
    student_id: i64,
) -> Result<HashMap<i64, SubmissionStatus>> {
    controller.require_student(student_id)?;
    Ok(controller
        .storage()
        .list_submissions(SubmissionListQuery {
            student_id: Some(student_id),
            ..Default::default()
        })?
        .into_iter()
        .map(|s| (s.assignment_id, s.status))
        .collect())
}
