use std::collections::HashMap;

use super::LifecycleController;
use crate::errors::Result;
use crate::models::submissions::requests::SubmissionListQuery;
use crate::models::submissions::responses::{
    RosterEntry, StudentAssignmentStatus, SubmissionRoster,
};

/// 作业的提交名单：每位学生的提交与已读情况
pub fn submission_roster(
    controller: &LifecycleController,
    assignment_id: i64,
) -> Result<SubmissionRoster> {
    let assignment = controller.require_assignment(assignment_id)?;
    let storage = controller.storage();

    let mut submissions: HashMap<i64, _> = storage
        .list_submissions(SubmissionListQuery {
            assignment_id: Some(assignment_id),
            ..Default::default()
        })?
        .into_iter()
        .map(|s| (s.student_id, s))
        .collect();
    let read: HashMap<i64, bool> = storage
        .list_read_receipts(Some(assignment_id))?
        .into_iter()
        .map(|r| (r.student_id, r.read))
        .collect();

    let entries: Vec<RosterEntry> = controller
        .students()?
        .into_iter()
        .map(|student| RosterEntry {
            submission: submissions.remove(&student.id),
            has_read: read.get(&student.id).copied().unwrap_or(false),
            student,
        })
        .collect();

    let submitted_count = entries.iter().filter(|e| e.submission.is_some()).count() as i64;
    let total_students = entries.len() as i64;

    Ok(SubmissionRoster {
        assignment,
        entries,
        submitted_count,
        total_students,
    })
}

/// 学生视角的作业状态
pub fn student_status(
    controller: &LifecycleController,
    assignment_id: i64,
    student_id: i64,
) -> Result<StudentAssignmentStatus> {
    controller.require_assignment(assignment_id)?;
    controller.require_student(student_id)?;

    let storage = controller.storage();
    let submission = storage.get_submission(assignment_id, student_id)?;
    let receipt = storage.get_read_receipt(assignment_id, student_id)?;

    Ok(StudentAssignmentStatus::derive(
        submission.as_ref(),
        receipt.as_ref(),
    ))
}
