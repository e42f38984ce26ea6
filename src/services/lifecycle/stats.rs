use tracing::debug;

use super::LifecycleController;
use crate::errors::Result;
use crate::models::assignments::responses::AssignmentStats;
use crate::models::submissions::requests::SubmissionListQuery;

/// 计算作业的已读率、提交率与通过率
///
/// 已读率与提交率以学生总数为分母；通过率以提交数为分母。
/// 分母为 0 时对应比例为 0。结果不取整。
pub fn compute_stats(
    controller: &LifecycleController,
    assignment_id: i64,
) -> Result<AssignmentStats> {
    controller.require_assignment(assignment_id)?;

    let total_students = controller.students()?.len();
    if total_students == 0 {
        return Ok(AssignmentStats::default());
    }

    let storage = controller.storage();
    let read_count = storage
        .list_read_receipts(Some(assignment_id))?
        .iter()
        .filter(|r| r.read)
        .count();
    let submissions = storage.list_submissions(SubmissionListQuery {
        assignment_id: Some(assignment_id),
        ..Default::default()
    })?;
    let approved_count = submissions.iter().filter(|s| s.is_approved()).count();

    let stats = AssignmentStats {
        read_pct: percentage(read_count, total_students),
        submitted_pct: percentage(submissions.len(), total_students),
        graded_pct: percentage(approved_count, submissions.len()),
    };

    debug!("Stats for assignment {}: {:?}", assignment_id, stats);
    Ok(stats)
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
