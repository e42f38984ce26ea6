use std::collections::HashMap;

use super::LifecycleController;
use crate::errors::Result;
use crate::models::assignments::entities::AssignmentFilter;
use crate::models::assignments::responses::AssignmentOverview;
use crate::models::submissions::requests::SubmissionListQuery;
use crate::models::submissions::responses::{
    DashboardCell, DashboardStatus, StudentDashboard, SubjectGroup,
};

/// 教师首页：本人发布的作业及其统计
pub fn teacher_overview(
    controller: &LifecycleController,
    teacher_id: i64,
) -> Result<Vec<AssignmentOverview>> {
    controller
        .list_assignments(AssignmentFilter::ForTeacher(teacher_id))?
        .into_iter()
        .map(|assignment| {
            let stats = controller.compute_stats(assignment.id)?;
            Ok(AssignmentOverview { assignment, stats })
        })
        .collect()
}

/// 学生作业总览：每位学生按科目分组的提交状态
///
/// 科目顺序取作业列表（按创建时间倒序）中首次出现的顺序。
pub fn student_dashboard(controller: &LifecycleController) -> Result<Vec<StudentDashboard>> {
    let assignments = controller.list_assignments(AssignmentFilter::All)?;

    let mut subject_order: Vec<&str> = Vec::new();
    for assignment in &assignments {
        if !subject_order.contains(&assignment.subject.as_str()) {
            subject_order.push(&assignment.subject);
        }
    }

    let statuses: HashMap<(i64, i64), _> = controller
        .storage()
        .list_submissions(SubmissionListQuery::default())?
        .into_iter()
        .map(|s| (s.key(), s.status))
        .collect();

    let dashboards = controller
        .students()?
        .into_iter()
        .map(|student| {
            let subjects = subject_order
                .iter()
                .map(|&subject| SubjectGroup {
                    subject: subject.to_string(),
                    cells: assignments
                        .iter()
                        .filter(|a| a.subject == subject)
                        .map(|a| DashboardCell {
                            assignment_id: a.id,
                            due_date: a.due_date,
                            status: statuses
                                .get(&(a.id, student.id))
                                .map_or(DashboardStatus::NotSubmitted, |&status| {
                                    DashboardStatus::Handed(status)
                                }),
                        })
                        .collect(),
                })
                .collect();
            StudentDashboard { student, subjects }
        })
        .collect();

    Ok(dashboards)
}
