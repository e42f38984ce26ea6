use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;
use crate::models::read_receipts::entities::ReadReceipt;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::users::entities::User;

/// 提交名单中的一行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct RosterEntry {
    pub student: User,
    pub submission: Option<Submission>,
    pub has_read: bool,
}

/// 某作业的提交名单（教师批改视图）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionRoster {
    pub assignment: Assignment,
    pub entries: Vec<RosterEntry>,
    pub submitted_count: i64,
    pub total_students: i64,
}

/// 学生视角的作业卡片状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum StudentAssignmentStatus {
    New,
    Read,
    Submitted,
    Approved,
    NeedsRevision,
}

impl StudentAssignmentStatus {
    /// 按优先级推导：提交状态优先于已读状态
    pub fn derive(submission: Option<&Submission>, receipt: Option<&ReadReceipt>) -> Self {
        match submission.map(|s| s.status) {
            Some(SubmissionStatus::Approved) => StudentAssignmentStatus::Approved,
            Some(SubmissionStatus::NeedsRevision) => StudentAssignmentStatus::NeedsRevision,
            Some(SubmissionStatus::Submitted) => StudentAssignmentStatus::Submitted,
            None if receipt.is_some_and(|r| r.read) => StudentAssignmentStatus::Read,
            None => StudentAssignmentStatus::New,
        }
    }
}

/// 学生作业总览中的单元格状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "state", content = "status", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum DashboardStatus {
    NotSubmitted,
    Handed(SubmissionStatus),
}

impl DashboardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardStatus::NotSubmitted => "Not Submitted",
            DashboardStatus::Handed(status) => status.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct DashboardCell {
    pub assignment_id: i64,
    pub due_date: NaiveDate,
    pub status: DashboardStatus,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubjectGroup {
    pub subject: String,
    pub cells: Vec<DashboardCell>,
}

/// 单个学生按科目分组的作业状态
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct StudentDashboard {
    pub student: User,
    pub subjects: Vec<SubjectGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submissions::entities::SubmissionContent;

    fn submission(status: SubmissionStatus) -> Submission {
        Submission {
            assignment_id: 1,
            student_id: 2,
            content: SubmissionContent::link("https://example.com"),
            submitted_at: chrono::Utc::now(),
            status,
            teacher_comment: None,
        }
    }

    #[test]
    fn test_student_status_precedence() {
        let read = ReadReceipt::read(1, 2);
        let unread = ReadReceipt::unread(1, 2);

        assert_eq!(
            StudentAssignmentStatus::derive(None, None),
            StudentAssignmentStatus::New
        );
        assert_eq!(
            StudentAssignmentStatus::derive(None, Some(&unread)),
            StudentAssignmentStatus::New
        );
        assert_eq!(
            StudentAssignmentStatus::derive(None, Some(&read)),
            StudentAssignmentStatus::Read
        );
        assert_eq!(
            StudentAssignmentStatus::derive(
                Some(&submission(SubmissionStatus::Submitted)),
                Some(&read)
            ),
            StudentAssignmentStatus::Submitted
        );
        assert_eq!(
            StudentAssignmentStatus::derive(Some(&submission(SubmissionStatus::Approved)), None),
            StudentAssignmentStatus::Approved
        );
    }

    #[test]
    fn test_dashboard_labels() {
        assert_eq!(DashboardStatus::NotSubmitted.label(), "Not Submitted");
        assert_eq!(
            DashboardStatus::Handed(SubmissionStatus::NeedsRevision).label(),
            "Needs Revision"
        );
    }
}
