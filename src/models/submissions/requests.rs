use serde::Deserialize;
use ts_rs::TS;

use crate::models::submissions::entities::SubmissionContent;

/// 提交作业请求（学生本人或教师代交）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitHomeworkRequest {
    pub content: SubmissionContent,
}

/// 批改结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum GradeDecision {
    Approve,
    RequestRevision,
}

/// 批改请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub decision: GradeDecision,
    pub comment: Option<String>,
}

impl GradeSubmissionRequest {
    pub fn approve() -> Self {
        Self {
            decision: GradeDecision::Approve,
            comment: None,
        }
    }

    pub fn request_revision(comment: impl Into<String>) -> Self {
        Self {
            decision: GradeDecision::RequestRevision,
            comment: Some(comment.into()),
        }
    }
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct SubmissionListQuery {
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<crate::models::submissions::entities::SubmissionStatus>,
}
