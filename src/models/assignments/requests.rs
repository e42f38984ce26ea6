use serde::Deserialize;
use ts_rs::TS;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub subject: String,
    pub details: String,
    pub due_date: String, // "YYYY-MM-DD"，与日期输入框一致
    pub attachment: Option<String>,
}

/// 更新作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub subject: String,
    pub details: String,
    pub due_date: String,
}
