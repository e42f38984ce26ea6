use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID（按创建时间单调递增）
    pub id: i64,
    // 发布教师 ID
    pub author_id: i64,
    // 科目
    pub subject: String,
    // 作业要求
    pub details: String,
    // 截止日期
    pub due_date: NaiveDate,
    // 创建时间
    pub created_at: DateTime<Utc>,
    // 附件（仅文件名占位）
    pub attachment: Option<String>,
}

/// 存储层写入用的新作业数据（ID 由存储层分配）
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub author_id: i64,
    pub subject: String,
    pub details: String,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub attachment: Option<String>,
}

/// 可编辑字段
#[derive(Debug, Clone)]
pub struct AssignmentChanges {
    pub subject: String,
    pub details: String,
    pub due_date: NaiveDate,
}

/// 作业列表过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "user_id", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentFilter {
    All,
    ForTeacher(i64),
    PendingForStudent(i64),
    SubmittedForStudent(i64),
    GradedForStudent(i64),
}
