use crate::config::StorageConfig;
use crate::models::{
    assignments::entities::{Assignment, AssignmentChanges, NewAssignment},
    read_receipts::entities::ReadReceipt,
    submissions::{entities::Submission, requests::SubmissionListQuery},
    users::entities::{User, UserRole},
};

use crate::errors::{HomeworkHubError, Result};

pub mod memory_storage;

pub trait Storage: Send + Sync {
    /// 用户目录（只读）
    // 列出全部用户（按 ID 升序）
    fn list_users(&self) -> Result<Vec<User>>;
    // 通过ID获取用户信息
    fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 按角色列出用户
    fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>>;

    /// 作业目录
    // 创建作业，并为给定学生写入未读回执
    fn create_assignment(
        &mut self,
        assignment: NewAssignment,
        student_ids: &[i64],
    ) -> Result<Assignment>;
    // 通过ID获取作业
    fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 更新作业可编辑字段
    fn update_assignment(
        &mut self,
        id: i64,
        changes: AssignmentChanges,
    ) -> Result<Option<Assignment>>;
    // 列出全部作业（按写入顺序）
    fn list_assignments(&self) -> Result<Vec<Assignment>>;

    /// 已读回执
    // 获取回执
    fn get_read_receipt(&self, assignment_id: i64, student_id: i64)
    -> Result<Option<ReadReceipt>>;
    // 标记已读，返回状态是否发生变化
    fn mark_read(&mut self, assignment_id: i64, student_id: i64) -> Result<bool>;
    // 列出回执，可按作业过滤
    fn list_read_receipts(&self, assignment_id: Option<i64>) -> Result<Vec<ReadReceipt>>;

    /// 提交记录
    // 获取某学生某作业的提交
    fn get_submission(&self, assignment_id: i64, student_id: i64) -> Result<Option<Submission>>;
    // 写入提交（覆盖旧记录）并同时标记已读
    fn record_submission(&mut self, submission: Submission) -> Result<Submission>;
    // 更新已存在的提交（批改）
    fn update_submission(&mut self, submission: Submission) -> Result<Option<Submission>>;
    // 列出提交
    fn list_submissions(&self, query: SubmissionListQuery) -> Result<Vec<Submission>>;
}

pub fn create_storage(config: &StorageConfig, seed: bool) -> Result<Box<dyn Storage>> {
    match config.storage_type.as_str() {
        "memory" => {
            let storage = if seed {
                memory_storage::MemoryStorage::seeded()
            } else {
                memory_storage::MemoryStorage::new(memory_storage::seed::default_roster())
            };
            Ok(Box::new(storage))
        }
        other => Err(HomeworkHubError::storage_plugin_not_found(format!(
            "未知的存储类型: {other}"
        ))),
    }
}
