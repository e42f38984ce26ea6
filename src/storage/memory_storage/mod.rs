//! 内存存储实现
//!
//! 会话内的全部状态：用户目录、作业目录、已读回执与提交记录。

mod assignments;
mod read_receipts;
pub mod seed;
mod submissions;
mod users;

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::models::{
    assignments::entities::{Assignment, AssignmentChanges, NewAssignment},
    read_receipts::entities::ReadReceipt,
    submissions::{entities::Submission, requests::SubmissionListQuery},
    users::entities::{User, UserRole},
};
use crate::storage::Storage;

/// 内存存储
///
/// 回执与提交以 (assignment_id, student_id) 为键，保证每对最多一条记录。
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    pub(crate) users: Vec<User>,
    pub(crate) assignments: Vec<Assignment>,
    pub(crate) read_receipts: BTreeMap<(i64, i64), ReadReceipt>,
    pub(crate) submissions: BTreeMap<(i64, i64), Submission>,
    pub(crate) last_assignment_id: i64,
}

impl MemoryStorage {
    /// 以给定用户目录创建空会话
    pub fn new(mut users: Vec<User>) -> Self {
        users.sort_by_key(|u| u.id);
        users.dedup_by_key(|u| u.id);
        Self {
            users,
            ..Default::default()
        }
    }
}

impl Storage for MemoryStorage {
    fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl()
    }

    fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id)
    }

    fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        self.list_users_by_role_impl(role)
    }

    fn create_assignment(
        &mut self,
        assignment: NewAssignment,
        student_ids: &[i64],
    ) -> Result<Assignment> {
        self.create_assignment_impl(assignment, student_ids)
    }

    fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id)
    }

    fn update_assignment(
        &mut self,
        id: i64,
        changes: AssignmentChanges,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, changes)
    }

    fn list_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_assignments_impl()
    }

    fn get_read_receipt(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<ReadReceipt>> {
        self.get_read_receipt_impl(assignment_id, student_id)
    }

    fn mark_read(&mut self, assignment_id: i64, student_id: i64) -> Result<bool> {
        self.mark_read_impl(assignment_id, student_id)
    }

    fn list_read_receipts(&self, assignment_id: Option<i64>) -> Result<Vec<ReadReceipt>> {
        self.list_read_receipts_impl(assignment_id)
    }

    fn get_submission(&self, assignment_id: i64, student_id: i64) -> Result<Option<Submission>> {
        self.get_submission_impl(assignment_id, student_id)
    }

    fn record_submission(&mut self, submission: Submission) -> Result<Submission> {
        self.record_submission_impl(submission)
    }

    fn update_submission(&mut self, submission: Submission) -> Result<Option<Submission>> {
        self.update_submission_impl(submission)
    }

    fn list_submissions(&self, query: SubmissionListQuery) -> Result<Vec<Submission>> {
        self.list_submissions_impl(query)
    }
}
