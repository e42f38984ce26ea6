//! 作业生命周期控制器
//!
//! 会话内唯一修改作业目录、已读回执与提交记录的入口。
//! 所有命令同步执行：先完成全部校验，再通过单次存储调用写入。

pub mod create;
pub mod dashboard;
pub mod grade;
pub mod identity;
pub mod list;
pub mod mark_read;
pub mod roster;
pub mod snapshot;
pub mod stats;
pub mod submit;
pub mod update;

use crate::config::SessionConfig;
use crate::errors::{HomeworkHubError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentFilter};
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::models::assignments::responses::{AssignmentOverview, AssignmentStats};
use crate::models::session::SessionSnapshot;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::{GradeSubmissionRequest, SubmitHomeworkRequest};
use crate::models::submissions::responses::{
    StudentAssignmentStatus, StudentDashboard, SubmissionRoster,
};
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

pub struct LifecycleController {
    storage: Box<dyn Storage>,
    settings: SessionConfig,
}

impl LifecycleController {
    pub fn new(storage: Box<dyn Storage>, settings: SessionConfig) -> Self {
        Self { storage, settings }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    pub(crate) fn storage_mut(&mut self) -> &mut dyn Storage {
        &mut *self.storage
    }

    pub(crate) fn settings(&self) -> &SessionConfig {
        &self.settings
    }

    pub(crate) fn require_assignment(&self, assignment_id: i64) -> Result<Assignment> {
        self.storage
            .get_assignment_by_id(assignment_id)?
            .ok_or_else(|| HomeworkHubError::not_found(format!("作业不存在: {assignment_id}")))
    }

    pub(crate) fn require_student(&self, student_id: i64) -> Result<User> {
        match self.storage.get_user_by_id(student_id)? {
            Some(user) if user.is_student() => Ok(user),
            _ => Err(HomeworkHubError::not_found(format!(
                "学生不存在: {student_id}"
            ))),
        }
    }

    /// 当前学生名单（按 ID 升序）
    pub(crate) fn students(&self) -> Result<Vec<User>> {
        self.storage.list_users_by_role(UserRole::Student)
    }

    /// 发布作业
    pub fn create_assignment(
        &mut self,
        author_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, author_id, req)
    }

    /// 编辑作业
    pub fn edit_assignment(
        &mut self,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        update::edit_assignment(self, assignment_id, req)
    }

    /// 学生查看作业详情时标记已读
    pub fn mark_read(&mut self, assignment_id: i64, student_id: i64) -> Result<()> {
        mark_read::mark_read(self, assignment_id, student_id)
    }

    /// 提交作业（学生本人或教师代交）
    pub fn submit_homework(
        &mut self,
        assignment_id: i64,
        student_id: i64,
        req: SubmitHomeworkRequest,
    ) -> Result<Submission> {
        submit::submit_homework(self, assignment_id, student_id, req)
    }

    /// 教师以文本形式代学生提交
    pub fn submit_on_behalf(
        &mut self,
        assignment_id: i64,
        student_id: i64,
        raw_input: &str,
    ) -> Result<Submission> {
        submit::submit_on_behalf(self, assignment_id, student_id, raw_input)
    }

    /// 批改提交
    pub fn grade_submission(
        &mut self,
        assignment_id: i64,
        student_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Submission> {
        grade::grade_submission(self, assignment_id, student_id, req)
    }

    pub fn compute_stats(&self, assignment_id: i64) -> Result<AssignmentStats> {
        stats::compute_stats(self, assignment_id)
    }

    pub fn list_assignments(&self, filter: AssignmentFilter) -> Result<Vec<Assignment>> {
        list::list_assignments(self, filter)
    }

    pub fn get_submission(&self, assignment_id: i64, student_id: i64) -> Result<Option<Submission>> {
        self.storage.get_submission(assignment_id, student_id)
    }

    /// 回执不存在时视为未读
    pub fn get_read_receipt(&self, assignment_id: i64, student_id: i64) -> Result<bool> {
        Ok(self
            .storage
            .get_read_receipt(assignment_id, student_id)?
            .is_some_and(|r| r.read))
    }

    pub fn login(&self, user_id: i64) -> Result<User> {
        identity::login(self, user_id)
    }

    pub fn list_students(&self) -> Result<Vec<User>> {
        self.students()
    }

    pub fn submission_roster(&self, assignment_id: i64) -> Result<SubmissionRoster> {
        roster::submission_roster(self, assignment_id)
    }

    pub fn student_status(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<StudentAssignmentStatus> {
        roster::student_status(self, assignment_id, student_id)
    }

    pub fn teacher_overview(&self, teacher_id: i64) -> Result<Vec<AssignmentOverview>> {
        dashboard::teacher_overview(self, teacher_id)
    }

    pub fn student_dashboard(&self) -> Result<Vec<StudentDashboard>> {
        dashboard::student_dashboard(self)
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot> {
        snapshot::snapshot(self)
    }
}
