use crate::config::SessionConfig;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::submissions::entities::SubmissionContent;
use crate::models::submissions::requests::SubmitHomeworkRequest;
use crate::models::users::entities::{User, UserRole};
use crate::services::LifecycleController;
use crate::storage::memory_storage::MemoryStorage;

pub(crate) const TEACHER_ID: i64 = 1;
pub(crate) const BOB: i64 = 2;
pub(crate) const CHARLIE: i64 = 3;
pub(crate) const DIANA: i64 = 4;

pub(crate) const MATH: i64 = 101;
pub(crate) const HISTORY: i64 = 102;
pub(crate) const SCIENCE: i64 = 103;

/// 载入示例数据的会话
pub(crate) fn seeded_controller() -> LifecycleController {
    LifecycleController::new(Box::new(MemoryStorage::seeded()), SessionConfig::default())
}

/// 指定用户目录的空会话
pub(crate) fn controller_with_roster(users: Vec<User>) -> LifecycleController {
    LifecycleController::new(Box::new(MemoryStorage::new(users)), SessionConfig::default())
}

pub(crate) fn teacher_only_controller() -> LifecycleController {
    controller_with_roster(vec![User::new(TEACHER_ID, "Teacher Ana", UserRole::Teacher)])
}

pub(crate) fn create_request(subject: &str) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        subject: subject.to_string(),
        details: format!("{subject} worksheet"),
        due_date: "2024-09-30".to_string(),
        attachment: None,
    }
}

pub(crate) fn link_request(url: &str) -> SubmitHomeworkRequest {
    SubmitHomeworkRequest {
        content: SubmissionContent::link(url),
    }
}

pub(crate) fn file_request(name: &str) -> SubmitHomeworkRequest {
    SubmitHomeworkRequest {
        content: SubmissionContent::file(name, "#"),
    }
}
