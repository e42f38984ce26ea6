//! 示例会话数据
//!
//! 一名教师、三名学生、三份作业，以及一组回执与两条已批改的提交。

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::MemoryStorage;
use crate::models::assignments::entities::Assignment;
use crate::models::read_receipts::entities::ReadReceipt;
use crate::models::submissions::entities::{Submission, SubmissionContent, SubmissionStatus};
use crate::models::users::entities::{User, UserRole};

pub const TEACHER_ID: i64 = 1;
pub const STUDENT_IDS: [i64; 3] = [2, 3, 4];

pub fn default_roster() -> Vec<User> {
    vec![
        User::new(TEACHER_ID, "Teacher Ana", UserRole::Teacher),
        User::new(2, "Student Bob", UserRole::Student),
        User::new(3, "Student Charlie", UserRole::Student),
        User::new(4, "Student Diana", UserRole::Student),
    ]
}

// 种子数据中的日期均为合法常量
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seed_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: 101,
            author_id: TEACHER_ID,
            subject: "Mathematics".to_string(),
            details: "Complete exercises 1-10 on page 52 of the textbook.".to_string(),
            due_date: date(2024, 8, 15),
            created_at: at(2024, 8, 1, 0),
            attachment: Some("worksheet.pdf".to_string()),
        },
        Assignment {
            id: 102,
            author_id: TEACHER_ID,
            subject: "History".to_string(),
            details: "Write a 500-word essay on the industrial revolution.".to_string(),
            due_date: date(2024, 8, 20),
            created_at: at(2024, 8, 5, 0),
            attachment: None,
        },
        Assignment {
            id: 103,
            author_id: TEACHER_ID,
            subject: "Science".to_string(),
            details: "Draw a diagram of the water cycle and label all parts.".to_string(),
            due_date: date(2024, 8, 25),
            created_at: at(2024, 8, 10, 0),
            attachment: None,
        },
    ]
}

// 已读的 (作业, 学生) 组合，其余均为未读
const READ_PAIRS: [(i64, i64); 3] = [(101, 2), (101, 3), (102, 2)];

fn seed_submissions() -> Vec<Submission> {
    vec![
        Submission {
            assignment_id: 101,
            student_id: 2,
            content: SubmissionContent::file("math_ex_1-10.pdf", "#"),
            submitted_at: at(2024, 8, 14, 10),
            status: SubmissionStatus::Approved,
            teacher_comment: None,
        },
        Submission {
            assignment_id: 101,
            student_id: 3,
            content: SubmissionContent::link("https://docs.google.com/document/d/example"),
            submitted_at: at(2024, 8, 15, 9),
            status: SubmissionStatus::NeedsRevision,
            teacher_comment: Some(
                "Please double-check your calculations for question #5 and add more detailed \
                 explanations for the final two questions."
                    .to_string(),
            ),
        },
    ]
}

impl MemoryStorage {
    /// 载入示例数据的会话
    pub fn seeded() -> Self {
        let mut storage = Self::new(default_roster());

        for assignment in seed_assignments() {
            for student_id in STUDENT_IDS {
                let receipt = if READ_PAIRS.contains(&(assignment.id, student_id)) {
                    ReadReceipt::read(assignment.id, student_id)
                } else {
                    ReadReceipt::unread(assignment.id, student_id)
                };
                storage.read_receipts.insert(receipt.key(), receipt);
            }
            storage.last_assignment_id = storage.last_assignment_id.max(assignment.id);
            storage.assignments.push(assignment);
        }

        for submission in seed_submissions() {
            storage.submissions.insert(submission.key(), submission);
        }

        storage
    }
}
