//! 已读回执模型

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 已读回执，(assignment_id, student_id) 唯一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/read-receipt.ts")]
pub struct ReadReceipt {
    pub assignment_id: i64,
    pub student_id: i64,
    pub read: bool,
}

impl ReadReceipt {
    /// 新发布作业时写入的未读回执
    pub fn unread(assignment_id: i64, student_id: i64) -> Self {
        Self {
            assignment_id,
            student_id,
            read: false,
        }
    }

    pub fn read(assignment_id: i64, student_id: i64) -> Self {
        Self {
            assignment_id,
            student_id,
            read: true,
        }
    }

    pub fn key(&self) -> (i64, i64) {
        (self.assignment_id, self.student_id)
    }
}
