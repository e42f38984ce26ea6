//! 会话快照

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;
use crate::models::read_receipts::entities::ReadReceipt;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::User;

/// 会话内全部状态的只读副本，用于诊断输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionSnapshot {
    pub taken_at: chrono::DateTime<chrono::Utc>,
    pub users: Vec<User>,
    pub assignments: Vec<Assignment>,
    pub read_receipts: Vec<ReadReceipt>,
    pub submissions: Vec<Submission>,
}
