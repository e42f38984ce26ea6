use serde::Serialize;
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;

/// 作业统计（百分比，未取整，由展示层负责格式化）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentStats {
    pub read_pct: f64,
    pub submitted_pct: f64,
    pub graded_pct: f64,
}

/// 教师首页的作业卡片
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentOverview {
    pub assignment: Assignment,
    pub stats: AssignmentStats,
}
