//! 作业目录存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::assignments::entities::{Assignment, AssignmentChanges, NewAssignment};
use crate::models::read_receipts::entities::ReadReceipt;

impl MemoryStorage {
    /// 分配作业 ID：取创建时间的毫秒时间戳，并保证严格递增
    fn next_assignment_id(&mut self, candidate: i64) -> i64 {
        let id = candidate.max(self.last_assignment_id + 1);
        self.last_assignment_id = id;
        id
    }

    /// 创建作业，同时为每位学生写入未读回执
    pub fn create_assignment_impl(
        &mut self,
        new: NewAssignment,
        student_ids: &[i64],
    ) -> Result<Assignment> {
        let id = self.next_assignment_id(new.created_at.timestamp_millis());

        let assignment = Assignment {
            id,
            author_id: new.author_id,
            subject: new.subject,
            details: new.details,
            due_date: new.due_date,
            created_at: new.created_at,
            attachment: new.attachment,
        };

        for &student_id in student_ids {
            self.read_receipts
                .entry((id, student_id))
                .or_insert_with(|| ReadReceipt::unread(id, student_id));
        }
        self.assignments.push(assignment.clone());

        Ok(assignment)
    }

    pub fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        Ok(self.assignments.iter().find(|a| a.id == id).cloned())
    }

    /// 仅覆盖科目、要求与截止日期
    pub fn update_assignment_impl(
        &mut self,
        id: i64,
        changes: AssignmentChanges,
    ) -> Result<Option<Assignment>> {
        let Some(assignment) = self.assignments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        assignment.subject = changes.subject;
        assignment.details = changes.details;
        assignment.due_date = changes.due_date;

        Ok(Some(assignment.clone()))
    }

    pub fn list_assignments_impl(&self) -> Result<Vec<Assignment>> {
        Ok(self.assignments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn new_assignment(millis: i64) -> NewAssignment {
        NewAssignment {
            author_id: 1,
            subject: "Math".to_string(),
            details: "p. 52".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            created_at: Utc.timestamp_millis_opt(millis).unwrap(),
            attachment: None,
        }
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let mut storage = MemoryStorage::default();
        let first = storage.create_assignment_impl(new_assignment(5_000), &[]).unwrap();
        let second = storage.create_assignment_impl(new_assignment(5_000), &[]).unwrap();
        assert_eq!(first.id, 5_000);
        assert_eq!(second.id, 5_001);
    }

    #[test]
    fn test_create_inserts_unread_receipts() {
        let mut storage = MemoryStorage::default();
        let created = storage
            .create_assignment_impl(new_assignment(1_000), &[2, 3])
            .unwrap();
        assert_eq!(storage.read_receipts.len(), 2);
        assert!(storage.read_receipts.values().all(|r| !r.read));
        assert!(storage.read_receipts.contains_key(&(created.id, 3)));
    }

    #[test]
    fn test_update_unknown_returns_none() {
        let mut storage = MemoryStorage::default();
        let changes = AssignmentChanges {
            subject: "History".to_string(),
            details: "essay".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        };
        assert!(storage.update_assignment_impl(42, changes).unwrap().is_none());
    }
}
