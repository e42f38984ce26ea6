//! 已读回执存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::read_receipts::entities::ReadReceipt;

impl MemoryStorage {
    pub fn get_read_receipt_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<ReadReceipt>> {
        Ok(self
            .read_receipts
            .get(&(assignment_id, student_id))
            .copied())
    }

    /// 标记已读；已读状态只增不减
    pub fn mark_read_impl(&mut self, assignment_id: i64, student_id: i64) -> Result<bool> {
        let receipt = self
            .read_receipts
            .entry((assignment_id, student_id))
            .or_insert_with(|| ReadReceipt::unread(assignment_id, student_id));

        if receipt.read {
            return Ok(false);
        }
        receipt.read = true;
        Ok(true)
    }

    pub fn list_read_receipts_impl(&self, assignment_id: Option<i64>) -> Result<Vec<ReadReceipt>> {
        Ok(self
            .read_receipts
            .values()
            .filter(|r| assignment_id.is_none_or(|id| r.assignment_id == id))
            .copied()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_read_inserts_missing_receipt() {
        let mut storage = MemoryStorage::default();
        assert!(storage.mark_read_impl(7, 2).unwrap());
        assert_eq!(
            storage.get_read_receipt_impl(7, 2).unwrap(),
            Some(ReadReceipt::read(7, 2))
        );
    }

    #[test]
    fn test_mark_read_twice_reports_no_change() {
        let mut storage = MemoryStorage::default();
        assert!(storage.mark_read_impl(7, 2).unwrap());
        assert!(!storage.mark_read_impl(7, 2).unwrap());
        assert_eq!(storage.read_receipts.len(), 1);
    }
}
