//! 提交存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::submissions::{entities::Submission, requests::SubmissionListQuery};

impl MemoryStorage {
    pub fn get_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        Ok(self.submissions.get(&(assignment_id, student_id)).cloned())
    }

    /// 写入提交（同一对只保留最新一条），并将对应回执标记为已读
    pub fn record_submission_impl(&mut self, submission: Submission) -> Result<Submission> {
        let (assignment_id, student_id) = submission.key();
        self.submissions.insert(submission.key(), submission.clone());
        self.mark_read_impl(assignment_id, student_id)?;
        Ok(submission)
    }

    /// 更新已有提交，不存在时返回 None
    pub fn update_submission_impl(&mut self, submission: Submission) -> Result<Option<Submission>> {
        match self.submissions.get_mut(&submission.key()) {
            Some(existing) => {
                *existing = submission;
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    pub fn list_submissions_impl(&self, query: SubmissionListQuery) -> Result<Vec<Submission>> {
        Ok(self
            .submissions
            .values()
            .filter(|s| query.assignment_id.is_none_or(|id| s.assignment_id == id))
            .filter(|s| query.student_id.is_none_or(|id| s.student_id == id))
            .filter(|s| query.status.is_none_or(|status| s.status == status))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submissions::entities::{SubmissionContent, SubmissionStatus};

    fn submission(assignment_id: i64, student_id: i64, url: &str) -> Submission {
        Submission {
            assignment_id,
            student_id,
            content: SubmissionContent::link(url),
            submitted_at: chrono::Utc::now(),
            status: SubmissionStatus::Submitted,
            teacher_comment: None,
        }
    }

    #[test]
    fn test_record_overwrites_and_marks_read() {
        let mut storage = MemoryStorage::default();
        storage
            .record_submission_impl(submission(1, 2, "https://a.io/1"))
            .unwrap();
        storage
            .record_submission_impl(submission(1, 2, "https://a.io/2"))
            .unwrap();

        assert_eq!(storage.submissions.len(), 1);
        assert_eq!(
            storage.get_submission_impl(1, 2).unwrap().unwrap().content,
            SubmissionContent::link("https://a.io/2")
        );
        assert!(storage.get_read_receipt_impl(1, 2).unwrap().unwrap().read);
    }

    #[test]
    fn test_update_missing_returns_none() {
        let mut storage = MemoryStorage::default();
        assert!(
            storage
                .update_submission_impl(submission(1, 2, "https://a.io"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_list_filters() {
        let mut storage = MemoryStorage::default();
        storage.record_submission_impl(submission(1, 2, "https://a.io")).unwrap();
        storage.record_submission_impl(submission(1, 3, "https://b.io")).unwrap();
        storage.record_submission_impl(submission(2, 2, "https://c.io")).unwrap();

        let by_assignment = storage
            .list_submissions_impl(SubmissionListQuery {
                assignment_id: Some(1),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_assignment.len(), 2);

        let by_student = storage
            .list_submissions_impl(SubmissionListQuery {
                student_id: Some(2),
                status: Some(SubmissionStatus::Approved),
                ..Default::default()
            })
            .unwrap();
        assert!(by_student.is_empty());
    }
}
