use tracing::{debug, info};

use super::LifecycleController;
use crate::errors::Result;

/// 标记已读（幂等，已读不会回退为未读）
pub fn mark_read(
    controller: &mut LifecycleController,
    assignment_id: i64,
    student_id: i64,
) -> Result<()> {
    controller.require_assignment(assignment_id)?;
    controller.require_student(student_id)?;

    if controller.storage_mut().mark_read(assignment_id, student_id)? {
        info!("Student {} read assignment {}", student_id, assignment_id);
    } else {
        debug!(
            "Assignment {} already read by student {}",
            assignment_id, student_id
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut controller = seeded_controller();
        assert!(!controller.get_read_receipt(SCIENCE, BOB).unwrap());

        controller.mark_read(SCIENCE, BOB).unwrap();
        let once = controller.snapshot().unwrap().read_receipts;
        controller.mark_read(SCIENCE, BOB).unwrap();
        let twice = controller.snapshot().unwrap().read_receipts;

        assert!(controller.get_read_receipt(SCIENCE, BOB).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mark_read_never_creates_submission() {
        let mut controller = seeded_controller();
        controller.mark_read(HISTORY, DIANA).unwrap();
        assert!(controller.get_submission(HISTORY, DIANA).unwrap().is_none());
    }

    #[test]
    fn test_mark_read_unknown_ids() {
        let mut controller = seeded_controller();
        assert_eq!(controller.mark_read(999, BOB).unwrap_err().code(), "E001");
        assert_eq!(controller.mark_read(MATH, 999).unwrap_err().code(), "E001");
        // 教师不是学生
        assert_eq!(
            controller.mark_read(MATH, TEACHER_ID).unwrap_err().code(),
            "E001"
        );
    }

    #[test]
    fn test_absent_receipt_reads_as_false() {
        let controller = seeded_controller();
        assert!(!controller.get_read_receipt(999, 999).unwrap());
    }
}
