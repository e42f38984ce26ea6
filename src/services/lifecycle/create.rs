use chrono::Utc;
use tracing::{info, warn};

use super::LifecycleController;
use crate::errors::{HomeworkHubError, Result};
use crate::models::assignments::entities::{Assignment, NewAssignment};
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::utils::validate::{validate_due_date, validate_required};

pub fn create_assignment(
    controller: &mut LifecycleController,
    author_id: i64,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let subject = validate_required("subject", &req.subject)?;
    let details = validate_required("details", &req.details)?;
    let due_date = validate_due_date(&req.due_date)?;
    let attachment = req
        .attachment
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    // 只有教师可以发布作业
    let author = controller
        .storage()
        .get_user_by_id(author_id)?
        .ok_or_else(|| HomeworkHubError::not_found(format!("用户不存在: {author_id}")))?;
    if !author.is_teacher() {
        warn!("User {} ({}) tried to create an assignment", author.id, author.role);
        return Err(HomeworkHubError::permission_denied("只有教师可以发布作业"));
    }

    let student_ids: Vec<i64> = controller.students()?.iter().map(|s| s.id).collect();

    let new_assignment = NewAssignment {
        author_id,
        subject,
        details,
        due_date,
        created_at: Utc::now(),
        attachment,
    };

    let assignment = controller
        .storage_mut()
        .create_assignment(new_assignment, &student_ids)?;

    info!(
        "Assignment {} created by teacher {} ({} receipts)",
        assignment.id,
        author_id,
        student_ids.len()
    );

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use crate::models::assignments::entities::AssignmentFilter;
    use crate::test_support::*;

    #[test]
    fn test_create_lists_once_with_unread_receipts() {
        let mut controller = seeded_controller();
        let created = controller
            .create_assignment(TEACHER_ID, create_request("Art"))
            .unwrap();

        let listed = controller
            .list_assignments(AssignmentFilter::ForTeacher(TEACHER_ID))
            .unwrap();
        assert_eq!(listed.iter().filter(|a| a.id == created.id).count(), 1);

        for student in controller.list_students().unwrap() {
            let receipt = controller
                .storage()
                .get_read_receipt(created.id, student.id)
                .unwrap()
                .expect("receipt inserted on creation");
            assert!(!receipt.read);
        }
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let mut controller = seeded_controller();
        let first = controller
            .create_assignment(TEACHER_ID, create_request("Art"))
            .unwrap();
        let second = controller
            .create_assignment(TEACHER_ID, create_request("Music"))
            .unwrap();
        assert!(second.id > first.id);
        assert!(first.id > SCIENCE);
    }

    #[test]
    fn test_create_trims_fields_and_keeps_attachment() {
        let mut controller = seeded_controller();
        let mut req = create_request("Art");
        req.subject = "  Art ".to_string();
        req.attachment = Some("palette.pdf".to_string());

        let created = controller.create_assignment(TEACHER_ID, req).unwrap();
        assert_eq!(created.subject, "Art");
        assert_eq!(created.attachment.as_deref(), Some("palette.pdf"));
        assert_eq!(created.author_id, TEACHER_ID);
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        let mut controller = seeded_controller();

        let mut req = create_request("Art");
        req.details = "   ".to_string();
        assert_eq!(
            controller.create_assignment(TEACHER_ID, req).unwrap_err().code(),
            "E003"
        );

        let mut req = create_request("Art");
        req.due_date = String::new();
        assert_eq!(
            controller.create_assignment(TEACHER_ID, req).unwrap_err().code(),
            "E003"
        );
        assert_eq!(controller.list_assignments(AssignmentFilter::All).unwrap().len(), 3);
    }

    #[test]
    fn test_student_cannot_create() {
        let mut controller = seeded_controller();
        let err = controller
            .create_assignment(BOB, create_request("Art"))
            .unwrap_err();
        assert_eq!(err.code(), "E004");
    }

    #[test]
    fn test_unknown_author_is_not_found() {
        let mut controller = seeded_controller();
        let err = controller
            .create_assignment(99, create_request("Art"))
            .unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
