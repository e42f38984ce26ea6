pub mod validate;

pub use validate::{validate_due_date, validate_link, validate_required};
