pub mod assignments;
pub mod read_receipts;
pub mod session;
pub mod submissions;
pub mod users;
