pub mod dispatch_due_mailings;
pub mod get_due_mailings;
pub mod send_mailing;
