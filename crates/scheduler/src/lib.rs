pub mod job_schedulers;
pub mod mailing;
pub mod shared;
