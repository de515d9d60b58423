pub mod job;
pub mod salary_report;
