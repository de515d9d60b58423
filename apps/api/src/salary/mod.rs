// Salary estimation for Israeli tech job postings.
// Heuristic estimator over static tables, plus a TTL cache in front of the
// crowd-sourced salary database. The heuristic is always the fallback.

pub mod cache;
pub mod company;
pub mod estimator;
pub mod format;
pub mod handlers;
pub mod lookup;
pub mod reports;
pub mod tables;
pub mod title;
