// Pipeline orchestration.

pub mod report;
