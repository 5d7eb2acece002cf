//! Interactive console front end: filter prompts, statistic reports and the
//! raw-data pager.

pub mod browser;
pub mod console;
pub mod report;
pub mod resolver;
pub mod table_view;
