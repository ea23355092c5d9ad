// Output formatting — terminal display and JSON reports.

pub mod report;
pub mod terminal;
