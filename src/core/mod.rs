pub mod ballistics;
pub mod chart;
pub mod console;
pub mod error;
pub mod input;
pub mod report;
pub mod units;
pub mod window;
