pub mod answer;
pub mod driver;
pub mod question;
pub mod report;
