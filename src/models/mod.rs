pub mod assignment;
pub mod document;
pub mod driver;
pub mod financial_record;
pub mod fuel;
pub mod issue_report;
pub mod maintenance;
pub mod partner;
pub mod technician;
pub mod user;
pub mod vehicle;
