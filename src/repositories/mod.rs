pub mod assignment_repository;
pub mod document_repository;
pub mod driver_repository;
pub mod financial_record_repository;
pub mod fuel_repository;
pub mod issue_report_repository;
pub mod maintenance_repository;
pub mod partner_repository;
pub mod technician_repository;
pub mod user_repository;
pub mod vehicle_repository;
