pub mod assignment_controller;
pub mod auth_controller;
pub mod dashboard_controller;
pub mod document_controller;
pub mod driver_controller;
pub mod fuel_controller;
pub mod issue_report_controller;
pub mod maintenance_controller;
pub mod partner_controller;
pub mod technician_controller;
pub mod user_controller;
pub mod vehicle_controller;
