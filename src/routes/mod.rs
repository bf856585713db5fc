pub mod assignment_routes;
pub mod auth_routes;
pub mod dashboard_routes;
pub mod document_routes;
pub mod driver_routes;
pub mod fuel_routes;
pub mod issue_report_routes;
pub mod maintenance_routes;
pub mod partner_routes;
pub mod technician_routes;
pub mod user_routes;
pub mod vehicle_routes;
