pub mod assignment_service;
pub mod cost_service;
pub mod notification_service;
