pub mod dashboard;
pub mod routes;
