pub mod conf;
pub mod db;
pub mod error;
pub mod session;
pub mod startup;
pub mod static_routes;
pub mod store;
pub mod trace;
pub mod views;

mod routes;
