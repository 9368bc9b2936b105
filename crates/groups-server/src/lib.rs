pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod views;

pub use config::Config;
pub use db::DbPool;
