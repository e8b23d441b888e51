pub mod interests;
pub mod models;
pub mod services;
pub mod statistics;
pub mod traits;
