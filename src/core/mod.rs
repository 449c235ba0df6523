pub mod aggregation;
pub mod allocation;
pub mod errors;
pub mod models;
pub mod registry;
pub mod services;
pub mod session;
pub mod summary;
