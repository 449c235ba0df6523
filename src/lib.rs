pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;
pub mod visualization;

pub use crate::core::errors::SettleError;
pub use crate::core::models::{Notice, Participant, SettlementGroup, SettlementRound};
pub use crate::core::registry::ParticipantRegistry;
pub use crate::core::services::{RegistryService, ShareService};
pub use crate::core::session::Settlement;
pub use visualization::Visualization;

#[cfg(test)]
mod tests;
