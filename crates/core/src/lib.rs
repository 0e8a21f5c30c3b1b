pub mod agent;
pub mod config;
pub mod error;
pub mod perceive;
pub mod replay;
pub mod stages;
pub mod state;
pub mod strategy;

pub use agent::*;
pub use config::AgentConfig;
pub use error::PerceptionError;
pub use perceive::*;
pub use replay::*;
pub use state::*;
pub use strategy::*;
