pub mod agent;
pub mod layout;
pub mod scan;
pub mod triage;
pub mod planner;
pub mod deploy;
pub mod threat;
pub mod adaptive;
pub mod random;

mod tests;

pub use agent::Agent;
pub use adaptive::{AdaptiveAgent, TurnReport};
pub use layout::{Layout, PolicyParams, StrategyConfig};
pub use random::StallAgent;
pub use scan::{scan_frontier, GapState};
