// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface every bot implements
//
// KEY DESIGN PRINCIPLE:
//   Agents never talk to the engine. They receive a `TurnState` ledger
//   that mirrors the engine's placement rules, queue their intents on it,
//   and the runner submits the ledger once the agent returns.
//
//   The lifecycle, driven by the runner:
//     - on_game_start  once, with the engine's unit table
//     - on_turn        once per turn-start frame
//     - on_action_frame for every action frame in between
// ═══════════════════════════════════════════════════════════════════════

use frontier_engine::config::GameConfig;
use frontier_engine::frame::Frame;
use frontier_engine::state::TurnState;

pub trait Agent: Send {
    /// Human-readable name for this agent (e.g., "Adaptive", "Stall").
    fn name(&self) -> &str;

    fn on_game_start(&mut self, _config: &GameConfig) {}

    /// Queue this turn's commands on the ledger.
    fn on_turn(&mut self, state: &mut TurnState<'_>);

    /// Observe an action frame. Events such as breaches only appear here.
    fn on_action_frame(&mut self, _frame: &Frame) {}
}
