// ═══════════════════════════════════════════════════════════════════════
// Session — drives one agent over the engine's line protocol.
//
// Every input line is one JSON message. A turn-start frame is answered
// with exactly two lines (build stack, deploy stack) and a flush; every
// other message is consumed silently. Malformed lines are logged and
// skipped so one bad frame never ends the game.
// ═══════════════════════════════════════════════════════════════════════

use anyhow::{Context, Result};
use frontier_agents::Agent;
use frontier_engine::config::GameConfig;
use frontier_engine::frame::{FrameKind, Message};
use frontier_engine::state::TurnState;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub turns: u32,
    pub action_frames: u32,
    pub skipped: u32,
    pub finished: bool,
}

pub fn run_session<R: BufRead, W: Write>(agent: &mut dyn Agent, input: R, mut output: W) -> Result<SessionStats> {
    let mut config: Option<GameConfig> = None;
    let mut stats = SessionStats::default();

    for (number, line) in input.lines().enumerate() {
        let line = line.context("reading engine input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let message = match Message::parse(line) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(line = number + 1, error = %e, "skipping malformed message");
                stats.skipped += 1;
                continue;
            }
        };

        match message {
            Message::Config(c) => {
                tracing::info!(agent = agent.name(), "game starting");
                agent.on_game_start(&c);
                config = Some(c);
            }
            Message::Frame(frame) => match frame.kind {
                FrameKind::TurnStart => {
                    let rules: &GameConfig = config.get_or_insert_with(|| {
                        tracing::warn!("turn started before any config, using the standard ruleset");
                        GameConfig::default()
                    });
                    let mut state = TurnState::new(rules, &frame);
                    agent.on_turn(&mut state);
                    let (build, deploy) = state.submit().to_wire(rules)?;
                    writeln!(output, "{}", build)?;
                    writeln!(output, "{}", deploy)?;
                    output.flush().context("flushing commands")?;
                    stats.turns += 1;
                }
                FrameKind::Action => {
                    agent.on_action_frame(&frame);
                    stats.action_frames += 1;
                }
                FrameKind::End => {
                    tracing::info!(turn = frame.turn, health = frame.me.health, enemy = frame.enemy.health, "game over");
                    stats.finished = true;
                    break;
                }
            },
        }
    }
    Ok(stats)
}
