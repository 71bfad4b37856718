//! Terminal Block Drop runner (default binary).
//!
//! Keyboard and mouse gestures drive the engine; frames go through the
//! framebuffer renderer. Diagnostics are printed once the terminal is restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use block_drop::core::{GameConfig, GameState};
use block_drop::input::{handle_key_event, should_quit, SwipeTracker};
use block_drop::term::{FrameBuffer, GameView, HudInfo, TerminalRenderer, Viewport};
use block_drop::types::{GameAction, TICK_MS};
use block_drop::{AppConfig, HighScoreStore};

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut session = Session::new(&config);
    let result = session.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    for warning in &session.warnings {
        eprintln!("{warning}");
    }
    result
}

/// One terminal session: the game plus everything the engine does not own.
struct Session {
    game: GameState,
    store: Option<HighScoreStore>,
    hud: HudInfo,
    /// The current game's result has been offered to the store.
    recorded: bool,
    warnings: Vec<String>,
}

impl Session {
    fn new(config: &AppConfig) -> Self {
        let mut warnings = Vec::new();
        let store = config.high_score_path.clone().map(HighScoreStore::new);
        let high_score = match store.as_ref().map(HighScoreStore::load) {
            Some(Ok(score)) => score,
            Some(Err(e)) => {
                warnings.push(format!("[HighScore] Failed to load: {e:#}"));
                0
            }
            None => 0,
        };

        Self {
            game: GameState::new(GameConfig::with_seed(config.seed)),
            store,
            hud: HudInfo {
                high_score,
                new_record: false,
            },
            recorded: false,
            warnings,
        }
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        let mut swipe = SwipeTracker::default();

        let tick_duration = Duration::from_millis(TICK_MS as u64);
        let mut last_tick = Instant::now();

        loop {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&self.game.snapshot(), &self.hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;

            let timeout = tick_duration.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            self.apply(action);
                        }
                    }
                    Event::Mouse(mouse) => match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            swipe.press(mouse.column, mouse.row);
                        }
                        MouseEventKind::Up(MouseButton::Left) => {
                            if let Some(action) = swipe.release(mouse.column, mouse.row) {
                                self.apply(action);
                            }
                        }
                        _ => {}
                    },
                    Event::Resize(_, _) => term.invalidate(),
                    _ => {}
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= tick_duration {
                last_tick = Instant::now();
                self.game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
                self.record_if_over();
            }
        }
    }

    fn apply(&mut self, action: GameAction) {
        self.game.apply_action(action);
        if action == GameAction::Restart {
            self.recorded = false;
            self.hud.new_record = false;
        }
        self.record_if_over();
    }

    /// Offer the final score to the store once per finished game.
    fn record_if_over(&mut self) {
        if !self.game.game_over() || self.recorded {
            return;
        }
        self.recorded = true;

        let score = self.game.score();
        if score > self.hud.high_score {
            self.hud.high_score = score;
            self.hud.new_record = true;
        }
        if let Some(store) = &self.store {
            if let Err(e) = store.record(score) {
                self.warnings.push(format!(
                    "[HighScore] Failed to save to {}: {e:#}",
                    store.path().display()
                ));
            }
        }
    }
}
