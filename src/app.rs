use std::{thread::sleep, time::{Duration, Instant}};

use crate::canvas::Canvas;
use crate::game::Game;
use crate::geometry::screen_size;
use crate::input::{self, Command};
use crate::render::{self, TITLE};
use crate::term::TermManager;

use anyhow::Result;
use log::info;

pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const FRAME_INTERVAL: Duration = Duration::from_micros(1_000_000 / 60);

pub struct App {
    game: Game,
    term: TermManager,
    canvas: Canvas,
}

impl App {
    pub fn new() -> Result<Self> {
        let (width, height) = screen_size();
        let term = TermManager::new(width, height)?;
        Ok(App { game: Game::new(), term, canvas: Canvas::new(width, height) })
    }

    /// Runs until the player quits. The terminal is restored on every way out.
    pub fn run(&mut self) -> Result<()> {
        run_restored(self, |app| app.term.setup(TITLE), App::run_loop, |app| app.term.restore())
    }

    fn run_loop(&mut self) -> Result<()> {
        let mut ticker = Ticker::new(TICK_INTERVAL, Instant::now());

        loop {
            let frame_start = Instant::now();

            for key_ev in self.term.read_key_events_queue()? {
                match input::map_key(&key_ev) {
                    Command::Quit => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    Command::Game(input) => self.game.handle_input(input),
                    Command::None => {}
                }
            }

            if ticker.poll(Instant::now()) {
                self.game.tick();
            }

            // Inputs and the tick are applied before the frame is drawn
            render::draw(&self.game, &mut self.canvas);
            self.term.present(&self.canvas)?;

            sleep(FRAME_INTERVAL.saturating_sub(frame_start.elapsed()));
        }
    }
}

/// Runs `body` once `setup` succeeds and calls `restore` in every case, since
/// a failed setup may already have changed the terminal. The first error wins.
fn run_restored<S>(
    state: &mut S,
    setup: impl FnOnce(&mut S) -> Result<()>,
    body: impl FnOnce(&mut S) -> Result<()>,
    restore: impl FnOnce(&mut S) -> Result<()>,
) -> Result<()> {
    let result = setup(state).and_then(|()| body(state));
    let restored = restore(state);

    result?;
    restored
}

/// Fires at most once per call, so a late frame never runs a burst of
/// catch-up ticks.
struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    fn new(interval: Duration, start: Instant) -> Self {
        Ticker { interval, last: start }
    }

    fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}
