//! Terminal arcade runner (default binary).
//!
//! Start menu, then a Snake or Tetris session driven by crossterm input and
//! the engine-reported tick interval. Rendering goes through the framebuffer
//! views; the terminal is restored on every exit path.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{info, warn};

use tui_arcade::core::{SnakeGame, TetrisGame};
use tui_arcade::input::{is_back, map_menu_key, map_snake_key, map_tetris_key, should_quit};
use tui_arcade::term::{
    FrameBuffer, Menu, MenuChoice, MenuView, SnakeView, TerminalRenderer, TetrisView,
};
use tui_arcade::types::{GameKind, INPUT_POLL_MS};

const SEED_ENV: &str = "TUI_ARCADE_SEED";

/// How a game session ended.
enum Exit {
    Menu,
    Quit,
}

/// Outcome of waiting for one input event.
enum Input {
    Key(KeyEvent),
    Resized,
    Idle,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Off)
        .parse_default_env()
        .init();

    let seed = initial_seed();
    info!("starting with seed {seed}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn initial_seed() -> u32 {
    if let Ok(raw) = std::env::var(SEED_ENV) {
        match raw.trim().parse::<u32>() {
            Ok(seed) => return seed,
            Err(err) => warn!("ignoring {SEED_ENV}={raw:?}: {err}"),
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut seed: u32) -> Result<()> {
    let mut menu = Menu::new();
    let view = MenuView;
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        view.render_into(&menu, term.viewport()?, &mut fb);
        term.present(&fb)?;

        let key = match poll_input(term, None)? {
            Input::Key(key) => key,
            Input::Resized | Input::Idle => continue,
        };
        if should_quit(key) {
            return Ok(());
        }
        let Some(choice) = map_menu_key(key).and_then(|action| menu.apply(action)) else {
            continue;
        };

        let exit = match choice {
            MenuChoice::Quit => return Ok(()),
            MenuChoice::Play(kind) => {
                info!("starting {} (seed {seed})", kind.title());
                match kind {
                    GameKind::Snake => run_snake(term, &mut fb, seed)?,
                    GameKind::Tetris => run_tetris(term, &mut fb, seed)?,
                }
            }
        };
        // Each new game from the menu gets its own seed.
        seed = seed.wrapping_add(1);

        match exit {
            Exit::Quit => return Ok(()),
            Exit::Menu => term.invalidate(),
        }
    }
}

fn run_snake(term: &mut TerminalRenderer, fb: &mut FrameBuffer, seed: u32) -> Result<Exit> {
    let mut game = SnakeGame::new(seed);
    let view = SnakeView::default();
    let mut last_step = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            view.render_into(&game.snapshot(), term.viewport()?, fb);
            term.present(fb)?;
            dirty = false;
        }

        let interval = Duration::from_millis(game.speed_ms() as u64);
        match poll_input(term, Some(until_next_tick(last_step, interval)))? {
            Input::Key(key) => {
                if should_quit(key) {
                    return Ok(Exit::Quit);
                }
                if is_back(key) {
                    return Ok(Exit::Menu);
                }
                if let Some(action) = map_snake_key(key) {
                    dirty |= game.apply_action(action);
                }
            }
            Input::Resized => dirty = true,
            Input::Idle => {}
        }

        if last_step.elapsed() >= interval {
            last_step = Instant::now();
            // step reports false on the fatal move, which still needs a redraw.
            let live = !game.paused() && !game.game_over();
            game.step();
            dirty |= live;
        }
    }
}

fn run_tetris(term: &mut TerminalRenderer, fb: &mut FrameBuffer, seed: u32) -> Result<Exit> {
    let mut game = TetrisGame::new(seed);
    game.start();
    let view = TetrisView::default();
    let mut last_step = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            view.render_into(&game.snapshot(), term.viewport()?, fb);
            term.present(fb)?;
            dirty = false;
        }

        let interval = Duration::from_millis(game.drop_interval_ms() as u64);
        match poll_input(term, Some(until_next_tick(last_step, interval)))? {
            Input::Key(key) => {
                if should_quit(key) {
                    return Ok(Exit::Quit);
                }
                if is_back(key) {
                    return Ok(Exit::Menu);
                }
                if let Some(action) = map_tetris_key(key) {
                    dirty |= game.apply_action(action);
                }
            }
            Input::Resized => dirty = true,
            Input::Idle => {}
        }

        if last_step.elapsed() >= interval {
            last_step = Instant::now();
            // A lock (step returns false) changes the board too.
            let live = !game.paused() && !game.game_over();
            game.step();
            dirty |= live;
        }
    }
}

fn until_next_tick(last: Instant, interval: Duration) -> Duration {
    interval
        .saturating_sub(last.elapsed())
        .min(Duration::from_millis(INPUT_POLL_MS))
}

/// Wait for the next key press or resize; `None` blocks indefinitely.
fn poll_input(term: &mut TerminalRenderer, timeout: Option<Duration>) -> Result<Input> {
    if let Some(timeout) = timeout {
        if !event::poll(timeout)? {
            return Ok(Input::Idle);
        }
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Input::Key(key)),
        Event::Resize(..) => {
            term.invalidate();
            Ok(Input::Resized)
        }
        _ => Ok(Input::Idle),
    }
}
