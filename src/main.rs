//! Brick Breaker entry point
//!
//! Runs the game in the terminal: crossterm for input and drawing, one
//! fixed-period ticker driving the simulation. Logs go to a file because
//! stderr shares the alternate screen with the game.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Stdout, Write, stdout};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use brick_breaker::persistence::default_score_path;
use brick_breaker::platform::{FixedTicker, Key, KeyState};
use brick_breaker::renderer::{draw_announcement, draw_scene};
use brick_breaker::terminal::TerminalSurface;
use brick_breaker::{FileScoreStore, GameConfig, GameEvent, GameSession, ScoreStore, tick};

/// Without key-release events a direction counts as held for this many
/// ticks after its last press/repeat (~150 ms at 60 Hz).
const HOLD_TICKS: u64 = 9;

/// How long the non-blocking "Life lost" banner stays up
const BANNER_TICKS: u64 = 60;

#[derive(Parser, Debug)]
#[command(name = "brick-breaker", about = "Ball-and-paddle brick breaker in the terminal")]
struct Args {
    /// JSON game configuration (missing keys use defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the launch direction RNG
    #[arg(long)]
    seed: Option<u64>,
    /// High score file (default: ~/.brick_breaker_score.json)
    #[arg(long)]
    score_file: Option<PathBuf>,
    /// Override the tick period in milliseconds
    #[arg(long)]
    tick_ms: Option<f64>,
    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
    /// Log file, filtered by RUST_LOG (default: brick-breaker.log in the temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("brick-breaker.log")
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// `env_logger` with a file target instead of stderr
fn init_logger(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Synthesises key-up for terminals that only report presses
struct HoldTracker {
    enabled: bool,
    last_seen: HashMap<Key, u64>,
}

impl HoldTracker {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last_seen: HashMap::new(),
        }
    }

    fn seen(&mut self, key: Key, frame: u64) {
        if self.enabled {
            self.last_seen.insert(key, frame);
        }
    }

    fn expire(&mut self, keys: &mut KeyState, frame: u64) {
        self.last_seen.retain(|&key, &mut last| {
            let held = frame.saturating_sub(last) <= HOLD_TICKS;
            if !held {
                keys.key_up(key);
            }
            held
        });
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(c) => Key::from_char(c),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

struct Frontend<'a> {
    session: &'a mut GameSession,
    store: &'a mut dyn ScoreStore,
    surface: TerminalSurface<BufWriter<Stdout>>,
    keys: KeyState,
    hold: HoldTracker,
    frame: u64,
    banner: Option<(&'static str, u64)>,
}

impl Frontend<'_> {
    /// Drain pending terminal events into the key state.
    /// Returns false when the player quits.
    fn poll_input(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if is_quit(&key) && key.kind != KeyEventKind::Release => {
                    return Ok(false);
                }
                Event::Key(key) => {
                    let Some(mapped) = map_key(key.code) else {
                        continue;
                    };
                    match key.kind {
                        KeyEventKind::Release => self.keys.key_up(mapped),
                        KeyEventKind::Repeat if mapped == Key::Launch => {}
                        _ => {
                            self.keys.key_down(mapped);
                            self.hold.seen(mapped, self.frame);
                        }
                    }
                }
                Event::Resize(cols, rows) => self.surface.resize(cols, rows),
                _ => {}
            }
        }
        self.hold.expire(&mut self.keys, self.frame);
        Ok(true)
    }

    /// Block until a key press. Returns false when it was a quit key.
    fn wait_for_key(&mut self) -> Result<bool> {
        // Presses queued before the announcement don't count
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(!is_quit(&key));
                }
                Event::Resize(cols, rows) => self.surface.resize(cols, rows),
                _ => {}
            }
        }
    }

    fn handle_events(&mut self) -> Option<&'static str> {
        let mut banner = None;
        for event in self.session.drain_events() {
            if let GameEvent::HighScore(score) = event {
                if let Err(e) = self.store.save_high_score(score) {
                    log::warn!("Could not save high score: {}", e);
                }
            }
            banner = event.announcement().or(banner);
        }
        banner
    }

    /// One timer firing: input, simulation, events, draw
    fn frame(&mut self, now: Duration) -> Result<bool> {
        self.frame += 1;
        if !self.poll_input()? {
            return Ok(false);
        }

        let input = self.keys.take_input();
        tick(self.session, &input, now);
        let announced = self.handle_events();
        if let Some(message) = announced {
            self.banner = Some((message, self.frame + BANNER_TICKS));
        }
        if self.banner.is_some_and(|(_, until)| self.frame > until) {
            self.banner = None;
        }

        draw_scene(self.session, &mut self.surface);
        if let Some((message, _)) = self.banner {
            draw_announcement(self.session, &mut self.surface, message);
        }
        self.surface.present()?;

        if self.session.phase().awaits_acknowledgement() {
            let message = announced.unwrap_or_default();
            log::info!("Announcing: {}", message);
            draw_announcement(self.session, &mut self.surface, message);
            self.surface.present()?;
            if !self.wait_for_key()? {
                return Ok(false);
            }
            self.session.acknowledge();
            self.banner = None;
            self.keys = KeyState::new();
            self.hold = HoldTracker::new(self.hold.enabled);
        }
        Ok(true)
    }
}

fn run(session: &mut GameSession, store: &mut dyn ScoreStore, release_events: bool) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let surface = TerminalSurface::new(
        BufWriter::new(stdout()),
        cols,
        rows,
        session.config().field(),
    );
    let mut ticker = FixedTicker::new(session.config().tick_interval());
    let mut frontend = Frontend {
        session,
        store,
        surface,
        keys: KeyState::new(),
        hold: HoldTracker::new(!release_events),
        frame: 0,
        banner: None,
    };

    ticker.run(|now| match frontend.frame(now) {
        Ok(true) => ControlFlow::Continue(()),
        Ok(false) => ControlFlow::Break(Ok(())),
        Err(e) => ControlFlow::Break(Err(e)),
    })
}

/// Raw mode + alternate screen. Returns whether key-release events are on.
fn setup_terminal(out: &mut impl Write) -> Result<bool> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        out.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    } else {
        log::info!("Terminal has no key-release events, using hold window");
    }
    Ok(enhanced)
}

fn restore_terminal(out: &mut impl Write, enhanced: bool) -> Result<()> {
    if enhanced {
        out.execute(PopKeyboardEnhancementFlags)?;
    }
    out.execute(cursor::Show)?;
    out.execute(terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args.log_file.clone().unwrap_or_else(default_log_path))?;

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(ms) = args.tick_ms {
        config.tick_interval_ms = ms;
    }
    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut store = FileScoreStore::new(args.score_file.unwrap_or_else(default_score_path));
    let high_score = store.load_high_score().unwrap_or_else(|e| {
        log::warn!("Could not read high score from {}: {}", store.path().display(), e);
        0
    });

    let mut session = GameSession::new(config, seed);
    session.set_high_score(high_score);
    log::info!("Brick Breaker starting with seed {}", seed);

    let mut out = stdout();
    let enhanced = setup_terminal(&mut out)?;
    let result = run(&mut session, &mut store, enhanced);
    restore_terminal(&mut out, enhanced)?;
    result
}
