mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use mathdrill::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    evaluator::Verdict,
    logging,
    runtime::{CrosstermEventSource, DrillEvent, FixedTicker, Runner},
    DifficultyLevel, Operation, ProblemGenerator, Session,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Instant,
};

/// arithmetic drills in the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Drill addition, subtraction, multiplication, division, fractions, percentages and EPS growth. Type an answer, press enter, get the next problem."
)]
pub struct Cli {
    /// operation to drill (default from config file, else add)
    #[clap(short = 'o', long, value_enum)]
    operation: Option<Operation>,

    /// difficulty from 1 to 10; operands go up to ten times this value
    #[clap(short = 'd', long, value_parser = clap::value_parser!(u8).range(1..=10))]
    difficulty: Option<u8>,

    /// seed for a reproducible sequence of problems
    #[clap(long)]
    seed: Option<u64>,

    /// milliseconds before correct/incorrect feedback clears
    #[clap(long)]
    reset_delay_ms: Option<u64>,

    /// keep the current problem when a blank answer is submitted
    #[clap(long)]
    block_on_empty: bool,

    /// store the resulting operation, difficulty and timing as defaults
    #[clap(long)]
    save_config: bool,

    /// config file to read (and write with --save-config)
    #[clap(long)]
    config: Option<PathBuf>,

    /// do not write a log file
    #[clap(long)]
    no_log: bool,
}

impl Cli {
    /// Command line flags win over the stored defaults
    fn merge_config(&self, mut base: Config) -> Config {
        if let Some(op) = self.operation {
            base.operation = op.token().to_string();
        }
        if let Some(d) = self.difficulty {
            base.difficulty = d;
        }
        if let Some(ms) = self.reset_delay_ms {
            base.reset_delay_ms = ms;
        }
        if self.block_on_empty {
            base.advance_on_invalid = false;
        }
        base
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub input: String,
    /// Dismissable message shown over the drill after a wrong answer
    pub popup: Option<String>,
}

impl App {
    pub fn new(config: &Config, seed: Option<u64>) -> Self {
        let generator = match seed {
            Some(seed) => ProblemGenerator::seeded(seed),
            None => ProblemGenerator::new(),
        };

        Self {
            session: Session::with_generator(
                config.operation(),
                config.difficulty(),
                generator,
                config.session_config(),
            ),
            input: String::new(),
            popup: None,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        // any key dismisses the popup and is swallowed
        if self.popup.take().is_some() {
            return Control::Continue;
        }

        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                self.input.push(c);
                self.session.on_input_edited();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.session.on_input_edited();
            }
            KeyCode::Enter => self.submit(now),
            KeyCode::Left => {
                self.session.back();
            }
            KeyCode::Tab => self.session.set_operation(self.session.operation().next()),
            KeyCode::BackTab => self.session.set_operation(self.session.operation().prev()),
            KeyCode::Up => self.change_difficulty(self.session.difficulty().increment()),
            KeyCode::Down => self.change_difficulty(self.session.difficulty().decrement()),
            _ => {}
        }

        Control::Continue
    }

    /// Returns true when something visible changed
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    fn submit(&mut self, now: Instant) {
        let result = self.session.submit_at(&self.input, now);
        self.input.clear();
        if matches!(result.verdict, Verdict::Incorrect | Verdict::InvalidInput) {
            self.popup = Some(result.feedback());
        }
    }

    fn change_difficulty(&mut self, level: DifficultyLevel) {
        if level != self.session.difficulty() {
            self.session.set_difficulty(level);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !cli.no_log {
        if let Some(path) = AppDirs::log_path() {
            if let Err(err) = logging::init_file_logging(&path) {
                eprintln!("mathdrill: logging disabled ({err})");
            }
        }
    }

    let store = cli.config_store();
    let config = cli.merge_config(store.load());
    if cli.save_config {
        store.save(&config)?;
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, cli.seed);
    let outcome = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    terminal.draw(|f| ui(app, f))?;

    loop {
        let now = Instant::now();
        match runner.step() {
            DrillEvent::Tick => {
                if app.on_tick(now) {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            DrillEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            DrillEvent::Key(key) => {
                if app.on_key(key, now) == Control::Quit {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
            DrillEvent::Closed => {
                tracing::warn!("terminal input closed, leaving");
                break;
            }
        }
    }

    tracing::info!("session ended");
    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
