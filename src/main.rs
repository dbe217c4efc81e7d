use std::io;
use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lifegrid::ScreenSize;
use lifegrid::automaton::Automaton;
use lifegrid::camera::Camera;
use lifegrid::config::Config;
use lifegrid::events::Event;
use lifegrid::io::convert_event;

/// Rows kept for the status line
const STATUS_ROWS: ScreenSize = 1;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let rows = rows.saturating_sub(STATUS_ROWS);

    let (dots_w, dots_h) = Camera::dots(cols, rows);
    let (width, height) = config.grid_size(dots_w, dots_h);

    let life = Automaton::with_seed(width, height, config.seed).context("Failed to create grid")?;
    info!(width, height, ?config, "Starting");

    let mut stdout = io::stdout();
    let _terminal = RawTerminal::enter(&mut stdout).context("Failed to set up terminal")?;

    run(&mut stdout, &config, life, Camera::new(cols, rows))
}

/// Raw mode on the alternate screen. Dropping it restores the terminal, also when unwinding.
struct RawTerminal;

impl RawTerminal {
    fn enter(stdout: &mut io::Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // From here on, dropping the guard undoes whatever part of the setup succeeded
        let guard = RawTerminal;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(guard)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen) {
            warn!("Failed to leave the alternate screen: {e}");
        }

        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to disable raw mode: {e}");
        }
    }
}

fn run(
    stdout: &mut io::Stdout,
    config: &Config,
    mut life: Automaton,
    mut cam: Camera,
) -> anyhow::Result<()> {
    let mut paused = false;

    draw(stdout, &mut cam, &life, config, paused)?;

    loop {
        let t = Instant::now();
        let mut step = !paused;

        // Poll events for as long as the tick lasts
        while let Some(time_left) = config.tick.checked_sub(t.elapsed()) {
            if !event::poll(time_left)? {
                break;
            }

            match convert_event(event::read()?) {
                None => {}
                Some(Event::Exit) => return Ok(()),
                Some(Event::TogglePause) => {
                    paused = !paused;
                    step = false;
                }
                Some(Event::Step) => step = paused,
                Some(Event::Resize { cols, rows }) => {
                    cam.resize(cols, rows.saturating_sub(STATUS_ROWS));
                }
            }
        }

        if step {
            life.advance();
        }

        draw(stdout, &mut cam, &life, config, paused)?;
    }
}

fn draw(
    stdout: &mut io::Stdout,
    cam: &mut Camera,
    life: &Automaton,
    config: &Config,
    paused: bool,
) -> anyhow::Result<()> {
    let grid = life.grid();

    cam.reset();
    cam.draw(grid, config.cell_size.get());
    let frame = cam.render();

    let status = format!(
        "generation {} | population {} | {}x{}{}",
        life.generation(),
        grid.population(),
        grid.width(),
        grid.height(),
        if paused { " | paused" } else { "" },
    );

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        style::Print(status),
        cursor::MoveToNextLine(1),
    )?;

    for line in frame.lines() {
        queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    stdout.flush().context("Failed to draw frame")?;

    Ok(())
}
