// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod config;
mod logging;
mod protocol;
mod ui;

use app::{App, AppMode, Handled};
use color_eyre::{Result, eyre::eyre};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use serde::Serialize;
use std::{
    io::{self, BufRead, Write},
    time::{Duration, Instant},
};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Load config
    let (config, config_created) = config::Config::load()?;

    // Check for command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let route = match args.get(1).map(String::as_str) {
        None => None,
        Some("--route") => Some(
            args.get(2)
                .cloned()
                .ok_or_else(|| eyre!("--route needs a path such as /chat/1"))?,
        ),
        Some(_) => return handle_cli_args(&args, &config),
    };

    let _log_guard = logging::init(&config.logging)?;
    if config_created {
        tracing::info!(path = %config::Config::config_path()?.display(), "created default config");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, route.as_deref());
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Err(err) => {
            tracing::error!(error = %err, "picker stopped");
            eprintln!("Error: {:?}", err);
        }
        Ok(()) => {
            if let Some(route) = app.chosen_route {
                println!("{}", route);
            }
        }
    }

    Ok(())
}

fn handle_cli_args(args: &[String], config: &config::Config) -> Result<()> {
    let cmd = args
        .get(1)
        .ok_or_else(|| eyre!("No command provided"))?;
    let program_name = args.first().map_or("lobby", String::as_str);

    match cmd.as_str() {
        "--help" | "-h" => print_help(program_name),
        "--version" | "-v" => println!("lobby v{}", env!("CARGO_PKG_VERSION")),
        "rooms" => print_rooms(config)?,
        "transcript" => print_transcript()?,
        cmd_str => {
            eprintln!("Unknown command: {}", cmd_str);
            eprintln!("Run with --help for available commands.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_help(program_name: &str) {
    println!("Lobby - chat room picker");
    println!();
    println!("Usage: {} [command]", program_name);
    println!();
    println!("Commands:");
    println!("  rooms            - Print configured rooms as JSON");
    println!("  transcript       - Format raw chat lines read from stdin");
    println!("  --route <path>   - Start the picker on a room, e.g. /chat/2");
    println!("  --help           - Show this help");
    println!("  --version        - Show version");
    println!();
    println!("Run without arguments to pick a room interactively.");
    println!("The chosen room's route is printed on exit.");
}

#[derive(Serialize)]
struct RoomEntry<'a> {
    id: i64,
    name: &'a str,
    route: String,
}

fn print_rooms(config: &config::Config) -> Result<()> {
    let entries: Vec<RoomEntry> = config
        .rooms
        .iter()
        .map(|room| RoomEntry {
            id: room.id,
            name: &room.name,
            route: room.route(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn print_transcript() -> Result<()> {
    let mut out = io::stdout().lock();
    for view in read_transcript(io::stdin().lock())? {
        writeln!(out, "{}", view)?;
    }
    Ok(())
}

/// Formats every transcript line from `reader`. Invalid UTF-8 is replaced
/// rather than ending the read.
fn read_transcript(mut reader: impl BufRead) -> Result<Vec<protocol::MessageView>> {
    let mut views = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        views.extend(protocol::MessageView::from_transcript_line(line));
    }
    Ok(views)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.clear_expired_status_toast();

        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.should_quit = true;
                        continue;
                    }

                    match app.mode {
                        AppMode::Rooms => handle_rooms_mode(app, key.code),
                        AppMode::Help => handle_help_mode(app, key.code),
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(app, mouse)?;
                }
                Event::FocusGained | Event::FocusLost | Event::Paste(_) | Event::Resize(_, _) => {}
            }
        }
    }

    Ok(())
}

fn handle_rooms_mode(app: &mut App, key_code: KeyCode) {
    // Carousel keys never fall through to the bindings below
    if app.handle_carousel_key(key_code) == Handled::Yes {
        return;
    }

    match key_code {
        KeyCode::Enter => app.choose_active_room(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key_code: KeyCode) {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
    ) {
        app.close_help();
    }
}

fn handle_mouse_event(app: &mut App, mouse: event::MouseEvent) -> Result<()> {
    if app.mode != AppMode::Rooms {
        return Ok(());
    }

    let now = Instant::now();
    match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            app.handle_scroll_notch(true, now);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            app.handle_scroll_notch(false, now);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = ui::layout::rooms_layout(terminal_area()?);
            let slots = app.rooms.presenter().slots();
            if let Some(index) = ui::layout::slot_at(layout.carousel, slots, mouse.column, mouse.row)
            {
                app.handle_click(index);
            }
            app.handle_touch_start(mouse.column, mouse.row);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.handle_touch_move(mouse.column, mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.handle_touch_end(mouse.column, mouse.row);
        }
        MouseEventKind::Down(_)
        | MouseEventKind::Up(_)
        | MouseEventKind::Drag(_)
        | MouseEventKind::Moved => {}
    }
    Ok(())
}

fn terminal_area() -> Result<Rect> {
    let (width, height) = crossterm::terminal::size()?;
    Ok(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_survives_invalid_utf8() {
        let input: &[u8] = b"alice: hi\n\xff\xfe: broken\r\n> sent\n\nbob: bye";
        let lines: Vec<String> = read_transcript(input)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            vec!["alice │ hi", "\u{fffd}\u{fffd} │ broken", "sent │ You", "bob │ bye"]
        );
    }
}
