mod app;
mod config;
mod event;
mod keyboard;
mod label;
mod logging;
mod render;
mod script;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::widgets::Block;

use app::{App, AppScreen, HELP_TEXT};
use config::Config;
use event::{AppEvent, EventHandler};
use keyboard::LayoutMode;
use ui::components::about::About;
use ui::components::keymap_view::KeymapView;
use ui::components::open_prompt::OpenPrompt;
use ui::components::status_bar::{Footer, Header};
use ui::layout::{AppLayout, centered_rect};
use ui::line_input::InputResult;
use ui::theme::Theme;

#[derive(Parser)]
#[command(name = "ahkmap", version, about = "On-screen keyboard map of AutoHotkey script hotkeys")]
struct Cli {
    #[arg(help = "AutoHotkey script to display; hides the header and footer")]
    script: Option<PathBuf>,

    #[arg(short, long, help = "Start with the compact keyboard")]
    compact: bool,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config unreadable, using defaults");
        Config::default()
    });
    let mut app = App::new(config);

    if cli.compact {
        app.layout_mode = LayoutMode::Compact;
    }
    if let Some(theme_name) = cli.theme {
        match Theme::load(&theme_name) {
            Some(theme) => app.theme = Box::leak(Box::new(theme)),
            None => {
                let available = Theme::available_themes().join(", ");
                tracing::warn!(theme = %theme_name, "unknown theme");
                eprintln!("Unknown theme '{theme_name}' (available: {available})");
            }
        }
    }

    if let Some(path) = cli.script {
        if app.load_script(&path).is_ok() {
            app.show_chrome = false;
        }
    } else if let Some(path) = app.config.startup_script().map(|p| p.to_path_buf()) {
        let _ = app.load_script(&path);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new();

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.save_config();

    if let Err(err) = result {
        tracing::error!(%err, "event loop failed");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Keymap => handle_keymap_key(app, key),
        AppScreen::OpenScript => handle_prompt_key(app, key),
        AppScreen::About => app.close_about(),
    }
}

fn handle_keymap_key(app: &mut App, key: KeyEvent) {
    app.status = None;
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::F(11) => app.toggle_chrome(),
        KeyCode::Char('o') => app.open_prompt(),
        KeyCode::Char('k') => app.toggle_layout(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('?') => app.show_about(),
        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    let Some(input) = app.open_input.as_mut() else {
        app.cancel_prompt();
        return;
    };
    match input.handle(key) {
        InputResult::Continue => {}
        InputResult::Submit => app.submit_prompt(),
        InputResult::Cancel => app.cancel_prompt(),
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area, app.show_chrome);

    if let Some(header) = layout.header {
        frame.render_widget(
            Header {
                title: &app.title(),
                keys: app.bindings.len(),
                bindings: app.bindings.binding_count(),
                mode: app.layout_mode,
                theme: app.theme,
            },
            header,
        );
    }

    frame.render_widget(
        KeymapView::new(&app.bindings, app.layout_mode, app.theme)
            .label_width(app.config.label_width)
            .help(HELP_TEXT),
        layout.main,
    );

    if let Some(footer) = layout.footer {
        frame.render_widget(
            Footer {
                status: app.status.as_ref(),
                theme: app.theme,
            },
            footer,
        );
    }

    match app.screen {
        AppScreen::Keymap => {}
        AppScreen::OpenScript => {
            if let Some(input) = &app.open_input {
                frame.render_widget(OpenPrompt::new(input, app.theme), centered_rect(60, 20, area));
            }
        }
        AppScreen::About => frame.render_widget(About::new(app.theme), centered_rect(40, 20, area)),
    }
}
