use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::keyboard::LayoutMode;
use crate::script::{self, BindingMap, ScriptError};
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Drawn by the overlay at the bottom of the keyboard.
pub const HELP_TEXT: &str = "Esc - exit | F11 - toggle chrome";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Keymap,
    OpenScript,
    About,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

pub struct App {
    pub screen: AppScreen,
    pub bindings: BindingMap,
    pub script_path: Option<PathBuf>,
    pub layout_mode: LayoutMode,
    pub show_chrome: bool,
    pub open_input: Option<LineInput>,
    pub status: Option<StatusMessage>,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        Self {
            screen: AppScreen::Keymap,
            bindings: BindingMap::new(),
            script_path: None,
            layout_mode: config.keyboard,
            show_chrome: true,
            open_input: None,
            status: None,
            theme,
            config,
            should_quit: false,
        }
    }

    /// Replace the current bindings with those of `path`.
    ///
    /// On failure nothing changes except the status message: the previous
    /// bindings, path and title stay in place.
    pub fn load_script(&mut self, path: &Path) -> Result<(), ScriptError> {
        match script::load(path) {
            Ok(bindings) => {
                tracing::info!(
                    path = %path.display(),
                    keys = bindings.len(),
                    bindings = bindings.binding_count(),
                    "script loaded"
                );
                self.status = Some(StatusMessage::info(format!(
                    "Loaded {}: {} hotkeys on {} keys",
                    display_name(path),
                    bindings.binding_count(),
                    bindings.len()
                )));
                self.bindings = bindings;
                self.script_path = Some(path.to_path_buf());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "script load failed");
                self.status = Some(StatusMessage::error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn reload(&mut self) {
        match self.script_path.clone() {
            Some(path) => {
                // The status line already reports failures.
                let _ = self.load_script(&path);
            }
            None => self.status = Some(StatusMessage::error("No script loaded")),
        }
    }

    pub fn toggle_layout(&mut self) {
        self.layout_mode = self.layout_mode.toggled();
        tracing::debug!(mode = self.layout_mode.as_str(), "keyboard layout toggled");
    }

    pub fn toggle_chrome(&mut self) {
        self.show_chrome = !self.show_chrome;
    }

    /// Show the path prompt, prefilled with the current script's directory.
    pub fn open_prompt(&mut self) {
        let initial = self
            .script_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| format!("{}{}", dir.display(), std::path::MAIN_SEPARATOR))
            .unwrap_or_default();
        self.open_input = Some(LineInput::new(&initial));
        self.screen = AppScreen::OpenScript;
    }

    pub fn submit_prompt(&mut self) {
        let Some(input) = self.open_input.take() else {
            self.screen = AppScreen::Keymap;
            return;
        };
        self.screen = AppScreen::Keymap;
        if input.value().trim().is_empty() {
            return;
        }
        let _ = self.load_script(&input.path());
    }

    pub fn cancel_prompt(&mut self) {
        self.open_input = None;
        self.screen = AppScreen::Keymap;
    }

    pub fn show_about(&mut self) {
        self.screen = AppScreen::About;
    }

    pub fn close_about(&mut self) {
        self.screen = AppScreen::Keymap;
    }

    /// File name of the loaded script, for the header.
    pub fn title(&self) -> String {
        self.script_path
            .as_deref()
            .map(display_name)
            .unwrap_or_else(|| "no script".to_string())
    }

    /// Copy session state worth keeping into the config.
    pub fn sync_config(&mut self) {
        self.config.keyboard = self.layout_mode;
        if let Some(path) = &self.script_path {
            self.config.last_script = Some(path.canonicalize().unwrap_or_else(|_| path.clone()));
        }
    }

    pub fn save_config(&mut self) {
        self.sync_config();
        if let Err(err) = self.config.save() {
            tracing::warn!(%err, "could not save config");
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
