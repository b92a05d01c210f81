use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::render::Ink;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_dim: String,
    pub key_active: String,
    pub key_active_fg: String,
    pub key_idle: String,
    pub key_idle_fg: String,
    pub key_outline: String,
    pub label: String,
    pub connector: String,
    pub help_bg: String,
    pub help_fg: String,
    pub accent: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub error: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // User themes shadow bundled ones.
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("ahkmap")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => tracing::warn!(
                        path = %user_theme_path.display(),
                        %err,
                        "ignoring malformed user theme"
                    ),
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }

    pub fn ink(&self, ink: Ink) -> Color {
        let c = &self.colors;
        match ink {
            Ink::Background => c.bg(),
            Ink::KeyActive => c.key_active(),
            Ink::KeyActiveText => c.key_active_fg(),
            Ink::KeyIdle => c.key_idle(),
            Ink::KeyIdleText => c.key_idle_fg(),
            Ink::KeyOutline => c.key_outline(),
            Ink::Label => c.label(),
            Ink::Connector => c.connector(),
            Ink::HelpBar => c.help_bg(),
            Ink::HelpText => c.help_fg(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("default").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#000000".to_string(),
            fg: "#ffffff".to_string(),
            text_dim: "#808080".to_string(),
            key_active: "#ffff00".to_string(),
            key_active_fg: "#000000".to_string(),
            key_idle: "#202020".to_string(),
            key_idle_fg: "#ffffff".to_string(),
            key_outline: "#ffffff".to_string(),
            label: "#d3d3d3".to_string(),
            connector: "#32cd32".to_string(),
            help_bg: "#ffff00".to_string(),
            help_fg: "#000000".to_string(),
            accent: "#ffff00".to_string(),
            border: "#606060".to_string(),
            header_bg: "#202020".to_string(),
            header_fg: "#ffffff".to_string(),
            error: "#ff5555".to_string(),
            success: "#32cd32".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_dim(&self) -> Color { Self::parse_color(&self.text_dim) }
    pub fn key_active(&self) -> Color { Self::parse_color(&self.key_active) }
    pub fn key_active_fg(&self) -> Color { Self::parse_color(&self.key_active_fg) }
    pub fn key_idle(&self) -> Color { Self::parse_color(&self.key_idle) }
    pub fn key_idle_fg(&self) -> Color { Self::parse_color(&self.key_idle_fg) }
    pub fn key_outline(&self) -> Color { Self::parse_color(&self.key_outline) }
    pub fn label(&self) -> Color { Self::parse_color(&self.label) }
    pub fn connector(&self) -> Color { Self::parse_color(&self.connector) }
    pub fn help_bg(&self) -> Color { Self::parse_color(&self.help_bg) }
    pub fn help_fg(&self) -> Color { Self::parse_color(&self.help_fg) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}
