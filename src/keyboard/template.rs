use serde::{Deserialize, Serialize};
use thiserror::Error;

const ROW_SEPARATOR: char = '\\';
const KEY_OPEN: char = '{';
const KEY_CLOSE: char = '}';

/// Full-size keyboard: function row, number row, three letter rows and the
/// bottom modifier row.
pub const FULL_TEMPLATE: &str = concat!(
    "1{Esc}1{}1{F1}1{F2}1{F3}1{F4}1{}1{F5}1{F6}1{F7}1{F8}1{}1{F9}1{F10}1{F11}1{F12}\\",
    "1.5{~}1{1}1{2}1{3}1{4}1{5}1{6}1{7}1{8}1{9}1{0}1{-}1{=}2.5{Bkspc}\\",
    "2{Tab}1{Q}1{W}1{E}1{R}1{T}1{Y}1{U}1{I}1{O}1{P}1{[}1{]}2{Bkslsh}\\",
    "2.5{CapsLock}1{A}1{S}1{D}1{F}1{G}1{H}1{J}1{K}1{L}1{;}1{'}2.5{Enter}\\",
    "3{Shift}1{Z}1{X}1{C}1{V}1{B}1{N}1{M}1{,}1{.}1{/}3{Shift}\\",
    "1.5{Ctrl}1.5{Win}1.5{Alt}6{Space}1.5{Alt}1.5{Fn}1{Ctx}1.5{Ctrl}",
);

/// Left-hand block only, for gaming-style scripts.
pub const COMPACT_TEMPLATE: &str = concat!(
    "1{Esc}1{}1{F1}1{F2}1{F3}1{F4}\\",
    "1.5{~}1{1}1{2}1{3}1{4}1{5}\\",
    "2{Tab}1{Q}1{W}1{E}1{R}1{T}\\",
    "2.5{CapsLock}1{A}1{S}1{D}1{F}1{G}\\",
    "3{Shift}1{Z}1{X}1{C}1{V}1{B}\\",
    "1.5{Ctrl}1.5{Win}1.5{Alt}3.5{Space}",
);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Full,
    Compact,
}

impl LayoutMode {
    pub fn template(self) -> &'static str {
        match self {
            LayoutMode::Full => FULL_TEMPLATE,
            LayoutMode::Compact => COMPACT_TEMPLATE,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Full => LayoutMode::Compact,
            LayoutMode::Compact => LayoutMode::Full,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Full => "full",
            LayoutMode::Compact => "compact",
        }
    }

    pub fn rows(self) -> Result<Vec<Row>, TemplateError> {
        parse_template(self.template())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("row {row}: invalid key width {token:?}")]
    BadWidth { row: usize, token: String },
    #[error("keyboard template has no keys")]
    Empty,
}

/// One `<width>{<label>}` token. An empty label is a spacer.
#[derive(Clone, Debug, PartialEq)]
pub struct KeySpec {
    pub width: f32,
    pub label: String,
}

impl KeySpec {
    pub fn is_spacer(&self) -> bool {
        self.label.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub keys: Vec<KeySpec>,
}

impl Row {
    /// Width in key units, spacers included.
    pub fn width(&self) -> f32 {
        self.keys.iter().map(|k| k.width).sum()
    }
}

/// Parse a backslash-separated template into rows of key specs.
///
/// Fragments without an opening brace (such as the empty tail after the last
/// `}`) are skipped. Widths must be positive finite numbers.
pub fn parse_template(template: &str) -> Result<Vec<Row>, TemplateError> {
    let mut rows = Vec::new();
    for (row_idx, row_str) in template.split(ROW_SEPARATOR).enumerate() {
        let mut row = Row::default();
        for token in row_str.split(KEY_CLOSE) {
            let Some(delim) = token.find(KEY_OPEN) else {
                continue;
            };
            let width_str = token[..delim].trim();
            let width: f32 = width_str.parse().map_err(|_| TemplateError::BadWidth {
                row: row_idx,
                token: token.to_string(),
            })?;
            if !width.is_finite() || width <= 0.0 {
                return Err(TemplateError::BadWidth {
                    row: row_idx,
                    token: token.to_string(),
                });
            }
            row.keys.push(KeySpec {
                width,
                label: token[delim + KEY_OPEN.len_utf8()..].to_string(),
            });
        }
        rows.push(row);
    }

    if rows.iter().all(|r| r.keys.is_empty()) {
        return Err(TemplateError::Empty);
    }
    Ok(rows)
}
