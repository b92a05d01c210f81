use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Extension ranked first among completion candidates.
pub const SCRIPT_EXTENSION: &str = "ahk";

const SCAN_BUDGET: usize = 1000;
const MAX_COMPLETIONS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Single-line path editor with shell-style tab completion.
pub struct LineInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
    completions: Vec<String>,
    completion_index: Option<usize>,
    /// True if the last directory scan failed.
    pub completion_error: bool,
}

/// Rank for completion ordering: directories, then scripts, then the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum EntryKind {
    Dir,
    Script,
    Other,
}

impl LineInput {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
            completions: Vec::new(),
            completion_index: None,
            completion_error: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// The entered path with a leading `~` expanded.
    pub fn path(&self) -> PathBuf {
        expand_tilde(self.text.trim())
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled rendering.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        match self.text[byte_offset..].chars().next() {
            Some(ch) => (
                &self.text[..byte_offset],
                Some(ch),
                &self.text[byte_offset + ch.len_utf8()..],
            ),
            None => (&self.text, None, ""),
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,
            KeyCode::Tab => {
                self.tab_complete(true);
                return InputResult::Continue;
            }
            KeyCode::BackTab => {
                self.tab_complete(false);
                return InputResult::Continue;
            }
            _ => {}
        }

        self.reset_completion();
        let len = self.text.chars().count();
        match key.code {
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len,
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = len,
            KeyCode::Char('u') if ctrl => {
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.remove_at_cursor();
            }
            KeyCode::Delete if self.cursor < len => self.remove_at_cursor(),
            KeyCode::Char(ch) if !ctrl => {
                let byte_offset = self.char_to_byte(self.cursor);
                self.text.insert(byte_offset, ch);
                self.cursor += 1;
            }
            _ => {}
        }
        InputResult::Continue
    }

    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn remove_at_cursor(&mut self) {
        let start = self.char_to_byte(self.cursor);
        let end = self.char_to_byte(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Unix word rubout: skip whitespace, then the word before it.
    fn delete_word_back(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        let start = self.char_to_byte(pos);
        let end = self.char_to_byte(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = pos;
    }

    fn reset_completion(&mut self) {
        self.completions.clear();
        self.completion_index = None;
        self.completion_error = false;
    }

    fn tab_complete(&mut self, forward: bool) {
        if self.cursor < self.text.chars().count() {
            return;
        }

        let next = match self.completion_index {
            None => {
                self.completions = self.build_completions();
                if self.completions.is_empty() {
                    return;
                }
                0
            }
            Some(idx) => {
                let count = self.completions.len();
                if forward {
                    (idx + 1) % count
                } else {
                    (idx + count - 1) % count
                }
            }
        };
        self.completion_index = Some(next);
        self.text = self.completions[next].clone();
        self.cursor = self.text.chars().count();
    }

    fn build_completions(&mut self) -> Vec<String> {
        // Accept both separators so typed paths work on any platform.
        let split = self.text.rfind(['/', '\\']);
        let (dir_str, partial) = match split {
            Some(pos) => (&self.text[..=pos], &self.text[pos + 1..]),
            None => ("", self.text.as_str()),
        };
        let scan_dir = if dir_str.is_empty() {
            PathBuf::from(".")
        } else {
            expand_tilde(dir_str)
        };

        let entries = match std::fs::read_dir(&scan_dir) {
            Ok(rd) => rd.map(|res| {
                res.map(|entry| {
                    let name = entry.file_name().to_string_lossy().to_string();
                    let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
                    (name, is_dir)
                })
            }),
            Err(err) => {
                tracing::debug!(dir = %scan_dir.display(), %err, "completion scan failed");
                self.completion_error = true;
                return Vec::new();
            }
        };

        let (dir_str, partial) = (dir_str.to_string(), partial.to_string());
        self.collect_completions(entries, &dir_str, &partial)
    }

    /// Filter and rank directory entries; split out so tests can feed
    /// synthetic entries.
    fn collect_completions(
        &mut self,
        entries: impl Iterator<Item = std::io::Result<(String, bool)>>,
        dir_str: &str,
        partial: &str,
    ) -> Vec<String> {
        let sep = std::path::MAIN_SEPARATOR;
        let include_hidden = partial.starts_with('.');

        let mut candidates: Vec<(EntryKind, String)> = Vec::new();
        for entry in entries.take(SCAN_BUDGET) {
            let Ok((name, is_dir)) = entry else {
                self.completion_error = true;
                return Vec::new();
            };
            if (!include_hidden && name.starts_with('.')) || !name.starts_with(partial) {
                continue;
            }
            let kind = if is_dir {
                EntryKind::Dir
            } else if is_script(&name) {
                EntryKind::Script
            } else {
                EntryKind::Other
            };
            let full = if is_dir {
                format!("{dir_str}{name}{sep}")
            } else {
                format!("{dir_str}{name}")
            };
            candidates.push((kind, full));
        }

        candidates.sort();
        candidates.truncate(MAX_COMPLETIONS);
        candidates.into_iter().map(|(_, path)| path).collect()
    }
}

fn is_script(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCRIPT_EXTENSION))
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            let rest = rest.trim_start_matches(['/', '\\']);
            return if rest.is_empty() { home } else { home.join(rest) };
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn ok_entries(names: &[(&str, bool)]) -> Vec<std::io::Result<(String, bool)>> {
        names.iter().map(|(n, d)| Ok((n.to_string(), *d))).collect()
    }

    #[test]
    fn insert_and_cursor_movement() {
        let mut input = LineInput::new("ac");
        input.handle(key(KeyCode::Char('d')));
        assert_eq!(input.value(), "acd");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Char('z')));
        assert_eq!(input.value(), "zacd");
        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "zabcd");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn backspace_and_delete_at_boundaries() {
        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Backspace));
        input.handle(key(KeyCode::Backspace));
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);

        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
        input.handle(key(KeyCode::End));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn multibyte_editing() {
        let mut input = LineInput::new("é/ü");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "é/");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "/");
    }

    #[test]
    fn ctrl_shortcuts() {
        let mut input = LineInput::new("scripts/ game.ahk");
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "scripts/ ");
        input.handle(ctrl('a'));
        assert_eq!(input.cursor, 0);
        input.handle(ctrl('e'));
        assert_eq!(input.cursor, 9);
        input.handle(ctrl('u'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn render_parts_split_at_cursor() {
        let mut input = LineInput::new("abc");
        assert_eq!(input.render_parts(), ("abc", None, ""));
        input.cursor = 1;
        assert_eq!(input.render_parts(), ("a", Some('b'), "c"));
    }

    #[test]
    fn submit_and_cancel() {
        assert_eq!(
            LineInput::new("x").handle(key(KeyCode::Enter)),
            InputResult::Submit
        );
        assert_eq!(
            LineInput::new("x").handle(key(KeyCode::Esc)),
            InputResult::Cancel
        );
    }

    #[test]
    fn scripts_ranked_after_dirs_before_other_files() {
        let mut input = LineInput::new("");
        let entries = ok_entries(&[
            ("notes.txt", false),
            ("game.AHK", false),
            ("macros", true),
            ("work.ahk", false),
        ]);
        let result = input.collect_completions(entries.into_iter(), "s/", "");
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            result,
            vec![
                format!("s/macros{sep}"),
                "s/game.AHK".to_string(),
                "s/work.ahk".to_string(),
                "s/notes.txt".to_string(),
            ]
        );
    }

    #[test]
    fn hidden_entries_need_dot_prefix() {
        let mut input = LineInput::new("");
        let entries = ok_entries(&[(".hidden.ahk", false), ("visible.ahk", false)]);
        let result = input.collect_completions(entries.into_iter(), "", "");
        assert_eq!(result, vec!["visible.ahk".to_string()]);

        let entries = ok_entries(&[(".hidden.ahk", false), ("visible.ahk", false)]);
        let result = input.collect_completions(entries.into_iter(), "", ".h");
        assert_eq!(result, vec![".hidden.ahk".to_string()]);
    }

    #[test]
    fn entry_error_aborts_completion() {
        let mut input = LineInput::new("");
        let entries: Vec<std::io::Result<(String, bool)>> = vec![
            Ok(("a.ahk".to_string(), false)),
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock")),
        ];
        assert!(input.collect_completions(entries.into_iter(), "", "").is_empty());
        assert!(input.completion_error);
    }

    #[test]
    fn candidate_cap() {
        let mut input = LineInput::new("");
        let entries: Vec<std::io::Result<(String, bool)>> = (0..200)
            .map(|i| Ok((format!("s_{i:03}.ahk"), false)))
            .collect();
        assert_eq!(
            input.collect_completions(entries.into_iter(), "", "").len(),
            100
        );
    }

    #[test]
    fn tab_cycles_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.ahk"), "").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let mut input = LineInput::new(&format!("{}/", dir.path().display()));

        input.handle(key(KeyCode::Tab));
        assert!(input.value().ends_with(&format!("sub{}", std::path::MAIN_SEPARATOR)));
        input.handle(key(KeyCode::Tab));
        assert!(input.value().ends_with("b.ahk"));
        input.handle(key(KeyCode::Tab));
        assert!(input.value().ends_with("a.txt"));
        input.handle(key(KeyCode::BackTab));
        assert!(input.value().ends_with("b.ahk"));

        // Editing ends the cycle.
        input.handle(key(KeyCode::Char('x')));
        assert!(input.completions.is_empty());
        assert!(input.value().ends_with("b.ahkx"));
    }

    #[test]
    fn tab_on_missing_dir_flags_error_until_next_edit() {
        let mut input = LineInput::new("/nonexistent_zzz_dir/");
        input.handle(key(KeyCode::Tab));
        assert!(input.completion_error);
        assert!(input.completion_index.is_none());
        input.handle(key(KeyCode::Left));
        assert!(!input.completion_error);
    }

    #[test]
    fn tab_mid_line_is_noop() {
        let mut input = LineInput::new("hello");
        input.handle(key(KeyCode::Home));
        assert_eq!(input.handle(key(KeyCode::Tab)), InputResult::Continue);
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("/tmp/a.ahk"), PathBuf::from("/tmp/a.ahk"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/x.ahk"), home.join("x.ahk"));
        }
    }
}
