use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::script::binding::{Binding, BindingMap, Modifiers};

const BLOCK_COMMENT_OPEN: &str = "/*";
const BLOCK_COMMENT_CLOSE: &str = "*/";
const LINE_COMMENT: char = ';';
const HOTKEY_DELIMITER: &str = "::";
const COMMENT_TRIM: &[char] = &[';', ' ', '\t', '>', '-', '<'];
const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("cannot open script {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a script from disk and extract its hotkeys.
///
/// Either the whole file is read and parsed or an error is returned; there is
/// no partial result. Invalid UTF-8 is replaced rather than rejected.
pub fn load(path: &Path) -> Result<BindingMap, ScriptError> {
    let file = File::open(path).map_err(|source| ScriptError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let bindings = parse_reader(file).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        keys = bindings.len(),
        bindings = bindings.binding_count(),
        "parsed script"
    );
    Ok(bindings)
}

/// Drain `reader` and parse what it yielded. A leading byte order mark is
/// skipped.
pub fn parse_reader<R: Read>(mut reader: R) -> std::io::Result<BindingMap> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_str(text.trim_start_matches(UTF8_BOM)))
}

/// Extract hotkey bindings from script text.
///
/// Only the left-hand side of `lhs::body` lines is interpreted. The most
/// recent `;` comment becomes the description of every following hotkey until
/// another comment replaces it.
pub fn parse_str(text: &str) -> BindingMap {
    let mut bindings = BindingMap::new();
    let mut last_comment = String::new();
    let mut in_block_comment = false;

    // A bare `\r` also ends a line. The empty piece inside `\r\n` is a blank
    // line and is ignored like any other.
    for raw in text.split(['\r', '\n']) {
        let line = raw.trim();

        if in_block_comment {
            // The closing line is skipped in full, even if text follows `*/`.
            if line.contains(BLOCK_COMMENT_CLOSE) {
                in_block_comment = false;
            }
            continue;
        }

        if line.starts_with(BLOCK_COMMENT_OPEN) {
            in_block_comment = true;
            continue;
        }

        if line.starts_with(LINE_COMMENT) {
            last_comment = line.trim_matches(COMMENT_TRIM).to_string();
            continue;
        }

        let Some(pos) = line.find(HOTKEY_DELIMITER) else {
            continue;
        };

        let (key, modifiers) = parse_hotkey(&line[..pos]);
        bindings.push(Binding::new(&key, modifiers, &last_comment));
    }

    bindings
}

/// Split a hotkey like `^!F1` into its key name and modifier flags.
fn parse_hotkey(spec: &str) -> (String, Modifiers) {
    let mut modifiers = Modifiers::NONE;
    let mut key = String::with_capacity(spec.len());
    for ch in spec.chars() {
        match ch {
            '!' => modifiers.alt = true,
            '+' => modifiers.shift = true,
            '^' => modifiers.ctrl = true,
            // Hook prefix, no visual meaning.
            '$' => {}
            other => key.push(other),
        }
    }
    (key, modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_becomes_description() {
        let map = parse_str("; Jump to menu\n^!F1::DoSomething\n");
        let f1 = map.get("f1").unwrap();
        assert_eq!(f1.len(), 1);
        assert_eq!(
            f1[0].modifiers,
            Modifiers {
                alt: true,
                shift: false,
                ctrl: true
            }
        );
        assert_eq!(f1[0].description, "Jump to menu");
        assert_eq!(f1[0].key, "f1");
    }

    #[test]
    fn test_dollar_prefix_is_ignored() {
        let map = parse_str("$a::Foo");
        let a = map.get("a").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].modifiers, Modifiers::NONE);
        assert_eq!(a[0].description, "");
    }

    #[test]
    fn test_block_comment_suppresses_bindings() {
        let text = "\
/* disabled
a::one
b::two
*/ c::three
d::four
";
        let map = parse_str(text);
        assert!(!map.contains_key("a"));
        assert!(!map.contains_key("b"));
        assert!(!map.contains_key("c"));
        assert!(map.contains_key("d"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_block_comment_open_line_with_close_still_opens() {
        // The opener line is not inspected for a terminator.
        let map = parse_str("/* note */\nx::skipped\n*/\ny::kept");
        assert!(!map.contains_key("x"));
        assert!(map.contains_key("y"));
    }

    #[test]
    fn test_comment_decorations_are_trimmed() {
        let map = parse_str(";;  --> Open the map <--\t\nm::Run map");
        assert_eq!(map.get("m").unwrap()[0].description, "Open the map");
    }

    #[test]
    fn test_comment_persists_across_hotkeys() {
        let map = parse_str("; Shared\na::x\nb::y\n; Other\nc::z");
        assert_eq!(map.get("a").unwrap()[0].description, "Shared");
        assert_eq!(map.get("b").unwrap()[0].description, "Shared");
        assert_eq!(map.get("c").unwrap()[0].description, "Other");
    }

    #[test]
    fn test_same_key_different_modifiers_in_file_order() {
        let map = parse_str("; first\n^q::a\n; second\n+Q::b");
        let q = map.get("q").unwrap();
        assert_eq!(q.len(), 2);
        assert!(q[0].modifiers.ctrl && !q[0].modifiers.shift);
        assert!(q[1].modifiers.shift && !q[1].modifiers.ctrl);
        assert_eq!(q[0].description, "first");
        assert_eq!(q[1].description, "second");
    }

    #[test]
    fn test_modifier_only_hotkey_gives_empty_key() {
        let map = parse_str("^!::Send x");
        let empty = map.get("").unwrap();
        assert_eq!(empty.len(), 1);
        assert!(empty[0].modifiers.ctrl && empty[0].modifiers.alt);
    }

    #[test]
    fn test_non_binding_lines_ignored() {
        let text = "#NoEnv\nSendMode Input\n\n   \nreturn\nMsgBox, hi";
        assert!(parse_str(text).is_empty());
    }

    #[test]
    fn test_body_not_required_and_whitespace_trimmed() {
        let map = parse_str("   Numpad1::   \r\n");
        assert!(map.contains_key("numpad1"));
    }

    #[test]
    fn test_keys_in_first_appearance_order() {
        let map = parse_str("z::1\na::2\nz::3\nm::4");
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "; x\n^a::1\n/*\nb::2\n*/\n+b::3\n; y\n!c::4";
        assert_eq!(parse_str(text), parse_str(text));
    }

    #[test]
    fn test_load_missing_file_is_open_error() {
        let err = load(Path::new("/definitely/not/here.ahk")).unwrap_err();
        assert!(matches!(err, ScriptError::Open { .. }));
    }

    #[test]
    fn test_reader_strips_bom_and_replaces_invalid_utf8() {
        let mut bytes = "\u{feff}; Fire\n".as_bytes().to_vec();
        bytes.extend_from_slice(b"F\xff::Send x\nf::y\n");
        let bindings = parse_reader(bytes.as_slice()).unwrap();
        assert_eq!(bindings.get("f").unwrap()[0].description, "Fire");
        assert_eq!(bindings.get("f\u{fffd}").unwrap()[0].description, "Fire");
    }

    #[test]
    fn test_cr_only_line_endings() {
        let bindings = parse_str("; Walk\rw::Send w\r; Jump\rspace::x\r");
        let keys: Vec<&str> = bindings.keys().collect();
        assert_eq!(keys, vec!["w", "space"]);
        assert_eq!(bindings.get("w").unwrap()[0].description, "Walk");
        assert_eq!(bindings.get("space").unwrap()[0].description, "Jump");
    }

    #[test]
    fn test_mixed_line_endings_keep_block_comments() {
        let text = "; a\r\n/*\rq::x\r\n*/\nw::y\r";
        let bindings = parse_str(text);
        assert!(!bindings.contains_key("q"));
        assert_eq!(bindings.get("w").unwrap()[0].description, "a");
    }
}
