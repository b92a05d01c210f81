use std::fs;
use std::path::Path;

use ahkmap::keyboard::{LayoutMode, layout_template};
use ahkmap::label::{Side, place_labels};
use ahkmap::render::recording::RecordingSurface;
use ahkmap::render::{Ink, Metrics, Rect, render_overlay};
use ahkmap::script::{Modifiers, ScriptError, load};

const SAMPLE: &str = "samples/example.ahk";

fn sample_copy(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("example.ahk");
    fs::copy(SAMPLE, &path).unwrap();
    path
}

#[test]
fn sample_script_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let bindings = load(&sample_copy(dir.path())).unwrap();

    let keys: Vec<&str> = bindings.keys().collect();
    assert_eq!(
        keys,
        vec!["tab", "w", "a", "d", "s", "l", "m", "xbutton1", "esc"]
    );
    assert_eq!(bindings.binding_count(), 10);

    assert_eq!(bindings.get("tab").unwrap()[0].description, "Open inventory");
    let w = bindings.get("w").unwrap();
    assert_eq!(w[0].description, "Walk forward");
    assert_eq!(w[1].description, "Sprint");
    assert_eq!(
        w[1].modifiers,
        Modifiers {
            shift: true,
            ..Modifiers::NONE
        }
    );
    assert_eq!(bindings.get("d").unwrap()[0].description, "Strafe");
    assert_eq!(bindings.get("l").unwrap()[0].modifiers.code(), "CA");
    assert!(!bindings.contains_key("q"));
}

#[test]
fn sample_script_overlay_full_and_compact() {
    let dir = tempfile::tempdir().unwrap();
    let bindings = load(&sample_copy(dir.path())).unwrap();
    let metrics = Metrics::default();
    let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 1400.0, 600.0), 7.0);

    let frame =
        render_overlay(&mut surface, &bindings, LayoutMode::Full, &metrics, None).unwrap();
    // Every binding except the mouse button gets a label.
    assert_eq!(frame.labels.len(), 9);
    assert_eq!(surface.texts(Ink::Label).len(), 9);
    assert!(frame.labels.iter().all(|l| l.key != "xbutton1"));
    assert_eq!(surface.fills(Ink::KeyActive), 8);

    let frame =
        render_overlay(&mut surface, &bindings, LayoutMode::Compact, &metrics, None).unwrap();
    assert_eq!(frame.labels.len(), 7);
    assert!(frame.labels.iter().all(|l| l.key != "l" && l.key != "m"));
}

#[test]
fn sample_labels_do_not_share_slots() {
    let dir = tempfile::tempdir().unwrap();
    let bindings = load(&sample_copy(dir.path())).unwrap();
    let metrics = Metrics::default();
    let viewport = Rect::new(8.0, 8.0, 1384.0, 584.0);
    let layout = layout_template(
        LayoutMode::Full.template(),
        viewport.inset_x(metrics.label_width),
        &bindings,
    )
    .unwrap();
    let labels = place_labels(&layout, &bindings, viewport, &metrics, |t| {
        t.chars().count() as f32 * 7.0
    });

    for side in [Side::Left, Side::Right] {
        let mut ys: Vec<f32> = labels
            .iter()
            .filter(|l| l.side == side)
            .map(|l| l.origin.y)
            .collect();
        let before = ys.len();
        ys.sort_by(f32::total_cmp);
        ys.dedup();
        assert_eq!(ys.len(), before, "{side:?} labels collide");
    }
}

#[test]
fn unreadable_script_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.ahk");
    let err = load(&missing).unwrap_err();
    assert!(matches!(err, ScriptError::Open { .. }));
    assert!(err.to_string().contains("nope.ahk"));
}
