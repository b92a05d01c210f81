use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ahkmap::keyboard::{LayoutMode, layout};
use ahkmap::label::place_labels;
use ahkmap::render::recording::RecordingSurface;
use ahkmap::render::{Metrics, Rect, render_overlay};
use ahkmap::script::{BindingMap, parse_str};

/// One hotkey per template key, three modifier variants each.
fn dense_script() -> String {
    let keys = [
        "Esc", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "1", "2", "3", "4", "5", "Tab",
        "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "a", "s", "d", "f", "g", "h", "j",
        "k", "l", "z", "x", "c", "v", "b", "n", "m", "Space",
    ];
    let mut out = String::new();
    for key in keys {
        for prefix in ["", "+", "^!"] {
            out.push_str(&format!("; Action {prefix}{key}\n{prefix}{key}::Send x\n"));
        }
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let script = dense_script();

    c.bench_function("parse_str (126 hotkeys)", |b| {
        b.iter(|| parse_str(black_box(&script)))
    });
}

fn bench_layout(c: &mut Criterion) {
    let bindings = parse_str(&dense_script());
    let rows = LayoutMode::Full.rows().unwrap();
    let view = Rect::new(208.0, 8.0, 984.0, 484.0);

    c.bench_function("layout full template", |b| {
        b.iter(|| layout(black_box(&rows), view, black_box(&bindings)))
    });
}

fn bench_placement(c: &mut Criterion) {
    let bindings = parse_str(&dense_script());
    let rows = LayoutMode::Full.rows().unwrap();
    let metrics = Metrics::default();
    let viewport = Rect::new(8.0, 8.0, 1384.0, 884.0);
    let keys = layout(&rows, viewport.inset_x(metrics.label_width), &bindings);

    c.bench_function("place_labels (126 labels)", |b| {
        b.iter(|| {
            place_labels(black_box(&keys), &bindings, viewport, &metrics, |t| {
                t.chars().count() as f32 * 7.0
            })
        })
    });
}

fn bench_overlay(c: &mut Criterion) {
    let metrics = Metrics::default();
    let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 1400.0, 900.0), 7.0);

    for (name, bindings) in [
        ("render_overlay empty", BindingMap::new()),
        ("render_overlay dense", parse_str(&dense_script())),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                render_overlay(
                    &mut surface,
                    black_box(&bindings),
                    LayoutMode::Full,
                    &metrics,
                    Some("Esc - exit"),
                )
            })
        });
    }
}

criterion_group!(benches, bench_parse, bench_layout, bench_placement, bench_overlay);
criterion_main!(benches);
