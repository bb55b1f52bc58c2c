//! Benchmarks for switch state changes and painting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slideswitch_core::{Palette, RecordingCanvas, Size};
use slideswitch_widgets::SlideSwitch;
use std::time::Duration;

fn sized() -> SlideSwitch {
    let mut switch = SlideSwitch::new().thumb_text("On", "Off");
    switch.resize(Size::new(100.0, 40.0));
    switch
}

fn bench_full_slide(c: &mut Criterion) {
    let mut switch = sized();
    c.bench_function("slide_switch_click_and_settle", |b| {
        b.iter(|| {
            switch.click();
            while switch.tick(black_box(Duration::from_millis(16))) {}
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let switch = sized();
    let mut canvas = RecordingCanvas::new();
    c.bench_function("slide_switch_render", |b| {
        b.iter(|| {
            canvas.clear();
            switch.render(black_box(&mut canvas));
        })
    });
}

fn bench_set_palette(c: &mut Criterion) {
    let mut switch = sized();
    let palette = Palette::dark_scheme();
    c.bench_function("slide_switch_set_palette", |b| {
        b.iter(|| switch.set_palette(black_box(palette)))
    });
}

criterion_group!(benches, bench_full_slide, bench_render, bench_set_palette);
criterion_main!(benches);
