use bracket_overlay_engine::{
    BracketHighlightEvent, BracketHighlightInput, BracketPair, Elbow, Frame, HighlightStyle,
    Position, compute_bracket_highlight,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn inputs() -> Vec<BracketHighlightInput> {
    let origin = Position::new(320.0, 180.0);
    let opening = Frame::from_xywh(420.0, 240.0, 8.0, 14.0);
    let closing = Frame::from_xywh(360.0, 640.0, 8.0, 14.0);
    let elbow = Some(Elbow::new(Position::new(340.0, 640.0)));

    [
        (Some(opening), Some(opening.to_global(&Position::new(60.0, 0.0))), None),
        (Some(opening), Some(closing), elbow),
        (Some(opening), None, Some(Elbow::left_most(900.0))),
        (None, Some(closing), elbow),
        (None, None, None),
    ]
    .into_iter()
    .map(|(first, last, elbow)| BracketHighlightInput {
        brackets: BracketPair::new(first, last),
        reference_origin: origin,
        viewport_height: 720.0,
        elbow,
    })
    .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_bracket_highlight");
    let style = HighlightStyle::default();
    let inputs = inputs();

    group.bench_function("all_cases", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(compute_bracket_highlight(black_box(input), &style));
            }
        });
    });

    group.finish();
}

fn bench_event_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_parsing");
    let json = r#"{"first":{"origin":{"x":420,"y":240},"size":{"width":8,"height":14}},"last":{"origin":{"x":360,"y":640},"size":{"width":8,"height":14}},"reference_origin":{"x":320,"y":180},"viewport_height":720,"elbow":{"origin":{"x":340,"y":640},"origin_x_left_most":false,"bottom_line_top":false}}"#;

    group.bench_function("from_json_into_input", |b| {
        b.iter(|| {
            let input = BracketHighlightEvent::from_json(black_box(json))
                .and_then(BracketHighlightEvent::into_input)
                .unwrap();
            black_box(input);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute, bench_event_parsing);
criterion_main!(benches);
