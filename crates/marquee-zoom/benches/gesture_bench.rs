use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use marquee_core::{
    Buttons, Chart, InputEvent, Interaction, Point, PointerEvent, PointerId, PointerType, Rect,
};
use marquee_zoom::{SelectZoom, SelectZoomOptions};

fn pev(x: f32, y: f32) -> PointerEvent {
    PointerEvent {
        pointer_id: PointerId(1),
        pointer_type: PointerType::Mouse,
        buttons: Buttons::PRIMARY,
        position: Point::new(x, y),
    }
}

fn gen_drag(moves: usize) -> Vec<InputEvent> {
    let mut evs = Vec::with_capacity(moves + 2);
    evs.push(InputEvent::PointerDown(pev(10.0, 10.0)));
    for i in 0..moves {
        // sawtooth sweep across the surface
        let x = 10.0 + (i % 700) as f32;
        let y = 10.0 + (i % 380) as f32;
        evs.push(InputEvent::PointerMove(pev(x, y)));
    }
    evs.push(InputEvent::PointerUp(pev(700.0, 390.0)));
    evs
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_zoom");
    for &moves in &[1_000usize, 10_000usize] {
        let events = gen_drag(moves);
        group.bench_with_input(BenchmarkId::from_parameter(format!("moves{moves}")), &events, |b, evs| {
            b.iter_batched(
                || {
                    let mut chart =
                        Chart::new(Rect::from_ltwh(0.0, 0.0, 800.0, 400.0), (0.0, 100.0), (0.0, 1.0));
                    let zoom = SelectZoom::new(&mut chart, SelectZoomOptions::default());
                    (chart, zoom)
                },
                |(mut chart, mut zoom)| {
                    for ev in evs {
                        zoom.on_input(ev, &mut chart);
                    }
                    black_box(chart.x_scale.domain());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag_stream);
criterion_main!(benches);
