// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: line chart with drag-select zoom, CPU blit via winit + softbuffer.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use marquee_core::theme;
use marquee_core::{
    Buttons, Chart, Color, InputEvent, InteractionSet, Key, KeyEvent, Point, PointerEvent,
    PointerId, PointerType, Rect, Theme,
};
use marquee_zoom::{SelectZoom, SelectZoomOptions};
use winit::dpi::PhysicalSize;
use winit::event::{
    ElementState, Event, MouseButton, Touch, TouchPhase, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const MOUSE_POINTER: PointerId = PointerId(0);

// Plot insets inside the window, in px.
const INSET_LEFT: f32 = 48.0;
const INSET_RIGHT: f32 = 16.0;
const INSET_TOP: f32 = 16.0;
const INSET_BOTTOM: f32 = 32.0;

fn main() -> Result<()> {
    env_logger::init();

    // Arg: CSV path with time,value columns; without one we synthesize a waveform.
    let points = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let pts = load_xy_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            anyhow::ensure!(!pts.is_empty(), "no points loaded, check headers/delimiter");
            pts
        }
        None => gen_waveform(2_000),
    };
    log::info!("plotting {} points", points.len());

    let (x_domain, y_domain) = data_extents(&points);
    let theme = theme::find(&std::env::var("MARQUEE_THEME").unwrap_or_default());

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Marquee Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut chart = Chart::new(plot_bounds(size), x_domain, y_domain);
    let mut interactions = InteractionSet::new();
    interactions.register(Box::new(SelectZoom::new(
        &mut chart,
        SelectZoomOptions::default().with_style(theme.selection),
    )));

    let mut cursor = Point::new(0.0, 0.0);
    let mut mouse_buttons = Buttons::NONE;
    window.set_title(&title_for(&chart));

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    interactions.dispose();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    chart.resize(plot_bounds(size));
                    chart.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Point::new(position.x as f32, position.y as f32);
                    interactions.dispatch(
                        &InputEvent::PointerMove(mouse_event(mouse_buttons, cursor)),
                        &mut chart,
                    );
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let Some(bit) = button_bit(button) else { return };
                    match state {
                        ElementState::Pressed => {
                            mouse_buttons.insert(bit);
                            // Only presses inside the plot start anything.
                            if chart.surface.bounds().contains(cursor) {
                                interactions.dispatch(
                                    &InputEvent::PointerDown(mouse_event(mouse_buttons, cursor)),
                                    &mut chart,
                                );
                            }
                        }
                        ElementState::Released => {
                            mouse_buttons.remove(bit);
                            interactions.dispatch(
                                &InputEvent::PointerUp(mouse_event(mouse_buttons, cursor)),
                                &mut chart,
                            );
                        }
                    }
                }
                WindowEvent::Touch(Touch { phase, location, id, .. }) => {
                    let ev = PointerEvent {
                        // Pointer 0 belongs to the mouse.
                        pointer_id: PointerId(id + 1),
                        pointer_type: PointerType::Touch,
                        buttons: Buttons::NONE,
                        position: Point::new(location.x as f32, location.y as f32),
                    };
                    let input = match phase {
                        TouchPhase::Started => {
                            if !chart.surface.bounds().contains(ev.position) {
                                return;
                            }
                            InputEvent::PointerDown(ev)
                        }
                        TouchPhase::Moved => InputEvent::PointerMove(ev),
                        TouchPhase::Ended => InputEvent::PointerUp(ev),
                        TouchPhase::Cancelled => InputEvent::PointerCancel(ev),
                    };
                    interactions.dispatch(&input, &mut chart);
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::Escape) => {
                            interactions.dispatch(
                                &InputEvent::KeyDown(KeyEvent { key: Key::Escape }),
                                &mut chart,
                            );
                        }
                        Some(VirtualKeyCode::R) => {
                            // Snap the view back to the data extents. The
                            // overrides hold until a zoom clears them.
                            chart.options.x_range = Some(x_domain);
                            chart.options.y_range = Some(y_domain);
                            chart.request_redraw();
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                chart.apply_range_overrides();
                // The model asks for a redraw exactly when a zoom or reset
                // landed; piggyback the title refresh on that.
                if chart.take_redraw_request() {
                    window.set_title(&title_for(&chart));
                }
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();
                let mut frame = surface.buffer_mut().expect("frame");
                draw_frame(&mut frame, w as usize, h as usize, &chart, &points, &theme);
                if let Err(e) = frame.present() {
                    log::error!("present error: {e:?}");
                }
            }
            _ => {}
        }
    })
}

fn plot_bounds(size: PhysicalSize<u32>) -> Rect {
    let w = (size.width as f32 - INSET_LEFT - INSET_RIGHT).max(1.0);
    let h = (size.height as f32 - INSET_TOP - INSET_BOTTOM).max(1.0);
    Rect::from_ltwh(INSET_LEFT, INSET_TOP, w, h)
}

fn mouse_event(buttons: Buttons, position: Point) -> PointerEvent {
    PointerEvent {
        pointer_id: MOUSE_POINTER,
        pointer_type: PointerType::Mouse,
        buttons,
        position,
    }
}

fn button_bit(button: MouseButton) -> Option<Buttons> {
    match button {
        MouseButton::Left => Some(Buttons::PRIMARY),
        MouseButton::Right => Some(Buttons::SECONDARY),
        MouseButton::Middle => Some(Buttons::AUXILIARY),
        MouseButton::Other(_) => None,
    }
}

fn title_for(chart: &Chart) -> String {
    let (lo, hi) = chart.x_scale.domain();
    format!(
        "Marquee Demo — drag to zoom, Esc cancels, R resets — {} .. {}",
        format_x(lo),
        format_x(hi)
    )
}

fn format_x(v: f64) -> String {
    if looks_like_epoch(v) {
        if let Some(dt) = chrono::DateTime::from_timestamp(v as i64, 0) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    format!("{v:.2}")
}

/// Plausible unix-seconds timestamps; millis land above the upper bound.
fn looks_like_epoch(v: f64) -> bool {
    (1e9..1e12).contains(&v)
}

// --- rendering ---------------------------------------------------------

fn draw_frame(
    frame: &mut [u32],
    w: usize,
    h: usize,
    chart: &Chart,
    points: &[(f64, f64)],
    theme: &Theme,
) {
    fill_rect(frame, w, h, Rect::from_ltwh(0.0, 0.0, w as f32, h as f32), theme.background, 1.0);

    let bounds = chart.surface.bounds();
    draw_grid(frame, w, h, bounds, theme.grid);
    draw_series(frame, w, h, chart, points, theme.series_line);

    // Overlay rects are surface-local; offset them into window space.
    for rect in chart.overlay.iter() {
        let Some(r) = rect.resolve(bounds.width, bounds.height) else { continue };
        let r = Rect::from_ltwh(bounds.left + r.left, bounds.top + r.top, r.width, r.height);
        fill_rect(frame, w, h, r, rect.style.fill, rect.style.opacity);
        stroke_rect(frame, w, h, r, rect.style.stroke, rect.style.opacity);
    }
}

fn draw_grid(frame: &mut [u32], w: usize, h: usize, bounds: Rect, color: Color) {
    let step = 64.0;
    let mut x = bounds.left;
    while x <= bounds.right() {
        fill_rect(frame, w, h, Rect::from_ltwh(x, bounds.top, 1.0, bounds.height), color, 1.0);
        x += step;
    }
    let mut y = bounds.top;
    while y <= bounds.bottom() {
        fill_rect(frame, w, h, Rect::from_ltwh(bounds.left, y, bounds.width, 1.0), color, 1.0);
        y += step;
    }
}

fn draw_series(
    frame: &mut [u32],
    w: usize,
    h: usize,
    chart: &Chart,
    points: &[(f64, f64)],
    color: Color,
) {
    let bounds = chart.surface.bounds();
    let cols = bounds.width.max(0.0) as usize;
    let mut prev: Option<f32> = None;
    for c in 0..cols {
        let x = chart.x_scale.from_px(c as f32);
        let Some(y) = sample_series(points, x) else {
            prev = None;
            continue;
        };
        let py = chart.y_scale.to_px(y);
        // Connect to the previous column so steep segments stay solid.
        let (lo, hi) = match prev {
            Some(p) => (p.min(py), p.max(py)),
            None => (py, py),
        };
        prev = Some(py);
        let lo = lo.max(0.0);
        let hi = hi.min(bounds.height - 1.0);
        if lo > hi {
            continue;
        }
        let col = bounds.left as usize + c;
        if col >= w {
            break;
        }
        for row in lo as usize..=hi as usize {
            let wy = bounds.top as usize + row;
            if wy < h {
                frame[wy * w + col] = color.0;
            }
        }
    }
}

/// Linear interpolation over time-sorted points; `None` outside the data.
fn sample_series(points: &[(f64, f64)], x: f64) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let i = points.partition_point(|p| p.0 < x);
    if i == 0 {
        return (points[0].0 == x).then(|| points[0].1);
    }
    if i == points.len() {
        return None;
    }
    let (x0, y0) = points[i - 1];
    let (x1, y1) = points[i];
    if x1 == x0 {
        return Some(y1);
    }
    Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
}

fn fill_rect(frame: &mut [u32], w: usize, h: usize, r: Rect, color: Color, alpha: f32) {
    let x0 = r.left.max(0.0) as usize;
    let y0 = r.top.max(0.0) as usize;
    let x1 = r.right().min(w as f32).max(0.0) as usize;
    let y1 = r.bottom().min(h as f32).max(0.0) as usize;
    for y in y0..y1 {
        for x in x0..x1 {
            let i = y * w + x;
            frame[i] = blend(frame[i], color, alpha);
        }
    }
}

fn stroke_rect(frame: &mut [u32], w: usize, h: usize, r: Rect, color: Color, alpha: f32) {
    // Hairline border regardless of the styled width.
    let edges = [
        Rect::from_ltwh(r.left, r.top, r.width, 1.0),
        Rect::from_ltwh(r.left, r.bottom() - 1.0, r.width, 1.0),
        Rect::from_ltwh(r.left, r.top, 1.0, r.height),
        Rect::from_ltwh(r.right() - 1.0, r.top, 1.0, r.height),
    ];
    for edge in edges {
        fill_rect(frame, w, h, edge, color, alpha);
    }
}

fn blend(dst: u32, src: Color, alpha: f32) -> u32 {
    let a = alpha.clamp(0.0, 1.0);
    let ch = |shift: u32, s: u8| -> u32 {
        let d = ((dst >> shift) & 0xFF) as f32;
        let m = d + (s as f32 - d) * a;
        ((m as u32) & 0xFF) << shift
    };
    0xFF00_0000 | ch(16, src.r()) | ch(8, src.g()) | ch(0, src.b())
}

// --- data loading ------------------------------------------------------

fn gen_waveform(n: usize) -> Vec<(f64, f64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // waveform with drift, busy enough to make zooming worthwhile
        let y = (i as f64 * 0.02).sin() * 10.0 + (i as f64 * 0.11).sin() + i as f64 * 0.004;
        v.push((i as f64, y));
    }
    v
}

fn data_extents(points: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return ((0.0, 1.0), (0.0, 1.0));
    }
    // small vertical margin
    let ym = (y_max - y_min).abs().max(1e-9) * 0.05;
    ((x_min, x_max), (y_min - ym, y_max + ym))
}

fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr
        .headers()?
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect::<Vec<_>>();
    let find = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|name| names.contains(&name.as_str()))
    };
    let i_time = find(&["time", "timestamp", "open_time", "date", "t", "x"]);
    let i_value = find(&["value", "close", "price", "y", "v"])
        .or_else(|| (headers.len() > 1).then_some(1));
    let Some(i_value) = i_value else {
        anyhow::bail!("no value column found");
    };

    let mut out = Vec::new();
    let mut row_index = 0_f64;
    for rec in rdr.records() {
        let rec = rec?;
        let t = match i_time.and_then(|ix| rec.get(ix)).and_then(parse_time_to_f64) {
            Some(t) => t,
            None => row_index,
        };
        row_index += 1.0;
        let Some(v) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) else {
            continue;
        };
        out.push((t, v));
    }
    out.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(out)
}

fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch millis vs seconds
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0);
        }
        return Some(n as f64);
    }
    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp() as f64);
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp() as f64);
    }
    None
}
