//! Chart Components
//!
//! Bar, area, line and pie charts drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use dinedash::Palette;

use crate::state::global::GlobalState;

/// One named series over the chart's categories
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: String,
}

impl Series {
    pub fn new(label: &str, values: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.to_string(),
            values,
            color: color.to_string(),
        }
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bar,
    Line,
    Area,
}

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;
const GRID_LINES: usize = 5;

/// Round a maximum up to 1, 2 or 5 times a power of ten
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Canvas y for a value; y grows downward
pub fn scale_y(value: f64, max: f64, top: f64, height: f64) -> f64 {
    top + height - (value / max).clamp(0.0, 1.0) * height
}

/// Axis label for large values, e.g. 150000 -> "150K"
pub fn axis_label(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Start/end angles (radians, from 12 o'clock) for each slice
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let start = -std::f64::consts::FRAC_PI_2;
    let mut angle = start;
    values
        .iter()
        .map(|value| {
            let sweep = value.max(0.0) / total * std::f64::consts::TAU;
            let slice = (angle, angle + sweep);
            angle += sweep;
            slice
        })
        .collect()
}

fn context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_xy(
    canvas: &HtmlCanvasElement,
    categories: &[String],
    series: &[Series],
    style: Style,
    palette: &Palette,
) {
    let Some(ctx) = context(canvas) else {
        return;
    };

    let chart_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&palette.paper.into());
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    if categories.is_empty() || series.is_empty() {
        ctx.set_fill_style(&palette.text_secondary.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for the selected filters", WIDTH / 2.0 - 110.0, HEIGHT / 2.0);
        return;
    }

    let max = nice_max(
        series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max),
    );

    // Grid and y-axis labels
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=GRID_LINES {
        let value = max * (GRID_LINES - i) as f64 / GRID_LINES as f64;
        let y = scale_y(value, max, MARGIN_TOP, chart_height);
        ctx.set_stroke_style(&"rgba(128,128,128,0.25)".into());
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(WIDTH - MARGIN_RIGHT, y);
        ctx.stroke();
        ctx.set_fill_style(&palette.text_secondary.into());
        let _ = ctx.fill_text(&axis_label(value), 5.0, y + 4.0);
    }

    let slot = chart_width / categories.len() as f64;
    let x_center = |i: usize| MARGIN_LEFT + slot * (i as f64 + 0.5);

    for (i, category) in categories.iter().enumerate() {
        ctx.set_fill_style(&palette.text_secondary.into());
        let _ = ctx.fill_text(category, x_center(i) - 4.0 * category.len() as f64 / 1.5, HEIGHT - 15.0);
    }

    let baseline = MARGIN_TOP + chart_height;
    let bar_width = slot * 0.7 / series.len() as f64;

    for (s_idx, s) in series.iter().enumerate() {
        let color = s.color.as_str();
        match style {
            Style::Bar => {
                ctx.set_fill_style(&color.into());
                for (i, value) in s.values.iter().enumerate() {
                    let x = MARGIN_LEFT + slot * i as f64 + slot * 0.15 + bar_width * s_idx as f64;
                    let y = scale_y(*value, max, MARGIN_TOP, chart_height);
                    ctx.fill_rect(x, y, bar_width - 2.0, baseline - y);
                }
            }
            Style::Line | Style::Area => {
                let points: Vec<(f64, f64)> = s
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| (x_center(i), scale_y(*value, max, MARGIN_TOP, chart_height)))
                    .collect();

                if style == Style::Area {
                    if let (Some(first), Some(last)) = (points.first(), points.last()) {
                        ctx.set_global_alpha(0.25);
                        ctx.set_fill_style(&color.into());
                        ctx.begin_path();
                        ctx.move_to(first.0, baseline);
                        for (x, y) in &points {
                            ctx.line_to(*x, *y);
                        }
                        ctx.line_to(last.0, baseline);
                        ctx.close_path();
                        ctx.fill();
                        ctx.set_global_alpha(1.0);
                    }
                }

                ctx.set_stroke_style(&color.into());
                ctx.set_line_width(2.0);
                ctx.begin_path();
                for (i, (x, y)) in points.iter().enumerate() {
                    if i == 0 {
                        ctx.move_to(*x, *y);
                    } else {
                        ctx.line_to(*x, *y);
                    }
                }
                ctx.stroke();

                ctx.set_fill_style(&color.into());
                for (x, y) in &points {
                    ctx.begin_path();
                    let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::TAU);
                    ctx.fill();
                }
            }
        }
    }
}

fn draw_pie(canvas: &HtmlCanvasElement, slices: &[Slice], palette: &Palette) {
    let Some(ctx) = context(canvas) else {
        return;
    };

    ctx.set_fill_style(&palette.paper.into());
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let angles = pie_angles(&values);
    if angles.is_empty() {
        ctx.set_fill_style(&palette.text_secondary.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for the selected filters", WIDTH / 2.0 - 110.0, HEIGHT / 2.0);
        return;
    }

    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    let radius = HEIGHT / 2.0 - 30.0;

    ctx.set_font("13px sans-serif");
    for (slice, (start, end)) in slices.iter().zip(angles) {
        ctx.set_fill_style(&slice.color.as_str().into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        // Label outside the slice's midpoint
        let mid = (start + end) / 2.0;
        let (lx, ly) = (cx + (radius + 12.0) * mid.cos(), cy + (radius + 12.0) * mid.sin());
        let text = format!("{} {:.0}%", slice.label, slice.value);
        let offset = if mid.cos() < 0.0 { 7.0 * text.len() as f64 } else { 0.0 };
        ctx.set_fill_style(&palette.text_primary.into());
        let _ = ctx.fill_text(&text, lx - offset, ly + 4.0);
    }
}

#[component]
fn Legend(#[prop(into)] series: Signal<Vec<Series>>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-3">
            {move || {
                series
                    .get()
                    .into_iter()
                    .map(|s| view! {
                        <div class="flex items-center space-x-2">
                            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", s.color) />
                            <span class="text-sm text-[var(--muted-foreground)]">{s.label}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn xy_chart(categories: Signal<Vec<String>>, series: Signal<Vec<Series>>, style: Style) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when data or theme changes
    create_effect(move |_| {
        let categories = categories.get();
        let series = series.get();
        let palette = Palette::for_mode(state.theme.get());
        if let Some(canvas) = canvas_ref.get() {
            draw_xy(&canvas, &categories, &series, style, palette);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width=WIDTH.to_string() height=HEIGHT.to_string() class="w-full h-72" />
            <Legend series=series />
        </div>
    }
}

#[component]
pub fn BarChart(
    #[prop(into)]
    categories: Signal<Vec<String>>,
    #[prop(into)]
    series: Signal<Vec<Series>>,
) -> impl IntoView {
    xy_chart(categories, series, Style::Bar)
}

#[component]
pub fn LineChart(
    #[prop(into)]
    categories: Signal<Vec<String>>,
    #[prop(into)]
    series: Signal<Vec<Series>>,
) -> impl IntoView {
    xy_chart(categories, series, Style::Line)
}

#[component]
pub fn AreaChart(
    #[prop(into)]
    categories: Signal<Vec<String>>,
    #[prop(into)]
    series: Signal<Vec<Series>>,
) -> impl IntoView {
    xy_chart(categories, series, Style::Area)
}

#[component]
pub fn PieChart(#[prop(into)] slices: Signal<Vec<Slice>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let slices = slices.get();
        let palette = Palette::for_mode(state.theme.get());
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices, palette);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width=WIDTH.to_string() height=HEIGHT.to_string() class="w-full h-72" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(125_000.0), 200_000.0);
        assert_eq!(nice_max(185_000.0), 200_000.0);
        assert_eq!(nice_max(450.0), 500.0);
        assert_eq!(nice_max(1_000.0), 1_000.0);
        assert_eq!(nice_max(7.0), 10.0);
    }

    #[test]
    fn test_scale_y() {
        assert_eq!(scale_y(0.0, 100.0, 20.0, 200.0), 220.0);
        assert_eq!(scale_y(100.0, 100.0, 20.0, 200.0), 20.0);
        assert_eq!(scale_y(50.0, 100.0, 20.0, 200.0), 120.0);
        // Out of range values stay inside the plot
        assert_eq!(scale_y(150.0, 100.0, 20.0, 200.0), 20.0);
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(axis_label(150_000.0), "150K");
        assert_eq!(axis_label(2_500_000.0), "2.5M");
        assert_eq!(axis_label(40.0), "40");
    }

    #[test]
    fn test_pie_angles_cover_circle() {
        let angles = pie_angles(&[35.0, 25.0, 20.0, 20.0]);
        assert_eq!(angles.len(), 4);
        let (start, _) = angles[0];
        let (_, end) = angles[3];
        assert!((end - start - std::f64::consts::TAU).abs() < 1e-9);
        assert!(pie_angles(&[0.0, 0.0]).is_empty());
    }
}
