use mindset_core::models::report::{RadarPoint, format_points};

use crate::styles::ChartStyle;

/// Terminal cells a string occupies; CJK glyphs take two.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn bar(value: f64, full: f64, style: &ChartStyle) -> String {
    let ratio = if full > 0.0 { (value / full).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * style.width as f64).round() as usize;
    let mut out = String::with_capacity(style.width * 3);
    out.extend(std::iter::repeat_n(style.filled, filled));
    out.extend(std::iter::repeat_n(style.empty, style.width - filled));
    out
}

/// Draw the radar vertices as one labelled bar per axis.
///
/// Scores past the full mark draw a full bar; the number printed after
/// it is always the real score.
pub fn render_radar_bars(points: &[RadarPoint], style: &ChartStyle) -> String {
    let label_width = points
        .iter()
        .map(|p| display_width(&p.dimension))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for point in points {
        let padding = " ".repeat(label_width - display_width(&point.dimension));
        output.push_str(&format!(
            "{}{padding} {} {} / {}\n",
            point.dimension,
            bar(f64::from(point.score), f64::from(point.full_mark), style),
            format_points(point.score),
            point.full_mark,
        ));
    }
    output
}

/// Progress line for the questionnaire view, e.g. `[████░░░░] 50%`.
pub fn render_progress(completion_rate: f64, style: &ChartStyle) -> String {
    format!(
        "[{}] {}%",
        bar(completion_rate, 100.0, style),
        completion_rate.round() as u32
    )
}
