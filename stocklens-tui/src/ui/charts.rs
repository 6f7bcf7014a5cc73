//! Price, volume, daily-return and volatility charts.
//!
//! X is the row index within the filtered window; axis labels map it back to
//! dates. Absent values are skipped, so warm-up periods draw as gaps.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use stocklens_core::display::y_bounds;
use stocklens_core::DisplayModel;

use crate::theme;

const PLACEHOLDER: &str = "No data in selected range";

pub fn render_price(f: &mut Frame, area: Rect, model: &DisplayModel) {
    let price = model.price_points();
    let average = model.moving_average_points();

    let mut datasets = vec![Dataset::default()
        .name("Close")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme::accent())
        .data(&price)];
    if model.moving_average.is_some() {
        datasets.push(
            Dataset::default()
                .name(format!("MA{}", model.moving_average_window))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme::overlay())
                .data(&average),
        );
    }

    let title = " Stock Price ";
    let Some((lo, hi)) = y_bounds([price.as_slice(), average.as_slice()]) else {
        placeholder(f, area, title);
        return;
    };
    let (lo, hi) = padded(lo, hi);
    draw_chart(f, area, title, datasets, model, (lo, hi), |v| format!("${v:.0}"));
}

pub fn render_volume(f: &mut Frame, area: Rect, model: &DisplayModel) {
    let title = " Trading Volume ";
    if model.is_empty() {
        placeholder(f, area, title);
        return;
    }
    let volume = model.volume_points();
    let max = volume.iter().map(|&(_, v)| v).fold(0.0, f64::max);
    let datasets = vec![Dataset::default()
        .name("Volume")
        .marker(symbols::Marker::HalfBlock)
        .graph_type(GraphType::Bar)
        .style(theme::neutral())
        .data(&volume)];
    let hi = if max > 0.0 { max * 1.05 } else { 1.0 };
    draw_chart(f, area, title, datasets, model, (0.0, hi), format_compact);
}

pub fn render_returns(f: &mut Frame, area: Rect, model: &DisplayModel) {
    let title = " Daily Return (%) ";
    let returns = model.return_points();
    let Some((lo, hi)) = y_bounds([returns.as_slice()]) else {
        placeholder(f, area, title);
        return;
    };
    // zero line always in view
    let (lo, hi) = padded(lo.min(0.0), hi.max(0.0));
    let zero = zero_line(model);
    let datasets = vec![
        Dataset::default()
            .name("Return")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::positive())
            .data(&returns),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(theme::muted())
            .data(&zero),
    ];
    draw_chart(f, area, title, datasets, model, (lo, hi), |v| format!("{v:.1}"));
}

pub fn render_volatility(f: &mut Frame, area: Rect, model: &DisplayModel) {
    let title = format!(" Volatility ({}-day) ", model.volatility_window);
    let volatility = model.volatility_points();
    let Some((lo, hi)) = y_bounds([volatility.as_slice()]) else {
        placeholder(f, area, &title);
        return;
    };
    let (lo, hi) = padded(lo.min(0.0), hi);
    let datasets = vec![Dataset::default()
        .name("Std. dev.")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme::warning())
        .data(&volatility)];
    draw_chart(f, area, &title, datasets, model, (lo, hi), |v| format!("{v:.2}"));
}

fn draw_chart(
    f: &mut Frame,
    area: Rect,
    title: &str,
    datasets: Vec<Dataset>,
    model: &DisplayModel,
    (lo, hi): (f64, f64),
    format_y: impl Fn(f64) -> String,
) {
    let x_max = x_upper(model);
    let y_labels = vec![
        Span::styled(format_y(lo), theme::muted()),
        Span::styled(format_y((lo + hi) / 2.0), theme::muted()),
        Span::styled(format_y(hi), theme::muted()),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(title))
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(date_labels(model)),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([lo, hi])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn chart_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(title.to_string())
        .title_style(theme::text().add_modifier(Modifier::BOLD))
}

fn placeholder(f: &mut Frame, area: Rect, title: &str) {
    let para = Paragraph::new(Span::styled(PLACEHOLDER, theme::muted()))
        .alignment(Alignment::Center)
        .block(chart_block(title));
    f.render_widget(para, area);
}

fn x_upper(model: &DisplayModel) -> f64 {
    model.len().saturating_sub(1).max(1) as f64
}

/// First, middle and last date of the window.
fn date_labels(model: &DisplayModel) -> Vec<Span<'static>> {
    let Some((first, last)) = model.window_span() else {
        return Vec::new();
    };
    let mid = model.dates[model.len() / 2];
    [first, mid, last]
        .iter()
        .map(|d| Span::styled(d.format("%Y-%m-%d").to_string(), theme::secondary()))
        .collect()
}

fn zero_line(model: &DisplayModel) -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (x_upper(model), 0.0)]
}

/// 5% headroom on both sides; a flat series gets a fixed band.
pub fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let range = hi - lo;
    let pad = if range > f64::EPSILON {
        range * 0.05
    } else {
        (hi.abs() * 0.05).max(1.0)
    };
    (lo - pad, hi + pad)
}

/// `1.2M`, `850K`, `42`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.0}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}
