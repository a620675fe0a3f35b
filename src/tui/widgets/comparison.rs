// Comparison widgets: two career totals as bars, two year series as lines.
//
// Averages ride the integer bar widget scaled by 1000 with the real value
// as the bar text; an undefined average (zero career at-bats) draws an
// empty bar labeled "unavailable". Non-finite series points are skipped.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};
use ratatui::Frame;

use crate::career::{CareerSummary, CareerTotal};

const PLAYER_COLORS: [Color; 2] = [Color::Cyan, Color::Magenta];

fn render_hint(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new("  Select two players and a stat.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, area);
}

/// Bar height for a career total. Averages scale by 1000 so 0.300 shows as
/// a taller bar than 0.250 on an integer axis.
fn bar_value(total: CareerTotal) -> u64 {
    match total {
        CareerTotal::Counting(n) => n,
        CareerTotal::Average(v) if v.is_finite() => (v * 1000.0).round().max(0.0) as u64,
        CareerTotal::Average(_) => 0,
    }
}

/// Render the paired career totals as a two-bar chart.
fn render_totals(frame: &mut Frame, area: Rect, stat_label: &str, pair: &(CareerSummary, CareerSummary)) {
    let bars: Vec<Bar> = [&pair.0, &pair.1]
        .iter()
        .zip(PLAYER_COLORS)
        .map(|(summary, color)| {
            Bar::default()
                .value(bar_value(summary.total))
                .label(Line::from(summary.name.clone()))
                .text_value(summary.total.display())
                .style(Style::default().fg(color))
        })
        .collect();

    let bar_width = area.width.saturating_sub(4) / 2;
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width.clamp(8, 24))
        .bar_gap(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Career {stat_label}")),
        );
    frame.render_widget(chart, area);
}

/// Render the paired year series as a line chart with a shared year axis.
fn render_series(
    frame: &mut Frame,
    area: Rect,
    stat_label: &str,
    pair: &(CareerSummary, CareerSummary),
) {
    let is_average = matches!(pair.0.total, CareerTotal::Average(_));

    let to_points = |summary: &CareerSummary| -> Vec<(f64, f64)> {
        summary
            .seasons
            .iter()
            .filter(|p| p.value.is_finite())
            .map(|p| (f64::from(p.year), p.value))
            .collect()
    };
    let points1 = to_points(&pair.0);
    let points2 = to_points(&pair.1);

    let title = format!("Yearly {stat_label}");
    if points1.is_empty() && points2.is_empty() {
        let paragraph = Paragraph::new("  No seasons to plot.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_points = points1.iter().chain(points2.iter());
    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut y_max: f64 = 0.0;
    for (x, y) in all_points {
        x_min = x_min.min(*x);
        x_max = x_max.max(*x);
        y_max = y_max.max(*y);
    }
    if x_min == x_max {
        // A single season still needs a nonzero axis span.
        x_min -= 1.0;
        x_max += 1.0;
    }
    if y_max == 0.0 {
        y_max = 1.0;
    }

    let format_y = |v: f64| -> String {
        if is_average {
            format!("{v:.3}")
        } else {
            format!("{v:.0}")
        }
    };
    let x_labels: Vec<String> = vec![
        format!("{x_min:.0}"),
        format!("{:.0}", (x_min + x_max) / 2.0),
        format!("{x_max:.0}"),
    ];
    let y_labels: Vec<String> = vec![format_y(0.0), format_y(y_max / 2.0), format_y(y_max)];

    let datasets = vec![
        Dataset::default()
            .name(pair.0.name.clone())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(PLAYER_COLORS[0]))
            .data(&points1),
        Dataset::default()
            .name(pair.1.name.clone())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(PLAYER_COLORS[1]))
            .data(&points2),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(stat_label.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// Render the comparison tab's content: totals above the year series, or a
/// hint while selections are incomplete.
pub fn render(
    frame: &mut Frame,
    chart_area: Rect,
    series_area: Rect,
    stat_label: &str,
    view: Option<&(CareerSummary, CareerSummary)>,
) {
    match view {
        Some(pair) => {
            render_totals(frame, chart_area, stat_label, pair);
            render_series(frame, series_area, stat_label, pair);
        }
        None => {
            render_hint(frame, chart_area, "Career");
            render_hint(frame, series_area, "Yearly");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::SeasonPoint;

    fn counting_pair() -> (CareerSummary, CareerSummary) {
        (
            CareerSummary {
                name: "Babe Ruth".into(),
                total: CareerTotal::Counting(714),
                seasons: vec![
                    SeasonPoint { year: 1926, value: 47.0 },
                    SeasonPoint { year: 1927, value: 60.0 },
                ],
            },
            CareerSummary {
                name: "Lou Gehrig".into(),
                total: CareerTotal::Counting(493),
                seasons: vec![SeasonPoint { year: 1927, value: 47.0 }],
            },
        )
    }

    fn undefined_avg_pair() -> (CareerSummary, CareerSummary) {
        (
            CareerSummary {
                name: "Pure Pitcher".into(),
                total: CareerTotal::Average(f64::NAN),
                seasons: vec![SeasonPoint { year: 1913, value: f64::NAN }],
            },
            CareerSummary {
                name: "Other Pitcher".into(),
                total: CareerTotal::Average(f64::NAN),
                seasons: vec![],
            },
        )
    }

    #[test]
    fn bar_value_scales_averages() {
        assert_eq!(bar_value(CareerTotal::Counting(714)), 714);
        assert_eq!(bar_value(CareerTotal::Average(0.342)), 342);
        assert_eq!(bar_value(CareerTotal::Average(f64::NAN)), 0);
    }

    fn draw(view: Option<&(CareerSummary, CareerSummary)>, stat_label: &str) {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let top = Rect::new(0, 0, area.width, 15);
                let bottom = Rect::new(0, 15, area.width, 15);
                render(frame, top, bottom, stat_label, view);
            })
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_counting_pair() {
        draw(Some(&counting_pair()), "HR");
    }

    #[test]
    fn render_does_not_panic_with_undefined_averages() {
        // All points NaN: series falls back to the empty hint.
        draw(Some(&undefined_avg_pair()), "AVG");
    }

    #[test]
    fn render_does_not_panic_without_view() {
        draw(None, "H");
    }

    #[test]
    fn render_does_not_panic_single_season() {
        let pair = (
            CareerSummary {
                name: "One Year".into(),
                total: CareerTotal::Counting(10),
                seasons: vec![SeasonPoint { year: 1990, value: 10.0 }],
            },
            CareerSummary {
                name: "Empty".into(),
                total: CareerTotal::Counting(0),
                seasons: vec![],
            },
        );
        draw(Some(&pair), "H");
    }
}
