// Team-year summary widgets: totals bar chart over the participant table.
//
// The chart keeps the aggregator's label order; bars use the conventional
// stat abbreviations because full labels don't fit under terminal bars.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::summary::{
    StatTotal, TeamYearBatting, TeamYearPitching, BATTING_TABLE_HEADERS, PITCHING_TABLE_HEADERS,
};

/// Conventional scorecard abbreviation for a chart label.
fn abbrev(label: &str) -> &'static str {
    match label {
        "Hits" => "H",
        "Home Runs" => "HR",
        "Runs" => "R",
        "RBIs" => "RBI",
        "Doubles" => "2B",
        "Triples" => "3B",
        "Strikeouts" => "SO",
        "Wins" => "W",
        "Losses" => "L",
        "Games" => "G",
        "Saves" => "SV",
        "ER" => "ER",
        "IP" => "IP",
        _ => "",
    }
}

/// Bar text: integers plain, fractional totals (innings pitched) with one
/// decimal.
fn format_total(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn render_hint(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new("  Select a team and year.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, area);
}

/// Render the labeled totals as a bar chart.
fn render_totals(frame: &mut Frame, area: Rect, title: &str, totals: &[StatTotal]) {
    let bars: Vec<Bar> = totals
        .iter()
        .map(|stat| {
            let value = if stat.value.is_finite() && stat.value > 0.0 {
                stat.value.round() as u64
            } else {
                0
            };
            Bar::default()
                .value(value)
                .label(Line::from(abbrev(stat.label)))
                .text_value(format_total(stat.value))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(chart, area);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    headers: &[&str],
    rows: Vec<Vec<String>>,
) {
    let header = Row::new(headers.iter().map(|h| Cell::from(*h)).collect::<Vec<_>>()).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows: Vec<Row> = rows
        .into_iter()
        .map(|cells| Row::new(cells.into_iter().map(Cell::from).collect::<Vec<_>>()))
        .collect();

    let mut widths = vec![Constraint::Min(18)];
    widths.extend(
        headers
            .iter()
            .skip(1)
            .map(|h| Constraint::Length(h.len() as u16 + 1)),
    );

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(table, area);
}

/// Render the batting tab's content: totals chart and participant table.
pub fn render_batting(
    frame: &mut Frame,
    chart_area: Rect,
    table_area: Rect,
    heading: &str,
    summary: Option<&TeamYearBatting>,
) {
    match summary {
        Some(summary) => {
            render_totals(frame, chart_area, heading, &summary.totals);
            render_table(
                frame,
                table_area,
                "Players",
                &BATTING_TABLE_HEADERS,
                summary.lines.iter().map(|line| line.cells()).collect(),
            );
        }
        None => {
            render_hint(frame, chart_area, heading);
            render_hint(frame, table_area, "Players");
        }
    }
}

/// Render the pitching tab's content: totals chart and participant table.
pub fn render_pitching(
    frame: &mut Frame,
    chart_area: Rect,
    table_area: Rect,
    heading: &str,
    summary: Option<&TeamYearPitching>,
) {
    match summary {
        Some(summary) => {
            render_totals(frame, chart_area, heading, &summary.totals);
            render_table(
                frame,
                table_area,
                "Players",
                &PITCHING_TABLE_HEADERS,
                summary.lines.iter().map(|line| line.cells()).collect(),
            );
        }
        None => {
            render_hint(frame, chart_area, heading);
            render_hint(frame, table_area, "Players");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
