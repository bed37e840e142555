use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph, Wrap},
};

use mayajalam_engine::catalog;

use super::{button_line, panel, render_lines};
use crate::theme::{Glyphs, Palette};

pub(super) fn draw(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stats
            Constraint::Min(8),    // Charts
            Constraint::Length(5), // Score + impact
            Constraint::Length(1), // Restart
        ])
        .split(area);

    draw_stats(frame, rows[0], palette);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    draw_engagement(frame, charts[0], palette);
    draw_completion(frame, charts[1], palette, glyphs);

    draw_impact(frame, rows[2], palette);
    render_lines(frame, vec![button_line("RESTART EXPERIENCE", palette)], rows[3]);
}

fn draw_stats(frame: &mut Frame, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(catalog::STATS.iter().map(|_| Constraint::Ratio(1, 4)))
        .split(area);

    for (stat, column) in catalog::STATS.iter().zip(columns.iter()) {
        let body = Paragraph::new(Line::from(Span::styled(
            stat.value,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )))
        .block(panel(stat.label, palette));
        frame.render_widget(body, *column);
    }
}

fn draw_engagement(frame: &mut Frame, area: Rect, palette: &Palette) {
    let bars: Vec<Bar> = catalog::ENGAGEMENT
        .iter()
        .map(|(day, value)| {
            Bar::default()
                .label(Line::from(*day))
                .value(*value)
                .style(Style::default().fg(palette.cyan))
                .value_style(Style::default().fg(palette.bg_dark).bg(palette.cyan))
        })
        .collect();
    let chart = BarChart::default()
        .block(panel("Weekly Engagement", palette))
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .max(100);
    frame.render_widget(chart, area);
}

fn draw_completion(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = panel("Completion by Mode", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    render_lines(
        frame,
        vec![Line::from(vec![
            Span::styled(glyphs.bar, Style::default().fg(palette.blue)),
            Span::styled(" Visual  ", Style::default().fg(palette.text_secondary)),
            Span::styled(glyphs.bar, Style::default().fg(palette.purple)),
            Span::styled(" Hearing", Style::default().fg(palette.text_secondary)),
        ])],
        rows[0],
    );

    let groups: Vec<(&str, Vec<Bar>)> = catalog::COMPLETION
        .iter()
        .map(|week| {
            (
                week.label,
                vec![
                    Bar::default()
                        .value(week.visual)
                        .style(Style::default().fg(palette.blue)),
                    Bar::default()
                        .value(week.hearing)
                        .style(Style::default().fg(palette.purple)),
                ],
            )
        })
        .collect();

    let mut chart = BarChart::default()
        .bar_width(2)
        .bar_gap(0)
        .group_gap(2)
        .max(100)
        .value_style(Style::default().fg(palette.bg_dark));
    for (label, bars) in &groups {
        chart = chart.data(BarGroup::default().label(Line::from(*label)).bars(bars));
    }
    frame.render_widget(chart, rows[1]);
}

fn draw_impact(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Accessibility Score ",
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled(
                format!("{}/100", catalog::ACCESSIBILITY_SCORE),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            catalog::IMPACT_STATEMENT,
            Style::default().fg(palette.text_muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Impact", palette)),
        area,
    );
}
