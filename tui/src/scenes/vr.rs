use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use mayajalam_engine::{UiOptions, catalog};

use super::{button_line, centered, panel, render_lines};
use crate::theme::{Glyphs, Palette, cycle_frame};

pub(super) fn draw(
    frame: &mut Frame,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // HUD
            Constraint::Min(5),    // Stage
            Constraint::Length(1), // Exit
        ])
        .split(area);

    draw_hud(frame, rows[0], palette);
    draw_stage(frame, rows[1], tick, options, palette, glyphs);
    render_lines(frame, vec![button_line("EXIT VR SCENE", palette)], rows[2]);
}

fn draw_hud(frame: &mut Frame, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(area);

    let left = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", catalog::VR_MODE_LABEL),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", catalog::VR_ROOM),
            Style::default().fg(palette.text_secondary),
        )),
    ]);
    frame.render_widget(left, columns[0]);

    let right = Paragraph::new(Line::from(Span::styled(
        format!("{} ", catalog::VR_LATENCY),
        Style::default().fg(palette.text_muted),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, columns[1]);
}

fn draw_stage(
    frame: &mut Frame,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Min(10),
            Constraint::Percentage(25),
        ])
        .split(area);

    let label = Style::default().fg(palette.cyan);
    let labels = |items: &'static [&'static str]| -> Vec<Line<'static>> {
        items
            .iter()
            .map(|item| Line::from(Span::styled(*item, label)))
            .collect()
    };
    frame.render_widget(
        Paragraph::new(labels(&catalog::VR_GEOMETRY_LABELS)).block(panel("Scene", palette)),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(labels(&catalog::VR_ANALYSIS_LABELS))
            .block(panel(catalog::VR_INTERPRETER, palette)),
        columns[2],
    );

    let shape = cycle_frame(glyphs.orbit_frames, tick, options);
    let ring = cycle_frame(glyphs.spinner_frames, tick, options);
    let lines = vec![
        Line::from(Span::styled(
            format!("{ring}   {shape}   {ring}"),
            Style::default()
                .fg(palette.magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("{} {}", glyphs.avatar, catalog::VR_INTERPRETER),
            Style::default().fg(palette.text_secondary),
        )),
    ];
    let stage = centered(columns[1], columns[1].width, 3);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), stage);
}
