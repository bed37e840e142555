use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use mayajalam_engine::{DashboardScene, catalog};

use super::{button_line, panel};
use crate::theme::{Glyphs, Palette};

pub(super) fn draw(
    frame: &mut Frame,
    dashboard: &DashboardScene,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(6),    // Drop zone
            Constraint::Length(4), // Feature cards
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Teacher Dashboard",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Active Lessons: {}", catalog::ACTIVE_LESSONS),
            Style::default().fg(palette.text_muted),
        )),
    ]);
    frame.render_widget(title, rows[0]);

    draw_drop_zone(frame, dashboard, rows[1], palette, glyphs);
    draw_feature_cards(frame, rows[2], palette, glyphs);
}

fn draw_drop_zone(
    frame: &mut Frame,
    dashboard: &DashboardScene,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let lines = if dashboard.is_uploaded() {
        vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("{} Lesson Uploaded Successfully", glyphs.check),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} {}", glyphs.file, catalog::UPLOADED_FILE),
                Style::default().fg(palette.text_secondary),
            )),
        ]
    } else {
        vec![
            Line::raw(""),
            Line::from(Span::styled(
                glyphs.upload,
                Style::default().fg(palette.cyan),
            )),
            Line::from(Span::styled(
                "Upload New Lesson",
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Supports {}", catalog::SUPPORTED_FORMATS),
                Style::default().fg(palette.text_muted),
            )),
            Line::raw(""),
            button_line("UPLOAD LESSON", palette),
        ]
    };

    let block = panel("Lesson Upload", palette);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_feature_cards(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            catalog::FEATURE_CARDS
                .iter()
                .map(|_| Constraint::Ratio(1, 3)),
        )
        .split(area);

    for (card, column) in catalog::FEATURE_CARDS.iter().zip(columns.iter()) {
        let body = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", glyphs.check), Style::default().fg(palette.success)),
            Span::styled(card.status, Style::default().fg(palette.success)),
        ]))
        .block(panel(card.label, palette));
        frame.render_widget(body, *column);
    }
}
