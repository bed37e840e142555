use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use mayajalam_engine::{UiOptions, catalog};

use super::{button_line, centered};
use crate::theme::{Glyphs, Palette, cycle_frame};

pub(super) fn draw(
    frame: &mut Frame,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    draw_vowel_backdrop(frame, area, tick, options, palette);

    let sparkle = cycle_frame(glyphs.orbit_frames, tick / 2, options);
    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", glyphs.sparkle, catalog::EVENT_BADGE),
            Style::default().fg(palette.magenta),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            catalog::PRODUCT_NAME,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            catalog::PRODUCT_SUFFIX,
            Style::default()
                .fg(palette.cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("{sparkle} "), Style::default().fg(palette.cyan)),
            Span::styled(catalog::TAGLINE, Style::default().fg(palette.text_secondary)),
        ]),
        Line::raw(""),
        button_line("ENTER EXPERIENCE", palette),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let inner = centered(area, area.width.saturating_sub(8), height);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Columns of Tamil vowels drifting upward along the left and right edges.
fn draw_vowel_backdrop(
    frame: &mut Frame,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
) {
    if area.width < 12 || area.height == 0 {
        return;
    }
    let drift = if options.reduced_motion { 0 } else { tick / 3 };
    let rows = usize::from(area.height);
    let style = Style::default().fg(palette.text_disabled);

    let column = |offset: usize| -> Vec<Line<'static>> {
        (0..rows)
            .map(|row| {
                if (row + offset) % 2 == 1 {
                    return Line::raw("");
                }
                let index = (row + drift + offset) % catalog::TAMIL_VOWELS.len();
                Line::from(Span::styled(catalog::TAMIL_VOWELS[index], style))
            })
            .collect()
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);
    frame.render_widget(Paragraph::new(column(0)), columns[0]);
    frame.render_widget(
        Paragraph::new(column(5)).alignment(Alignment::Right),
        columns[2],
    );
}
