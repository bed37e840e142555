use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use mayajalam_engine::{Caption, StudentMode, StudentScene, UiOptions, catalog};

use super::{panel, render_lines};
use crate::theme::{Glyphs, Palette, cycle_frame};

const SIDEBAR_WIDTH: u16 = 34;

pub(super) fn draw(
    frame: &mut Frame,
    student: &StudentScene,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(columns[0]);

    draw_mode_tabs(frame, student, main[0], palette, glyphs);
    match student.mode() {
        StudentMode::Visual => draw_visual(frame, student, main[1], tick, options, palette, glyphs),
        StudentMode::Hearing => {
            draw_hearing(frame, student, main[1], tick, options, palette, glyphs);
        }
    }
    draw_sidebar(frame, columns[1], palette);
}

fn draw_mode_tabs(
    frame: &mut Frame,
    student: &StudentScene,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let tab = |label: &'static str, icon: &'static str, active: bool| {
        let style = if active {
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        };
        Span::styled(format!(" {icon} {label} "), style)
    };

    let mut spans = vec![
        tab("Visual", glyphs.eye, student.mode() == StudentMode::Visual),
        Span::raw(" "),
        tab("Hearing", glyphs.ear, student.mode() == StudentMode::Hearing),
        Span::raw("   "),
    ];
    let ai_style = if student.is_ai_mode() {
        Style::default()
            .fg(palette.magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_disabled)
    };
    let ai_state = if student.ai_feed_active() {
        "AI LIVE"
    } else if student.is_ai_mode() {
        "AI ON"
    } else {
        "AI OFF"
    };
    spans.push(Span::styled(format!("{} {ai_state}", glyphs.sparkle), ai_style));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ============================================================================
// Visual mode: AR view with hotspots and narration bar
// ============================================================================

fn draw_visual(
    frame: &mut Frame,
    student: &StudentScene,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(area);

    let block = panel("AR View", palette);
    let view = block.inner(rows[0]);
    frame.render_widget(block, rows[0]);
    draw_hotspots(frame, view, palette, glyphs);

    draw_narration_bar(frame, student, rows[1], tick, options, palette, glyphs);
}

/// Places each hotspot at its percent position, clamped so labels stay inside.
fn draw_hotspots(frame: &mut Frame, view: Rect, palette: &Palette, glyphs: &Glyphs) {
    if view.width == 0 || view.height < 2 {
        return;
    }
    for hotspot in &catalog::HOTSPOTS {
        let title = format!("{} {}", glyphs.hotspot, hotspot.title);
        let width = u16::try_from(title.width().max(hotspot.description.width()))
            .unwrap_or(u16::MAX)
            .min(view.width);
        let left = (u32::from(view.width) * u32::from(hotspot.left_pct) / 100) as u16;
        let top = (u32::from(view.height) * u32::from(hotspot.top_pct) / 100) as u16;
        let x = view.x + left.min(view.width - width);
        let y = view.y + top.min(view.height - 2);

        let lines = vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(palette.cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                hotspot.description,
                Style::default().fg(palette.text_secondary),
            )),
        ];
        render_lines(frame, lines, Rect::new(x, y, width, 2));
    }
}

fn draw_narration_bar(
    frame: &mut Frame,
    student: &StudentScene,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (icon, state) = if student.is_playing() {
        (glyphs.pause, "Playing")
    } else {
        (glyphs.play, "Paused")
    };
    let wave: String = (0..12)
        .map(|offset| {
            if student.is_playing() {
                cycle_frame(glyphs.wave_frames, tick + offset, options)
            } else {
                glyphs.wave_frames.first().copied().unwrap_or("")
            }
        })
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(palette.cyan)),
            Span::styled(
                format!("Tamil Narration: {state}  "),
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled(wave, Style::default().fg(palette.magenta)),
        ]),
        Line::from(Span::styled(
            catalog::LESSON_SENTENCE_TAMIL,
            Style::default().fg(palette.text_primary),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(panel("Narration", palette)),
        area,
    );
}

// ============================================================================
// Hearing mode: sign avatar, captions, gesture library
// ============================================================================

fn draw_hearing(
    frame: &mut Frame,
    student: &StudentScene,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    draw_avatar(frame, student, rows[0], tick, options, palette, glyphs);
    draw_caption(frame, student, rows[1], palette);
    draw_gesture_library(frame, student, rows[2], palette);
}

fn draw_avatar(
    frame: &mut Frame,
    student: &StudentScene,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let hands = if student.is_signing() {
        cycle_frame(glyphs.orbit_frames, tick, options)
    } else {
        glyphs.hand
    };
    let status = match student.gesture() {
        Some(gesture) => Span::styled(
            format!("Signing: {}", gesture.label),
            Style::default()
                .fg(palette.magenta)
                .add_modifier(Modifier::BOLD),
        ),
        None if student.is_signing() => {
            Span::styled("Signing narration", Style::default().fg(palette.cyan))
        }
        None => Span::styled("Ready", Style::default().fg(palette.text_muted)),
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            glyphs.avatar,
            Style::default()
                .fg(palette.cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{hands}   {hands}"),
            Style::default().fg(palette.purple),
        )),
        Line::from(status),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel("Sign Avatar", palette)),
        area,
    );
}

fn draw_caption(frame: &mut Frame, student: &StudentScene, area: Rect, palette: &Palette) {
    let (text, text_style) = match student.caption() {
        Caption::Gesture(gesture) => (
            gesture.tamil,
            Style::default()
                .fg(palette.yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Caption::Narration => (
            catalog::LESSON_SENTENCE_TAMIL,
            Style::default().fg(palette.text_primary),
        ),
        Caption::Idle => (catalog::CAPTION_IDLE, Style::default().fg(palette.text_muted)),
    };
    let subtitle = student
        .gesture()
        .map_or(catalog::LESSON_SENTENCE_ENGLISH, |gesture| gesture.label);

    let lines = vec![
        Line::from(Span::styled(text, text_style)),
        Line::from(Span::styled(
            subtitle,
            Style::default().fg(palette.text_secondary),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(panel("Live Captions", palette)),
        area,
    );
}

fn draw_gesture_library(
    frame: &mut Frame,
    student: &StudentScene,
    area: Rect,
    palette: &Palette,
) {
    let mut spans = Vec::with_capacity(catalog::GESTURES.len() * 2);
    for (index, gesture) in catalog::GESTURES.iter().enumerate() {
        let style = if student.gesture_index() == Some(index) {
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        spans.push(Span::styled(
            format!(" {} {} ", index + 1, gesture.label),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(panel("Gesture Library", palette)),
        area,
    );
}

// ============================================================================
// Sidebar
// ============================================================================

fn draw_sidebar(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = panel("Lesson", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let label = Style::default().fg(palette.text_muted);
    let value = Style::default().fg(palette.text_primary);
    render_lines(
        frame,
        vec![
            Line::from(Span::styled("Topic", label)),
            Line::from(Span::styled(catalog::LESSON_TOPIC, value)),
            Line::raw(""),
            Line::from(Span::styled("Language", label)),
            Line::from(Span::styled(catalog::LESSON_LANGUAGE, value)),
            Line::raw(""),
        ],
        rows[0],
    );
    render_lines(
        frame,
        vec![Line::from(vec![
            Span::styled("Learning Progress ", label),
            Span::styled(catalog::MODULE_PROGRESS_LABEL, value),
        ])],
        rows[1],
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.success).bg(palette.bg_highlight))
        .percent(catalog::MODULE_PROGRESS_PCT)
        .label(format!("{}%", catalog::MODULE_PROGRESS_PCT));
    frame.render_widget(gauge, rows[2]);
}
