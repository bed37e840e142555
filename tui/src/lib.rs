//! TUI rendering for Mayajalam using ratatui.

mod effects;
mod input;
mod scenes;
mod theme;

pub use effects::{apply_entry_effect, apply_fade};
pub use input::{InputPump, KeyAction, apply_action, handle_events, key_action};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use mayajalam_engine::{ActiveScene, App, SceneId, StudentMode, catalog};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Scene body
            Constraint::Length(1), // Nav dots
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette);

    let body = app
        .entry_effect()
        .map_or(chunks[1], |effect| apply_entry_effect(effect, chunks[1]));
    scenes::draw_scene(frame, app, body, &palette, &glyphs);
    if let Some(effect) = app.entry_effect() {
        apply_fade(effect, body, frame.buffer_mut());
    }

    draw_nav_dots(frame, app.current_scene(), chunks[2], &palette, &glyphs);
    draw_key_hints(frame, app.scene(), chunks[3], &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let scene = app.current_scene();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Min(0)])
        .split(area);

    let badge = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(format!(" {} ", catalog::EVENT_BADGE), styles::badge(palette)),
    ]));
    frame.render_widget(badge, columns[0]);

    let position = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}/{} ", scene.position() + 1, SceneId::ALL.len()),
            styles::mono(palette),
        ),
        Span::styled(
            scene.display_name(),
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(position, columns[1]);
}

fn draw_nav_dots(
    frame: &mut Frame,
    current: SceneId,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut spans = Vec::with_capacity(SceneId::JUMP_TARGETS.len() * 2);
    for (index, target) in SceneId::JUMP_TARGETS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let (dot, style) = if *target == current {
            (
                glyphs.dot_on,
                Style::default()
                    .fg(palette.cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (glyphs.dot_off, Style::default().fg(palette.text_disabled))
        };
        spans.push(Span::styled(format!("{dot} F{}", index + 1), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_key_hints(
    frame: &mut Frame,
    scene: &ActiveScene,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut hints: Vec<(&str, &str)> = vec![("Enter", scenes::primary_label(scene))];
    if let ActiveScene::Student(student) = scene {
        hints.extend([("v/h", "mode"), ("p", "narration"), ("a", "AI")]);
        if student.mode() == StudentMode::Hearing {
            hints.push(("1-5", "sign"));
        }
    }
    hints.extend([("n", "next"), ("r", "reset"), ("q", "quit")]);

    let mut spans = vec![Span::raw(" ")];
    for (index, (key, label)) in hints.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.bullet),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {label}"), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
