//! Per-scene renderers.

mod analytics;
mod dashboard;
mod pipeline;
mod splash;
mod student;
mod vr;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use mayajalam_engine::{ActiveScene, App};

use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw_scene(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let tick = app.tick_count();
    let options = app.ui_options();
    match app.scene() {
        ActiveScene::Splash => splash::draw(frame, area, tick, options, palette, glyphs),
        ActiveScene::Dashboard(dashboard) => {
            dashboard::draw(frame, dashboard, area, palette, glyphs);
        }
        ActiveScene::Pipeline(pipeline) => {
            pipeline::draw(frame, pipeline, area, tick, options, palette, glyphs);
        }
        ActiveScene::Student(student) => {
            student::draw(frame, student, area, tick, options, palette, glyphs);
        }
        ActiveScene::Vr => vr::draw(frame, area, tick, options, palette, glyphs),
        ActiveScene::Analytics => analytics::draw(frame, area, palette, glyphs),
    }
}

/// Label of the control bound to Enter for this scene.
pub(crate) fn primary_label(scene: &ActiveScene) -> &'static str {
    match scene {
        ActiveScene::Splash => "enter experience",
        ActiveScene::Dashboard(_) => "upload lesson",
        ActiveScene::Pipeline(_) => "skip",
        ActiveScene::Student(_) => "next scene",
        ActiveScene::Vr => "exit VR scene",
        ActiveScene::Analytics => "restart experience",
    }
}

/// Rounded glass panel used by every scene.
fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(palette))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(format!(" {title} "), styles::title(palette)))
        .padding(Padding::horizontal(1))
}

/// Centered call-to-action line, e.g. `[ ENTER EXPERIENCE ]`.
fn button_line<'a>(label: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(Span::styled(format!("  {label}  "), styles::button(palette)))
        .alignment(Alignment::Center)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_lines(frame: &mut Frame, lines: Vec<Line<'_>>, area: Rect) {
    frame.render_widget(Paragraph::new(lines), area);
}
