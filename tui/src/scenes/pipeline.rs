use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Gauge,
};

use mayajalam_engine::{PipelineScene, UiOptions, catalog};

use super::{panel, render_lines};
use crate::theme::{Glyphs, Palette, spinner_frame};

pub(super) fn draw(
    frame: &mut Frame,
    pipeline: &PipelineScene,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = panel("AI Processing Pipeline", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(u16::try_from(catalog::PIPELINE_STEPS.len() * 2).unwrap_or(8)),
            Constraint::Length(1), // Step gauge
            Constraint::Length(1),
            Constraint::Min(0), // Done message
        ])
        .split(inner);

    render_lines(
        frame,
        vec![Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.file),
                Style::default().fg(palette.cyan),
            ),
            Span::styled(
                catalog::UPLOADED_FILE,
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled(
                format!(
                    "  {}/{} assets",
                    pipeline.completed_steps(),
                    catalog::PIPELINE_STEPS.len()
                ),
                Style::default().fg(palette.text_muted),
            ),
        ])],
        rows[0],
    );

    let mut lines = Vec::with_capacity(catalog::PIPELINE_STEPS.len() * 2);
    for (index, step) in catalog::PIPELINE_STEPS.iter().enumerate() {
        let (marker, marker_style, label_style) = if pipeline.is_step_complete(index) {
            (
                glyphs.check,
                Style::default().fg(palette.success),
                Style::default().fg(palette.text_primary),
            )
        } else if pipeline.is_step_active(index) {
            (
                spinner_frame(tick, options),
                Style::default().fg(palette.cyan),
                Style::default()
                    .fg(palette.cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                glyphs.pending,
                Style::default().fg(palette.text_disabled),
                Style::default().fg(palette.text_disabled),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), marker_style),
            Span::styled(step.label, label_style),
        ]));
        let artifact_style = if pipeline.is_step_complete(index) {
            Style::default().fg(palette.text_muted)
        } else {
            Style::default().fg(palette.text_disabled)
        };
        lines.push(Line::from(Span::styled(
            format!("    {}", step.artifact),
            artifact_style,
        )));
    }
    render_lines(frame, lines, rows[1]);

    if let Some(progress) = pipeline.step_progress() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette.cyan).bg(palette.bg_highlight))
            .ratio(f64::from(progress).clamp(0.0, 1.0))
            .label(Span::styled(
                format!("{:>3.0}%", progress * 100.0),
                Style::default().fg(palette.text_primary),
            ))
            .use_unicode(!options.ascii_only);
        frame.render_widget(gauge, rows[2]);
    }

    if pipeline.is_finished() {
        render_lines(
            frame,
            vec![Line::from(Span::styled(
                format!("{} {}", glyphs.check, catalog::PIPELINE_DONE_MESSAGE),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ))],
            rows[4],
        );
    }
}
