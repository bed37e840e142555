//! Scene entry effects applied at render time.

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};

use mayajalam_engine::{EntryEffect, EntryEffectKind};

/// Transform the scene body rectangle for the current entry effect.
#[must_use]
pub fn apply_entry_effect(effect: &EntryEffect, base: Rect) -> Rect {
    match effect.kind() {
        EntryEffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            let scale = 0.6 + 0.4 * t;
            scale_rect(base, scale)
        }
        EntryEffectKind::SlideUp => {
            let t = ease_out_cubic(effect.progress());
            let offset = base.height.saturating_div(4).min(6);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            Rect {
                x: base.x,
                y: base.y.saturating_add(y_offset),
                width: base.width,
                height: base.height.saturating_sub(y_offset),
            }
        }
        EntryEffectKind::FadeIn => base,
    }
}

/// Dims the body while a fade-in is in its first half.
pub fn apply_fade(effect: &EntryEffect, area: Rect, buf: &mut Buffer) {
    if effect.kind() != EntryEffectKind::FadeIn || effect.progress() >= 0.5 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier.insert(Modifier::DIM);
            }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
