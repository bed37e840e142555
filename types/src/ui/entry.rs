//! Scene entry effects.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};
use crate::SceneId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEffectKind {
    FadeIn,
    SlideUp,
    PopScale,
}

impl EntryEffectKind {
    /// The entry motion each scene uses.
    #[must_use]
    pub const fn for_scene(scene: SceneId) -> Self {
        match scene {
            SceneId::Splash | SceneId::Student => EntryEffectKind::FadeIn,
            SceneId::Dashboard | SceneId::Pipeline | SceneId::Analytics => {
                EntryEffectKind::SlideUp
            }
            SceneId::Vr => EntryEffectKind::PopScale,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntryEffect {
    kind: EntryEffectKind,
    timer: EffectTimer,
}

impl EntryEffect {
    #[must_use]
    pub fn new(kind: EntryEffectKind, duration: Duration) -> Self {
        Self {
            kind,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn for_scene(scene: SceneId, duration: Duration) -> Self {
        Self::new(EntryEffectKind::for_scene(scene), duration)
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn kind(&self) -> EntryEffectKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EntryEffect, EntryEffectKind};
    use crate::SceneId;
    use std::time::Duration;

    #[test]
    fn initial_state_is_running() {
        let effect = EntryEffect::new(EntryEffectKind::FadeIn, Duration::from_millis(200));
        assert_eq!(effect.kind(), EntryEffectKind::FadeIn);
        assert!(matches!(effect.phase(), AnimPhase::Running { progress } if progress < 0.1));
    }

    #[test]
    fn advance_keeps_running() {
        let mut effect = EntryEffect::new(EntryEffectKind::SlideUp, Duration::from_millis(200));
        effect.advance(Duration::from_millis(100));
        assert!(matches!(effect.phase(), AnimPhase::Running { .. }));
    }

    #[test]
    fn completed_after_duration() {
        let mut effect = EntryEffect::new(EntryEffectKind::PopScale, Duration::from_millis(100));
        effect.advance(Duration::from_millis(150));
        assert_eq!(effect.phase(), AnimPhase::Completed);
    }

    #[test]
    fn zero_duration_immediately_completed() {
        let effect = EntryEffect::for_scene(SceneId::Vr, Duration::ZERO);
        assert_eq!(effect.phase(), AnimPhase::Completed);
    }

    #[test]
    fn vr_pops_and_splash_fades() {
        assert_eq!(
            EntryEffectKind::for_scene(SceneId::Vr),
            EntryEffectKind::PopScale
        );
        assert_eq!(
            EntryEffectKind::for_scene(SceneId::Splash),
            EntryEffectKind::FadeIn
        );
    }
}
