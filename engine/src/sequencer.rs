//! Scene sequencer: the single owner of the current scene.

use mayajalam_types::SceneId;

/// Identifies one activation of a scene.
///
/// Bumped on every sequencer mutation, including a jump to the scene that is
/// already current. Timers armed under an older activation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivationId(u64);

impl ActivationId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Fixed-cycle state machine over [`SceneId`].
///
/// `advance`, `reset` and `jump` are the only mutation entry points. All three
/// are total.
#[derive(Debug, Clone)]
pub struct SceneSequencer {
    current: SceneId,
    activation: ActivationId,
}

impl SceneSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: SceneId::Splash,
            activation: ActivationId(0),
        }
    }

    #[must_use]
    pub fn current(&self) -> SceneId {
        self.current
    }

    #[must_use]
    pub fn activation(&self) -> ActivationId {
        self.activation
    }

    /// Moves to `next(current)`. Never a no-op.
    pub fn advance(&mut self) -> SceneId {
        self.enter(self.current.next())
    }

    /// Returns to [`SceneId::Splash`] unconditionally.
    pub fn reset(&mut self) -> SceneId {
        self.enter(SceneId::Splash)
    }

    /// Sets `current` directly, bypassing the cycle.
    pub fn jump(&mut self, target: SceneId) -> SceneId {
        self.enter(target)
    }

    fn enter(&mut self, scene: SceneId) -> SceneId {
        self.current = scene;
        self.activation = ActivationId(self.activation.0.wrapping_add(1));
        scene
    }
}

impl Default for SceneSequencer {
    fn default() -> Self {
        Self::new()
    }
}
