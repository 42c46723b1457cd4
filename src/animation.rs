//! Time-based easing animations.
//!
//! [`AnimationManager`] is plain data advanced by [`AnimationManager::tick`].
//! When a background ticker drives it, the manager lives behind a
//! [`SharedAnimations`] mutex and both the ticker and the render path take
//! the lock for the whole tick or read, so a frame never observes a
//! half-updated progress value.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

/// Roughly 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Animation ticks per spinner glyph step.
const TICKS_PER_SPINNER_FRAME: u64 = 8;

/// Named in the config file as `linear`, `ease-in`, `ease-out`,
/// `ease-in-out` or `bounce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Bounce,
}

impl Easing {
    /// Map raw progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Easing::Bounce => bounce(t),
        }
    }
}

fn bounce(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    let value = if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    };
    value.min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub easing: Easing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub config: AnimationConfig,
    pub started: Instant,
    pub progress: f32,
    pub active: bool,
}

impl Animation {
    pub fn new(config: AnimationConfig, started: Instant) -> Self {
        Self {
            config,
            started,
            progress: 0.0,
            active: true,
        }
    }

    fn advance(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.config.duration {
            self.progress = 1.0;
            self.active = false;
        } else {
            let raw = elapsed.as_secs_f32() / self.config.duration.as_secs_f32();
            self.progress = self.config.easing.apply(raw);
        }
    }
}

/// Active animations keyed by the id of the component that owns them.
#[derive(Debug, Default)]
pub struct AnimationManager {
    animations: HashMap<String, Animation>,
    frame: u64,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the animation owned by `id`.
    pub fn start(&mut self, id: impl Into<String>, config: AnimationConfig, now: Instant) {
        self.animations.insert(id.into(), Animation::new(config, now));
    }

    /// Advance every animation. Ones that finished on a previous tick are
    /// dropped first; ones finishing now clamp to 1.0 and stay visible for
    /// one more frame. Returns whether anything is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.frame = self.frame.wrapping_add(1);
        self.animations.retain(|_, anim| anim.active);
        for anim in self.animations.values_mut() {
            anim.advance(now);
        }
        !self.animations.is_empty()
    }

    pub fn has_active(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn progress(&self, id: &str) -> Option<f32> {
        self.animations.get(id).map(|a| a.progress)
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Animation> {
        self.animations.get(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Step counter for glyph-cycling spinners.
    pub fn spinner_frame(&self) -> usize {
        (self.frame / TICKS_PER_SPINNER_FRAME) as usize
    }
}

#[derive(Debug, Clone)]
pub struct SharedAnimations(Arc<Mutex<AnimationManager>>);

impl SharedAnimations {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(AnimationManager::new())))
    }

    /// A poisoned lock only means a previous holder panicked mid-tick;
    /// the data is still a valid set of animations.
    pub fn lock(&self) -> MutexGuard<'_, AnimationManager> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Drive `shared` at a fixed cadence from a tokio task, independent of
/// the input loop. Abort the handle to stop it.
pub fn spawn_ticker(shared: SharedAnimations, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            shared.lock().tick(Instant::now());
        }
    })
}
