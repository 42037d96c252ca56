//! Staggered entrance animations, optionally gated by a scroll trigger.
//!
//! Triggered reveals follow `play none none reverse`: entering the trigger line plays
//! forward, scrolling back above it plays in reverse, leaving and re-entering from below
//! do nothing.

use crate::animation::channel::ChannelSpec;
use crate::animation::ease::Ease;
use crate::animation::scope::ChannelScope;
use crate::animation::timeline::Timeline;
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::transform::linear::lerp;

/// Fires when the trigger element's top edge crosses `start_fraction` of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTrigger {
    /// Fraction of the viewport height measured from the top (`top 80%` is 0.8).
    pub start_fraction: f64,
}

/// Crossing reported by [`ScrollTrigger::crossing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Scrolled down past the start line.
    Enter,
    /// Scrolled back up above the start line.
    LeaveBack,
}

impl ScrollTrigger {
    /// Trigger at `start_fraction` of the viewport.
    pub fn at(start_fraction: f64) -> Self {
        Self { start_fraction }
    }

    /// `true` when an element whose top sits at `element_top` is past the start line.
    pub fn is_past(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top <= viewport_height * self.start_fraction
    }

    /// Crossing between two observations, if any.
    pub fn crossing(&self, was_past: bool, is_past: bool) -> Option<TriggerEvent> {
        match (was_past, is_past) {
            (false, true) => Some(TriggerEvent::Enter),
            (true, false) => Some(TriggerEvent::LeaveBack),
            _ => None,
        }
    }
}

/// Parameters of a staggered reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealPreset {
    /// Initial vertical offset; items settle at 0.
    pub from_y: f64,
    /// Initial scale; items settle at 1.
    pub from_scale: f64,
    /// Seconds per item.
    pub duration_secs: f64,
    /// Extra delay per item index.
    pub stagger_secs: f64,
    /// Delay before the first item.
    pub delay_secs: f64,
    /// Curve applied to every item.
    pub ease: Ease,
    /// Scroll gate; `None` plays on mount.
    pub trigger: Option<ScrollTrigger>,
}

impl RevealPreset {
    /// Hero title lines: rise 100 over 1.2 s, 0.1 s stagger, after 0.5 s.
    pub const HERO_LINES: Self = Self {
        from_y: 100.0,
        from_scale: 1.0,
        duration_secs: 1.2,
        stagger_secs: 0.1,
        delay_secs: 0.5,
        ease: Ease::OutQuart,
        trigger: None,
    };

    /// Hero subtitle: rise 30 over 1 s after 1 s.
    pub const HERO_SUBTITLE: Self = Self {
        from_y: 30.0,
        from_scale: 1.0,
        duration_secs: 1.0,
        stagger_secs: 0.0,
        delay_secs: 1.0,
        ease: Ease::OutQuart,
        trigger: None,
    };

    /// Page headers: rise 40 over 0.8 s, 0.1 s stagger.
    pub const HEADER: Self = Self {
        from_y: 40.0,
        from_scale: 1.0,
        duration_secs: 0.8,
        stagger_secs: 0.1,
        delay_secs: 0.0,
        ease: Ease::OutQuart,
        trigger: None,
    };

    /// Section body copy at `top 60%`.
    pub const SECTION: Self = Self {
        from_y: 60.0,
        from_scale: 1.0,
        duration_secs: 0.8,
        stagger_secs: 0.15,
        delay_secs: 0.0,
        ease: Ease::OutQuart,
        trigger: Some(ScrollTrigger { start_fraction: 0.6 }),
    };

    /// Card grids at `top 70%`.
    pub const CARDS: Self = Self {
        from_y: 60.0,
        from_scale: 1.0,
        duration_secs: 0.8,
        stagger_secs: 0.15,
        delay_secs: 0.0,
        ease: Ease::OutQuart,
        trigger: Some(ScrollTrigger { start_fraction: 0.7 }),
    };

    /// List items at `top 75%`.
    pub const LIST: Self = Self {
        from_y: 40.0,
        from_scale: 1.0,
        duration_secs: 0.6,
        stagger_secs: 0.1,
        delay_secs: 0.0,
        ease: Ease::OutQuart,
        trigger: Some(ScrollTrigger { start_fraction: 0.75 }),
    };

    /// Call to action at `top 80%`.
    pub const CTA: Self = Self {
        from_y: 60.0,
        from_scale: 1.0,
        duration_secs: 1.0,
        stagger_secs: 0.0,
        delay_secs: 0.0,
        ease: Ease::OutQuart,
        trigger: Some(ScrollTrigger { start_fraction: 0.8 }),
    };

    /// Decorative visual entrance (scale 0.8 to 1) at `top 50%`.
    pub const VISUAL: Self = Self {
        from_y: 0.0,
        from_scale: 0.8,
        duration_secs: 1.5,
        stagger_secs: 0.0,
        delay_secs: 0.0,
        ease: Ease::OutQuart,
        trigger: Some(ScrollTrigger { start_fraction: 0.5 }),
    };

    /// Route change: fade in and rise 20 over 0.6 s.
    pub const PAGE_TRANSITION: Self = Self {
        from_y: 20.0,
        from_scale: 1.0,
        duration_secs: 0.6,
        stagger_secs: 0.0,
        delay_secs: 0.0,
        ease: Ease::OutCubic,
        trigger: None,
    };

    fn validate(&self) -> PrismaResult<()> {
        let finite = [
            self.from_y,
            self.from_scale,
            self.duration_secs,
            self.stagger_secs,
            self.delay_secs,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite || self.duration_secs <= 0.0 || self.stagger_secs < 0.0 || self.delay_secs < 0.0
        {
            return Err(PrismaError::animation(
                "reveal needs a positive duration and non-negative delays",
            ));
        }
        if let Some(trigger) = self.trigger
            && !(0.0..=1.0).contains(&trigger.start_fraction)
        {
            return Err(PrismaError::animation(
                "scroll trigger start must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Style of one revealed item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealItemState {
    /// Vertical offset.
    pub y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
}

/// A group of items revealed together.
#[derive(Debug)]
pub struct Reveal {
    preset: RevealPreset,
    progress: Vec<f64>,
    scope: ChannelScope,
    was_past: bool,
    static_end: bool,
}

impl Reveal {
    /// Mount a reveal over `items` elements. Untriggered presets start playing at once.
    ///
    /// With `reduced_motion` every item rests at its end state and no channel is created.
    pub fn mount(
        label: impl Into<String>,
        preset: RevealPreset,
        items: usize,
        reduced_motion: bool,
        timeline: &mut Timeline,
    ) -> PrismaResult<Self> {
        preset.validate()?;
        let mut reveal = Self {
            preset,
            progress: vec![if reduced_motion { 1.0 } else { 0.0 }; items],
            scope: ChannelScope::new(label),
            was_past: false,
            static_end: reduced_motion,
        };
        if !reduced_motion && preset.trigger.is_none() {
            reveal.play(timeline)?;
        }
        Ok(reveal)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.progress.len()
    }

    /// `true` when there are no items.
    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }

    /// Feed the trigger element's current top edge. Plays or reverses on a crossing.
    pub fn on_scroll(
        &mut self,
        element_top: f64,
        viewport_height: f64,
        timeline: &mut Timeline,
    ) -> PrismaResult<Option<TriggerEvent>> {
        let Some(trigger) = self.preset.trigger else {
            return Ok(None);
        };
        if self.static_end {
            return Ok(None);
        }
        let is_past = trigger.is_past(element_top, viewport_height);
        let event = trigger.crossing(self.was_past, is_past);
        self.was_past = is_past;
        match event {
            Some(TriggerEvent::Enter) => self.play(timeline)?,
            Some(TriggerEvent::LeaveBack) => self.reverse(timeline)?,
            None => {}
        }
        Ok(event)
    }

    /// Progress of item `i` in `[0, 1]`.
    pub fn progress(&self, i: usize) -> f64 {
        let rest = self.progress.get(i).copied().unwrap_or(0.0);
        self.scope.value_or(&item_channel(i), rest)
    }

    /// Style of item `i`.
    pub fn item(&self, i: usize) -> RevealItemState {
        let p = self.progress(i);
        RevealItemState {
            y: lerp(self.preset.from_y, 0.0, p),
            opacity: p.clamp(0.0, 1.0),
            scale: lerp(self.preset.from_scale, 1.0, p),
        }
    }

    /// `true` once every item has fully arrived.
    pub fn is_settled(&self) -> bool {
        (0..self.len()).all(|i| self.progress(i) >= 1.0)
    }

    fn play(&mut self, timeline: &mut Timeline) -> PrismaResult<()> {
        self.retarget(timeline, 1.0)
    }

    fn reverse(&mut self, timeline: &mut Timeline) -> PrismaResult<()> {
        self.retarget(timeline, 0.0)
    }

    fn retarget(&mut self, timeline: &mut Timeline, target: f64) -> PrismaResult<()> {
        let forward = target > 0.5;
        for i in 0..self.progress.len() {
            let name = item_channel(i);
            let current = self.progress(i);
            self.scope.release_named(&name);
            self.progress[i] = current;

            let distance = (target - current).abs();
            if distance <= f64::EPSILON {
                continue;
            }
            // Reversal runs without stagger and takes the share of the duration left to undo.
            let delay = if forward {
                self.preset.delay_secs + self.preset.stagger_secs * i as f64
            } else {
                0.0
            };
            let spec = ChannelSpec::new(name, current, target, self.preset.duration_secs * distance)
                .ease(self.preset.ease)
                .delay(delay);
            self.scope.register(timeline, spec)?;
            self.progress[i] = target;
        }
        Ok(())
    }
}

fn item_channel(i: usize) -> String {
    format!("item{i}")
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
