use std::cell::Cell;
use std::rc::Rc;

use crate::animation::channel::ChannelSpec;
use crate::foundation::error::PrismaResult;

/// Identifier of a registered channel, unique per [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(pub u64);

/// Lifecycle of a channel: `Created -> Running -> {Completed | Cancelled}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelState {
    /// Registered, not ticked yet.
    Created,
    /// Receiving ticks.
    Running,
    /// One-shot channel reached `to`; its completion callback has fired.
    Completed,
    /// Released before completion; no further callbacks fire.
    Cancelled,
}

impl ChannelState {
    /// `true` for `Completed` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// State shared between a timeline slot and the handle that owns it.
#[derive(Debug)]
struct ChannelToken {
    state: Cell<ChannelState>,
    value: Cell<f64>,
    released: Cell<bool>,
}

type UpdateFn = Box<dyn FnMut(f64)>;
type CompleteFn = Box<dyn FnOnce()>;

/// Optional per-tick and completion callbacks for a channel.
#[derive(Default)]
pub struct ChannelCallbacks {
    on_update: Option<UpdateFn>,
    on_complete: Option<CompleteFn>,
}

impl ChannelCallbacks {
    /// No callbacks; read values through the [`ChannelHandle`] instead.
    pub fn none() -> Self {
        Self::default()
    }

    /// Invoke `f` with the new value on every tick.
    pub fn on_update(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Invoke `f` exactly once when a one-shot channel completes.
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

/// Owning handle of a registered channel.
///
/// Dropping the handle (or calling [`ChannelHandle::cancel`]) releases the channel: the
/// timeline delivers no further callbacks and frees the slot on its next tick or sweep.
#[must_use = "dropping a ChannelHandle cancels its channel"]
#[derive(Debug)]
pub struct ChannelHandle {
    id: ChannelId,
    name: String,
    token: Rc<ChannelToken>,
}

impl ChannelHandle {
    /// Channel identifier.
    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Channel name from its spec.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Most recently computed value.
    pub fn value(&self) -> f64 {
        self.token.value.get()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ChannelState {
        self.token.state.get()
    }

    /// `true` once a one-shot channel has completed.
    pub fn is_finished(&self) -> bool {
        self.state() == ChannelState::Completed
    }

    /// Release the channel now.
    pub fn cancel(self) {}
}

impl Drop for ChannelHandle {
    fn drop(&mut self) {
        if !self.token.state.get().is_terminal() {
            self.token.state.set(ChannelState::Cancelled);
        }
        self.token.released.set(true);
    }
}

struct Slot {
    id: ChannelId,
    spec: ChannelSpec,
    elapsed: f64,
    token: Rc<ChannelToken>,
    callbacks: ChannelCallbacks,
}

/// Counters returned by [`Timeline::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Channels that received a value this tick.
    pub updated: usize,
    /// One-shot channels that completed this tick.
    pub completed: usize,
    /// Released channels freed before this tick.
    pub released: usize,
}

/// Single-threaded, frame-driven scheduler of animation channels.
///
/// Channels are advanced in registration order on every tick.
#[derive(Default)]
pub struct Timeline {
    slots: Vec<Slot>,
    next_id: u64,
    now_secs: f64,
}

impl Timeline {
    /// Empty timeline at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time advanced so far.
    pub fn now_secs(&self) -> f64 {
        self.now_secs
    }

    /// Register a channel. Its initial value is the channel spec sampled at zero elapsed time.
    pub fn register(
        &mut self,
        spec: ChannelSpec,
        callbacks: ChannelCallbacks,
    ) -> PrismaResult<ChannelHandle> {
        spec.validate()?;
        let id = ChannelId(self.next_id);
        self.next_id += 1;

        let token = Rc::new(ChannelToken {
            state: Cell::new(ChannelState::Created),
            value: Cell::new(spec.sample(0.0).value),
            released: Cell::new(false),
        });
        tracing::debug!(channel = %spec.name, id = id.0, repeat = ?spec.repeat, "channel registered");

        let handle = ChannelHandle {
            id,
            name: spec.name.clone(),
            token: Rc::clone(&token),
        };
        self.slots.push(Slot {
            id,
            spec,
            elapsed: 0.0,
            token,
            callbacks,
        });
        Ok(handle)
    }

    /// Register a channel without callbacks.
    pub fn register_plain(&mut self, spec: ChannelSpec) -> PrismaResult<ChannelHandle> {
        self.register(spec, ChannelCallbacks::none())
    }

    /// Free slots whose handles were released. Returns how many were freed.
    pub fn sweep(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|slot| {
            let keep = !slot.token.released.get();
            if !keep {
                tracing::debug!(channel = %slot.spec.name, id = slot.id.0, "channel released");
            }
            keep
        });
        before - self.slots.len()
    }

    /// Advance every live channel by `dt_secs` and deliver callbacks.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn tick(&mut self, dt_secs: f64) -> TickReport {
        let dt = if dt_secs.is_finite() && dt_secs >= 0.0 {
            dt_secs
        } else {
            tracing::warn!(dt_secs, "ignoring invalid tick delta");
            0.0
        };
        self.now_secs += dt;

        let mut report = TickReport {
            released: self.sweep(),
            ..TickReport::default()
        };

        for slot in &mut self.slots {
            // A callback earlier in this tick may have dropped another channel's handle.
            if slot.token.released.get() {
                continue;
            }
            slot.elapsed += dt;
            let sample = slot.spec.sample(slot.elapsed);
            slot.token.value.set(sample.value);
            slot.token.state.set(ChannelState::Running);
            if let Some(f) = slot.callbacks.on_update.as_mut() {
                f(sample.value);
            }
            report.updated += 1;
            // The update callback may have dropped this channel's own handle.
            if slot.token.released.get() {
                continue;
            }

            if sample.finished {
                slot.token.state.set(ChannelState::Completed);
                if let Some(f) = slot.callbacks.on_complete.take() {
                    f();
                }
                tracing::debug!(channel = %slot.spec.name, id = slot.id.0, "channel completed");
                report.completed += 1;
            }
        }

        self.slots
            .retain(|slot| slot.token.state.get() != ChannelState::Completed);
        report
    }

    /// Channels still scheduled (neither completed nor released).
    pub fn live_channels(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !slot.token.released.get())
            .count()
    }

    /// `true` when no channel is scheduled.
    pub fn is_idle(&self) -> bool {
        self.live_channels() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
