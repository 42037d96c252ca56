use crate::animation::channel::ChannelSpec;
use crate::animation::timeline::{ChannelCallbacks, ChannelHandle, Timeline};
use crate::foundation::error::PrismaResult;

/// Group of channels owned by one component.
///
/// Every handle is released when the scope is dropped, including when setup fails
/// half-way through.
#[derive(Debug, Default)]
pub struct ChannelScope {
    label: String,
    handles: Vec<ChannelHandle>,
}

impl ChannelScope {
    /// Empty scope.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            handles: Vec::new(),
        }
    }

    /// Build a scope by running `setup`. On error the partially built scope is dropped,
    /// releasing whatever it had already registered.
    pub fn acquire<F>(
        timeline: &mut Timeline,
        label: impl Into<String>,
        setup: F,
    ) -> PrismaResult<Self>
    where
        F: FnOnce(&mut Self, &mut Timeline) -> PrismaResult<()>,
    {
        let mut scope = Self::new(label);
        setup(&mut scope, timeline)?;
        tracing::debug!(scope = %scope.label, channels = scope.len(), "scope acquired");
        Ok(scope)
    }

    /// Scope label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Register a channel into this scope.
    pub fn register(&mut self, timeline: &mut Timeline, spec: ChannelSpec) -> PrismaResult<()> {
        self.register_with(timeline, spec, ChannelCallbacks::none())
    }

    /// Register a channel with callbacks into this scope.
    pub fn register_with(
        &mut self,
        timeline: &mut Timeline,
        spec: ChannelSpec,
        callbacks: ChannelCallbacks,
    ) -> PrismaResult<()> {
        let handle = timeline.register(spec, callbacks)?;
        self.handles.push(handle);
        Ok(())
    }

    /// First handle with this channel name.
    pub fn handle(&self, name: &str) -> Option<&ChannelHandle> {
        self.handles.iter().find(|h| h.name() == name)
    }

    /// Current value of the named channel.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.handle(name).map(ChannelHandle::value)
    }

    /// Current value of the named channel, or `fallback` when absent.
    pub fn value_or(&self, name: &str, fallback: f64) -> f64 {
        self.value(name).unwrap_or(fallback)
    }

    /// Release the named channels, keeping the rest.
    pub fn release_named(&mut self, name: &str) -> usize {
        let before = self.handles.len();
        self.handles.retain(|h| h.name() != name);
        before - self.handles.len()
    }

    /// Number of owned handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// `true` when the scope owns nothing.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Release everything now.
    pub fn release(self) {}
}

impl Drop for ChannelScope {
    fn drop(&mut self) {
        if !self.handles.is_empty() {
            tracing::debug!(scope = %self.label, channels = self.handles.len(), "scope released");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scope.rs"]
mod tests;
