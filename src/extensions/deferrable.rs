use gpui::{AnyElement, IntoElement, deferred};

/// Configuration for deferred rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredConfig {
    /// Whether deferred rendering is enabled.
    pub enabled: bool,
    /// The priority for deferred rendering. Higher priority elements are painted later.
    pub priority: Option<usize>,
}

impl Default for DeferredConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

impl DeferredConfig {
    /// Creates a new config with deferring enabled and no custom priority.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            priority: None,
        }
    }

    /// Creates a new config with deferring disabled.
    ///
    /// The element is then painted in tree order, so it only covers siblings
    /// that come before it.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            priority: None,
        }
    }

    /// Creates a new config with deferring enabled and a custom priority.
    pub fn priority(priority: usize) -> Self {
        Self {
            enabled: true,
            priority: Some(priority),
        }
    }
}

/// A trait for components that paint above the content they are placed in.
///
/// Deferred elements keep their layout position but are painted after the
/// rest of the window, ordered by priority.
pub trait Deferrable: Sized {
    /// The priority used when deferring is enabled but no custom priority is set.
    const DEFAULT_PRIORITY: usize = 0;

    /// Returns a reference to the deferred configuration.
    fn deferred_config(&self) -> &DeferredConfig;

    /// Returns a mutable reference to the deferred configuration.
    fn deferred_config_mut(&mut self) -> &mut DeferredConfig;

    /// Enables or disables deferred rendering.
    fn deferred(mut self, enabled: bool) -> Self {
        self.deferred_config_mut().enabled = enabled;
        self
    }

    /// Sets a custom paint priority and enables deferring.
    fn deferred_priority(mut self, priority: usize) -> Self {
        *self.deferred_config_mut() = DeferredConfig::priority(priority);
        self
    }

    /// The priority this element will be painted with, if deferred.
    fn effective_priority(&self) -> Option<usize> {
        let config = self.deferred_config();
        config
            .enabled
            .then(|| config.priority.unwrap_or(Self::DEFAULT_PRIORITY))
    }

    /// Wraps an element with deferred rendering based on the current configuration.
    fn apply_deferred(&self, element: impl IntoElement) -> AnyElement {
        match self.effective_priority() {
            Some(priority) => deferred(element).with_priority(priority).into_any_element(),
            None => element.into_any_element(),
        }
    }
}
