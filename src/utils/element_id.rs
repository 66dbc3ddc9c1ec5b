use gpui::{ElementId, SharedString};

/// Derives child ids for the keyed state a component stores under its own id.
pub trait ElementIdExt {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}
