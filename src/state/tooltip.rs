#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

/// Which tooltip, if any, is currently shown. At most one is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TooltipState {
    visible: Option<&'static str>,
}

impl TooltipState {
    pub fn show(&mut self, id: &'static str) {
        self.visible = Some(id);
    }

    /// Hide `id` if it is the visible tooltip; another tooltip stays up.
    pub fn hide(&mut self, id: &'static str) {
        if self.visible == Some(id) {
            self.visible = None;
        }
    }

    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible == Some(id)
    }

    #[must_use]
    pub fn visible(&self) -> Option<&'static str> {
        self.visible
    }
}
