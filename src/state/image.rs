#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Image source that swaps to a placeholder on the first load failure only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFallback {
    src: String,
    fallback: String,
    armed: bool,
}

impl ImageFallback {
    #[must_use]
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fallback: fallback.into(),
            armed: true,
        }
    }

    /// Current `src` attribute value.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Handle an `error` event. Returns `true` if the source was swapped.
    pub fn on_error(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.src.clone_from(&self.fallback);
        true
    }
}
