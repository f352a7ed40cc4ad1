//! Input bar buffer with an autosizing height.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    pub line_height_px: u32,
    pub min_height_px: u32,
    pub max_height_px: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            line_height_px: 24,
            min_height_px: 24,
            max_height_px: 200,
        }
    }
}

/// What a key press in the input means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Submit,
    /// Shift+Enter: the textarea inserts a newline, never a submit.
    Newline,
    Edit,
}

pub fn classify_key(is_enter: bool, shift: bool) -> KeyIntent {
    match (is_enter, shift) {
        (true, false) => KeyIntent::Submit,
        (true, true) => KeyIntent::Newline,
        _ => KeyIntent::Edit,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    config: InputConfig,
    text: String,
    height_px: u32,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputBuffer {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            text: String::new(),
            height_px: config.min_height_px,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.height_px = self.clamp_height(self.estimated_content_height());
    }

    /// Recompute the height from a measured content height (the textarea's
    /// scroll height).
    pub fn autosize(&mut self, content_height_px: u32) -> u32 {
        self.height_px = self.clamp_height(content_height_px);
        self.height_px
    }

    /// Take the text for sending. Returns it as typed, untrimmed, and clears
    /// the buffer; blank text stays put and yields `None`.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let text = std::mem::take(&mut self.text);
        self.height_px = self.config.min_height_px;
        Some(text)
    }

    fn estimated_content_height(&self) -> u32 {
        let lines = self.text.split('\n').count() as u32;
        lines.saturating_mul(self.config.line_height_px)
    }

    fn clamp_height(&self, content_height_px: u32) -> u32 {
        content_height_px.clamp(self.config.min_height_px, self.config.max_height_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits_and_shift_enter_breaks_line() {
        assert_eq!(classify_key(true, false), KeyIntent::Submit);
        assert_eq!(classify_key(true, true), KeyIntent::Newline);
        assert_eq!(classify_key(false, false), KeyIntent::Edit);
        assert_eq!(classify_key(false, true), KeyIntent::Edit);
    }

    #[test]
    fn submit_returns_untrimmed_text_and_clears() {
        let mut input = InputBuffer::default();
        input.set_text("  hello\n");
        assert_eq!(input.submit().as_deref(), Some("  hello\n"));
        assert_eq!(input.text(), "");
        assert_eq!(input.height_px(), 24);
    }

    #[test]
    fn blank_submit_is_a_noop() {
        let mut input = InputBuffer::default();
        input.set_text(" \n ");
        assert!(!input.can_submit());
        assert_eq!(input.submit(), None);
        assert_eq!(input.text(), " \n ");
    }

    #[test]
    fn each_line_grows_the_estimate() {
        let mut input = InputBuffer::default();
        input.set_text("first");
        assert_eq!(input.height_px(), 24);
        input.set_text("first\n");
        assert_eq!(input.height_px(), 48);
    }

    #[test]
    fn height_is_clamped() {
        let mut input = InputBuffer::default();
        input.set_text("x\n".repeat(20));
        assert_eq!(input.height_px(), 200);

        assert_eq!(input.autosize(0), 24);
        assert_eq!(input.autosize(130), 130);
        assert_eq!(input.autosize(5000), 200);
    }
}
