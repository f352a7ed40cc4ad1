//! Responsive layout state.
//!
//! Three signals decide how much horizontal space the side panel reserves:
//! device class, login state and panel visibility. The derived width is
//! published through a [`LayoutBridge`] to every consumer that offsets itself
//! by the panel (input bar, content area) without those consumers sharing any
//! other state.

/// CSS custom property carrying the reserved panel width.
pub const PANEL_WIDTH_VAR: &str = "--sidebar-visible-width";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Viewports narrower than this are mobile.
    pub mobile_breakpoint_px: u32,
    pub panel_width_px: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 640,
            panel_width_px: 260,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutSignals {
    pub is_mobile: bool,
    pub sidebar_visible: bool,
    pub is_logged_in: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutStore {
    config: LayoutConfig,
    signals: LayoutSignals,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutStore {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            signals: LayoutSignals::default(),
        }
    }

    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    pub fn signals(&self) -> LayoutSignals {
        self.signals
    }

    pub fn is_mobile(&self) -> bool {
        self.signals.is_mobile
    }

    pub fn sidebar_visible(&self) -> bool {
        self.signals.sidebar_visible
    }

    pub fn is_logged_in(&self) -> bool {
        self.signals.is_logged_in
    }

    /// Feed a viewport width. Returns whether the device class changed.
    pub fn set_viewport_width(&mut self, width_px: u32) -> bool {
        let is_mobile = width_px < self.config.mobile_breakpoint_px;
        if is_mobile == self.signals.is_mobile {
            return false;
        }
        self.signals.is_mobile = is_mobile;
        self.reset_visibility();
        tracing::debug!(width_px, is_mobile, "device class changed");
        true
    }

    /// Set the local login flag. Returns whether it changed.
    pub fn set_logged_in(&mut self, logged_in: bool) -> bool {
        if logged_in == self.signals.is_logged_in {
            return false;
        }
        self.signals.is_logged_in = logged_in;
        self.reset_visibility();
        tracing::debug!(logged_in, "login state changed");
        true
    }

    /// Flip panel visibility. Holds until the next device-class or login change.
    pub fn toggle_panel(&mut self) {
        self.signals.sidebar_visible = !self.signals.sidebar_visible;
    }

    pub fn close_panel(&mut self) {
        self.signals.sidebar_visible = false;
    }

    /// Width the panel reserves in the page flow. Zero on mobile, where the
    /// panel floats over the content instead.
    pub fn reserved_width_px(&self) -> u32 {
        if !self.signals.is_mobile && self.signals.sidebar_visible {
            self.config.panel_width_px
        } else {
            0
        }
    }

    /// Whether the mobile scrim behind the floating panel is shown.
    pub fn shows_overlay(&self) -> bool {
        self.signals.is_mobile && self.signals.sidebar_visible
    }

    fn reset_visibility(&mut self) {
        self.signals.sidebar_visible = !self.signals.is_mobile && self.signals.is_logged_in;
    }
}

/// Receiver of the reserved panel width.
pub trait LayoutSink {
    fn publish(&mut self, reserved_width_px: u32);
}

/// Publishes the store's derived width to a sink, only when it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutBridge {
    published: Option<u32>,
}

impl LayoutBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Option<u32> {
        self.published
    }

    /// Returns whether the sink was written.
    pub fn sync<S: LayoutSink + ?Sized>(&mut self, store: &LayoutStore, sink: &mut S) -> bool {
        let width = store.reserved_width_px();
        if self.published == Some(width) {
            return false;
        }
        sink.publish(width);
        self.published = Some(width);
        true
    }
}

/// `260` -> `"260px"`
pub fn css_px(value: u32) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink(Vec<u32>);

    impl LayoutSink for RecordingSink {
        fn publish(&mut self, reserved_width_px: u32) {
            self.0.push(reserved_width_px);
        }
    }

    fn store() -> LayoutStore {
        LayoutStore::new(LayoutConfig::default())
    }

    #[test]
    fn starts_closed_logged_out_desktop() {
        let layout = store();
        assert_eq!(layout.signals(), LayoutSignals::default());
        assert_eq!(layout.reserved_width_px(), 0);
    }

    #[test]
    fn login_on_desktop_opens_panel_and_logout_closes_it() {
        let mut layout = store();
        assert!(layout.set_logged_in(true));
        assert!(layout.sidebar_visible());
        assert_eq!(layout.reserved_width_px(), 260);

        assert!(layout.set_logged_in(false));
        assert!(!layout.sidebar_visible());
        assert_eq!(layout.reserved_width_px(), 0);
    }

    #[test]
    fn going_mobile_forces_panel_closed() {
        let mut layout = store();
        layout.set_logged_in(true);
        assert!(layout.sidebar_visible());

        assert!(layout.set_viewport_width(400));
        assert!(layout.is_mobile());
        assert!(!layout.sidebar_visible());

        // back to desktop re-applies the login rule
        assert!(layout.set_viewport_width(1280));
        assert!(layout.sidebar_visible());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let mut layout = store();
        layout.set_viewport_width(639);
        assert!(layout.is_mobile());
        layout.set_viewport_width(640);
        assert!(!layout.is_mobile());
    }

    #[test]
    fn repeated_viewport_events_do_not_reset_toggle() {
        let mut layout = store();
        layout.toggle_panel();
        assert!(layout.sidebar_visible());

        assert!(!layout.set_viewport_width(1280));
        assert!(!layout.set_viewport_width(1024));
        assert!(layout.sidebar_visible());

        assert!(!layout.set_logged_in(false));
        assert!(layout.sidebar_visible());
    }

    #[test]
    fn device_class_change_overrides_a_manual_close() {
        let mut layout = store();
        layout.set_logged_in(true);
        layout.toggle_panel();
        assert!(!layout.sidebar_visible());

        layout.set_viewport_width(500);
        assert!(!layout.sidebar_visible());
        layout.set_viewport_width(1280);
        assert!(layout.sidebar_visible());
    }

    #[test]
    fn login_changes_override_a_manual_open() {
        let mut layout = store();
        layout.toggle_panel();
        assert!(layout.sidebar_visible());

        layout.set_logged_in(true);
        assert!(layout.sidebar_visible());
        layout.set_logged_in(false);
        assert!(!layout.sidebar_visible());
        assert_eq!(layout.reserved_width_px(), 0);
    }

    #[test]
    fn toggle_on_mobile_shows_overlay_without_reserving_width() {
        let mut layout = store();
        layout.set_viewport_width(320);
        layout.toggle_panel();
        assert!(layout.sidebar_visible());
        assert!(layout.shows_overlay());
        assert_eq!(layout.reserved_width_px(), 0);

        layout.close_panel();
        assert!(!layout.shows_overlay());
    }

    #[test]
    fn reserved_width_for_every_signal_combination() {
        for bits in 0u8..8 {
            let signals = LayoutSignals {
                is_mobile: bits & 1 != 0,
                sidebar_visible: bits & 2 != 0,
                is_logged_in: bits & 4 != 0,
            };
            let layout = LayoutStore {
                config: LayoutConfig::default(),
                signals,
            };
            let expected = if !signals.is_mobile && signals.sidebar_visible {
                260
            } else {
                0
            };
            assert_eq!(layout.reserved_width_px(), expected, "{signals:?}");
        }
    }

    #[test]
    fn bridge_publishes_only_on_change() {
        let mut layout = store();
        let mut bridge = LayoutBridge::new();
        let mut sink = RecordingSink::default();

        assert!(bridge.sync(&layout, &mut sink));
        assert!(!bridge.sync(&layout, &mut sink));

        layout.set_logged_in(true);
        assert!(bridge.sync(&layout, &mut sink));

        // toggling on mobile changes visibility but not the width
        layout.set_viewport_width(300);
        bridge.sync(&layout, &mut sink);
        layout.toggle_panel();
        assert!(!bridge.sync(&layout, &mut sink));

        assert_eq!(sink.0, vec![0, 260, 0]);
        assert_eq!(bridge.published(), Some(0));
    }

    #[test]
    fn css_px_formats_lengths() {
        assert_eq!(css_px(0), "0px");
        assert_eq!(css_px(260), "260px");
    }
}
