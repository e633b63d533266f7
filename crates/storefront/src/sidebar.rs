//! Sidebar open/closed state.
//!
//! Two states, no animation timing: the toggle control flips the state,
//! and any click outside both the sidebar and its toggle control while
//! open forces it closed.

/// Where a document click landed, relative to the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the sidebar itself.
    Sidebar,
    /// On the toggle control.
    Toggle,
    /// Anywhere else on the page.
    Outside,
}

/// The sidebar toggle state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    /// Create a closed sidebar.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Whether the sidebar is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and closed.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Handle a document-level click.
    ///
    /// Clicks inside the sidebar or on the toggle control are left to
    /// their own handlers; an outside click closes an open sidebar.
    pub const fn handle_document_click(&mut self, target: ClickTarget) {
        if matches!(target, ClickTarget::Outside) {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let mut sidebar = Sidebar::new();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(sidebar.is_open());
        sidebar.toggle();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_outside_click_closes_when_open() {
        let mut sidebar = Sidebar::new();
        sidebar.toggle();
        sidebar.handle_document_click(ClickTarget::Outside);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_inside_clicks_leave_state_alone() {
        let mut sidebar = Sidebar::new();
        sidebar.toggle();
        sidebar.handle_document_click(ClickTarget::Sidebar);
        assert!(sidebar.is_open());
        sidebar.handle_document_click(ClickTarget::Toggle);
        assert!(sidebar.is_open());
    }

    #[test]
    fn test_outside_click_on_closed_sidebar_is_noop() {
        let mut sidebar = Sidebar::new();
        sidebar.handle_document_click(ClickTarget::Outside);
        assert!(!sidebar.is_open());
    }
}
