//! Sidebar panel visibility

/// Open/closed state of the parameters panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Handle a pointer or focus event that landed outside the panel.
    ///
    /// Returns true if this closed the panel.
    pub fn close_on_outside_interaction(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }
}
