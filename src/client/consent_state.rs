use crate::common::Icon;

/// Local state of the consent dialog. Lives as long as the mounted dialog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsentState {
    agreed: bool,
    privacy_notice_expanded: bool,
}

impl ConsentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agreed(&self) -> bool {
        self.agreed
    }

    pub fn privacy_notice_expanded(&self) -> bool {
        self.privacy_notice_expanded
    }

    pub fn toggle_agreement(&mut self, checked: bool) {
        self.agreed = checked;
    }

    pub fn toggle_privacy_notice(&mut self) {
        self.privacy_notice_expanded = !self.privacy_notice_expanded;
    }

    pub fn can_submit(&self) -> bool {
        self.agreed
    }

    /// Calls `on_accept` if the user has agreed. Returns whether it was called.
    ///
    /// Closing the dialog is left to whoever owns its visibility.
    pub fn submit(&self, on_accept: impl FnOnce()) -> bool {
        if !self.can_submit() {
            return false;
        }

        on_accept();
        true
    }

    /// Dismissing (escape) accepts whether or not the box is ticked, as long as
    /// `dismiss_accepts` is on. Returns whether `on_accept` was called.
    pub fn dismiss(&self, dismiss_accepts: bool, on_accept: impl FnOnce()) -> bool {
        if !dismiss_accepts {
            return false;
        }

        on_accept();
        true
    }

    pub fn privacy_toggle_label(&self) -> &'static str {
        if self.privacy_notice_expanded {
            "Hide Privacy Notice"
        } else {
            "Show Privacy Notice"
        }
    }

    pub fn privacy_toggle_icon(&self) -> Icon {
        if self.privacy_notice_expanded {
            Icon::ChevronUp
        } else {
            Icon::ChevronDown
        }
    }
}
