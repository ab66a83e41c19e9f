use strum_macros::{EnumIter, IntoStaticStr};

/// The glyphs the consent dialog draws next to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Icon {
    CheckMark,
    Cancel,
    Lock,
    Feedback,
    Phone,
    Mail,
    Robot,
    ChevronUp,
    ChevronDown,
}

impl Icon {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::CheckMark => "✓",
            Self::Cancel => "✕",
            Self::Lock => "🔒",
            Self::Feedback => "💬",
            Self::Phone => "☎",
            Self::Mail => "✉",
            Self::Robot => "🤖",
            Self::ChevronUp => "▲",
            Self::ChevronDown => "▼",
        }
    }

    pub fn class(self) -> String {
        format!("icon icon-{}", self.name())
    }
}
