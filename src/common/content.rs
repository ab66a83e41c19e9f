//! Fixed text of the terms and conditions dialog.

use super::{Config, Icon};
use std::borrow::Cow;

pub const TITLE: &str = "Terms and Conditions and Privacy Notice";
pub const WELCOME: &str = "Welcome to the MHRA People Chatbot!";
pub const PRIVACY_HEADING: &str = "Privacy Notice";
pub const AGREEMENT_LABEL: &str = "I agree to the terms and conditions";
pub const SUBMIT_LABEL: &str = "Submit";

pub const FEEDBACK_EMAIL: &str = "engineering-ai@mhra.gov.uk";
pub const PRIVACY_NOTICE_URL: &str =
    "https://insite/wp-content/uploads/2019/03/Privacy-notice-employees.pdf";
pub const PRIVACY_NOTICE_LINK_TEXT: &str = "MHRA internal privacy notice for staff";

/// A run of text inside a rich paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(Cow<'static, str>),
    /// A `mailto:` contact address. Rendered only, never handled.
    MailTo(&'static str),
    /// Opened in a new browsing context with no handle back to this page.
    ExternalLink {
        label: &'static str,
        href: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointText {
    Plain(Cow<'static, str>),
    Rich(Vec<Inline>),
}

impl PointText {
    fn plain(s: &'static str) -> Self {
        Self::Plain(Cow::Borrowed(s))
    }

    /// The text with markup stripped, mail addresses and link labels included.
    pub fn to_plain_string(&self) -> String {
        match self {
            Self::Plain(s) => s.to_string(),
            Self::Rich(parts) => parts
                .iter()
                .map(|part| match part {
                    Inline::Text(s) => &**s,
                    Inline::MailTo(address) => *address,
                    Inline::ExternalLink { label, .. } => *label,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPoint {
    pub text: PointText,
    pub icon: Icon,
}

impl DisplayPoint {
    fn new(icon: Icon, text: PointText) -> Self {
        Self { text, icon }
    }
}

/// What the bot can and can't do, in the order it's shown.
pub fn display_points() -> Vec<DisplayPoint> {
    vec![
        DisplayPoint::new(
            Icon::CheckMark,
            PointText::plain(
                "I provide general People Team (previously known as HR) information and guidance.",
            ),
        ),
        DisplayPoint::new(
            Icon::Cancel,
            PointText::plain("I don’t replace People Team professionals or give legal advice."),
        ),
        DisplayPoint::new(
            Icon::Cancel,
            PointText::plain(
                "I am unable to provide any individualised responses as I don’t have access to any systems containing your personal data, i.e. Oracle Fusion.",
            ),
        ),
        DisplayPoint::new(
            Icon::Lock,
            PointText::plain(
                "Your chats are confidential and anonymised, but will be stored and analysed, so please avoid sharing any data of a sensitive and personal nature.",
            ),
        ),
        DisplayPoint::new(
            Icon::Feedback,
            PointText::plain(
                "Anonymised feedback you provide about my responses on the chat interface will be used to improve the accuracy and appropriateness of my responses.",
            ),
        ),
        DisplayPoint::new(
            Icon::Phone,
            PointText::plain("For complex issues, please consult the People team directly."),
        ),
        DisplayPoint::new(
            Icon::Mail,
            PointText::Rich(vec![
                Inline::Text(Cow::Borrowed(
                    "We would love your feedback! Please either rate my responses through the chat interface, or you can reach out to the Engineering Team at ",
                )),
                Inline::MailTo(FEEDBACK_EMAIL),
                Inline::Text(Cow::Borrowed(" with your comments.")),
            ]),
        ),
    ]
}

pub fn privacy_bullets(config: &Config) -> Vec<PointText> {
    vec![
        PointText::plain(
            "The only personal information we collect are your user queries, so please do not volunteer personal information.",
        ),
        PointText::plain(
            "Each conversation is anonymised. So unless you voluntarily offer personal information that can be traced back to you, we will not be able to link a conversation to an individual.",
        ),
        PointText::Plain(Cow::Owned(format!(
            "Data is retained for {}.",
            config.retention_period()
        ))),
        PointText::plain(
            "Purpose of data collection and processing: answering your People Team queries and performing analysis on your queries to understand what kind of queries are being.",
        ),
        PointText::plain("The legal basis for processing your data is for legitimate interests."),
        PointText::plain(
            "Your data is retained internally and not shared externally with any third parties.",
        ),
        PointText::Rich(vec![
            Inline::Text(Cow::Borrowed("For more details, see the ")),
            Inline::ExternalLink {
                label: PRIVACY_NOTICE_LINK_TEXT,
                href: PRIVACY_NOTICE_URL,
            },
            Inline::Text(Cow::Borrowed(".")),
        ]),
    ]
}
