use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// A UTC timestamp as stored and returned by the backend.
///
/// Values stay in UTC everywhere in client state. Conversion to the viewer's
/// offset happens through [`Timestamp::localize`], which returns the distinct
/// [`LocalTimestamp`] type; a localized value cannot be localized again, so
/// the conversion is applied exactly once per displayed timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Shift this UTC instant into the given viewer offset for display.
    #[must_use]
    pub fn localize(&self, offset: FixedOffset) -> LocalTimestamp {
        LocalTimestamp(self.0.with_timezone(&offset))
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.0.format("%Y-%m-%d %H:%M:%S").to_string() }
    }
}

/// A timestamp already shifted into the viewer's local offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTimestamp(pub DateTime<FixedOffset>);

impl LocalTimestamp {
    /// Long display form used next to message bubbles.
    #[must_use]
    pub fn display(&self) -> String {
        self.0.format("%B %e, %Y %H:%M:%S %:z").to_string()
    }
}

impl ToHtml for LocalTimestamp {
    fn to_html(&self) -> Html {
        html! { self.display() }
    }
}
