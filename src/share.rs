//! Share text formatting and the sharing boundary.

use thiserror::Error;

pub const SOLD_PLACEHOLDER: &str = "{sold}";
pub const REVENUE_PLACEHOLDER: &str = "{revenue}";

/// Errors reported by a sharing facility.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("No sharing facility available: {0}")]
    Unavailable(String),

    #[error("Sharing failed: {0}")]
    Failed(String),
}

/// Destination for share text (clipboard, test spy, ...).
pub trait ShareSink {
    fn share(&mut self, text: &str) -> Result<(), ShareError>;
}

/// Fill `{sold}` and `{revenue}` in `template`. Anything else is kept as is.
pub fn format_share_text(template: &str, units_sold: u64, total_revenue: u64) -> String {
    template
        .replace(SOLD_PLACEHOLDER, &units_sold.to_string())
        .replace(REVENUE_PLACEHOLDER, &total_revenue.to_string())
}
