use std::time::Duration;

const DEFAULT_CLOSE_DELAY: Duration = Duration::from_secs(2);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_DIALOG_DISMISS: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStyle {
    /// Message element inside the open modal.
    #[default]
    Inline,
    /// Separate dialog shown on top of the page.
    Dialog,
}

/// Knobs that cover the different flavours of the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub include_location_field: bool,
    pub feedback_style: FeedbackStyle,
    // zero closes the modal as soon as the insert succeeds
    pub close_delay: Duration,
    pub dialog_auto_dismiss: Option<Duration>,
    pub request_timeout: Duration,
    pub analytics: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            include_location_field: true,
            feedback_style: FeedbackStyle::Inline,
            close_delay: DEFAULT_CLOSE_DELAY,
            dialog_auto_dismiss: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            analytics: true,
        }
    }
}

impl PageOptions {
    pub fn dialog() -> Self {
        Self {
            feedback_style: FeedbackStyle::Dialog,
            close_delay: Duration::ZERO,
            dialog_auto_dismiss: Some(DEFAULT_DIALOG_DISMISS),
            ..Self::default()
        }
    }

    pub fn with_location_field(mut self, include: bool) -> Self {
        self.include_location_field = include;
        self
    }

    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_analytics(mut self, analytics: bool) -> Self {
        self.analytics = analytics;
        self
    }

    pub fn closes_immediately(&self) -> bool {
        self.close_delay.is_zero()
    }
}
