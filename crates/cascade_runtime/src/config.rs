//! Configuration for the demo driver.

/// Default tracing filter when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Controls how the demo walkthrough is presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Print which layer each resolved value came from.
    pub show_origins: bool,

    /// Print a heading before each step of the walkthrough.
    pub narrate: bool,

    /// Tracing filter directive; `None` defers to `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            show_origins: false,
            narrate: true,
            log_filter: None,
        }
    }
}

impl DemoConfig {
    /// Creates a configuration that prints bare values only.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            narrate: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that shows origins and logs layer bookkeeping.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            show_origins: true,
            narrate: true,
            log_filter: Some("cascade_map=trace".to_string()),
        }
    }

    /// Builder method to toggle origin annotations.
    #[must_use]
    pub fn with_origins(mut self, show_origins: bool) -> Self {
        self.show_origins = show_origins;
        self
    }

    /// Builder method to toggle step headings.
    #[must_use]
    pub fn with_narration(mut self, narrate: bool) -> Self {
        self.narrate = narrate;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }
}
