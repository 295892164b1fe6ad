//! Bundle-analyzer report naming.
//!
//! A deployed build runs two bundler passes, legacy then modern, and each
//! registers the analyzer with its own report filename. The naming state is
//! an explicit two-state machine owned by whoever orchestrates the passes,
//! so an accidental third registration is visible at the call site rather
//! than hidden in process-wide state.

use serde::{Deserialize, Serialize};

/// Report filename for the first (legacy) analyzer pass.
pub const LEGACY_REPORT: &str = "report-legacy.html";

/// Report filename for every later (modern) analyzer pass.
pub const MODERN_REPORT: &str = "report-modern.html";

/// Naming state for sequential analyzer-pass registrations.
///
/// `AwaitingFirst → Saturated`: the first call to [`ReportNaming::next`]
/// yields the legacy name and saturates; every later call yields the modern
/// name. A build registers exactly two passes, so a third call aliasing
/// onto the modern name indicates a pipeline change, not a supported case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportNaming {
    /// No pass registered yet; the next one is the legacy pass.
    #[default]
    AwaitingFirst,
    /// The legacy pass is registered; everything further is modern.
    Saturated,
}

impl ReportNaming {
    /// Create the initial naming state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the report filename for the next analyzer pass and advance.
    pub fn next(&mut self) -> &'static str {
        match self {
            Self::AwaitingFirst => {
                *self = Self::Saturated;
                LEGACY_REPORT
            }
            Self::Saturated => MODERN_REPORT,
        }
    }

    /// Whether the legacy pass has already been named.
    pub fn is_saturated(&self) -> bool {
        matches!(self, Self::Saturated)
    }
}

/// Pure equivalent of [`ReportNaming`] keyed by a per-build call index.
pub fn report_filename(call_index: usize) -> &'static str {
    if call_index == 0 {
        LEGACY_REPORT
    } else {
        MODERN_REPORT
    }
}

/// Analyzer plugin options for one build pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerSettings {
    /// Analyzer output mode; always a static HTML report.
    pub analyzer_mode: String,
    /// Which size metric the report leads with.
    pub default_sizes: String,
    /// Whether to also dump a raw stats file.
    pub generate_stats_file: bool,
    /// Report filename for this pass.
    pub report_filename: String,
}

impl AnalyzerSettings {
    /// Settings for the next analyzer pass, consuming one naming step.
    pub fn for_pass(naming: &mut ReportNaming) -> Self {
        Self {
            analyzer_mode: "static".to_string(),
            default_sizes: "gzip".to_string(),
            generate_stats_file: false,
            report_filename: naming.next().to_string(),
        }
    }
}
