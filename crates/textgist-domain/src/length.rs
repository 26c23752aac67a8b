//! Length module - summary length presets

/// Requested summary length
///
/// Three presets are offered to callers. Any value outside of them maps to
/// `Generic`, which still yields a usable (concise) directive instead of an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryLength {
    /// Two or three sentences
    Short,

    /// Main points, moderately detailed
    #[default]
    Medium,

    /// Detailed, with supporting details and examples
    Long,

    /// Fallback for unrecognised values
    Generic,
}

impl SummaryLength {
    /// Get the preset name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
            SummaryLength::Generic => "generic",
        }
    }

    /// Parse a preset name, returning `None` for anything unrecognised
    ///
    /// Matching is exact: the form contract uses lowercase names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "short" => Some(SummaryLength::Short),
            "medium" => Some(SummaryLength::Medium),
            "long" => Some(SummaryLength::Long),
            _ => None,
        }
    }

    /// Resolve the optional `summary_length` form value
    ///
    /// Absent or blank means `Medium`; present but unrecognised means `Generic`.
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            None => SummaryLength::default(),
            Some(v) => Self::parse(v).unwrap_or(SummaryLength::Generic),
        }
    }

    /// The instruction appended to the system persona for this preset
    pub fn directive(&self) -> &'static str {
        match self {
            SummaryLength::Short => "Provide a very concise summary, ideally 2-3 sentences.",
            SummaryLength::Medium => {
                "Provide a moderately detailed summary, covering main points."
            }
            SummaryLength::Long => {
                "Provide a detailed summary, including key supporting details and examples."
            }
            SummaryLength::Generic => "Provide a concise summary.",
        }
    }
}

impl std::fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
