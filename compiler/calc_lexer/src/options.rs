//! Scanner configuration.

/// How the scanner maintains line numbers across whitespace.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LineTracking {
    /// Newlines inside skipped whitespace start a new line.
    #[default]
    Accurate,
    /// Line stays at 1 and the line start at offset 0 for the whole scan,
    /// so every column is `offset + 1`. Matches the historical reference
    /// scanner, for output comparisons.
    Reference,
}

/// Options for a single scan.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScanOptions {
    pub line_tracking: LineTracking,
}

impl ScanOptions {
    pub const fn new() -> Self {
        ScanOptions {
            line_tracking: LineTracking::Accurate,
        }
    }

    #[must_use]
    pub const fn with_line_tracking(mut self, line_tracking: LineTracking) -> Self {
        self.line_tracking = line_tracking;
        self
    }
}
