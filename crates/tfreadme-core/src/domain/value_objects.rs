//! Small closed sets used across the domain.

use std::fmt;

// ============================================================================
// BlockKind
// ============================================================================

/// Top-level block types that carry module metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Variable,
    Output,
}

impl BlockKind {
    /// Block identifier as written in configuration files.
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Output => "output",
        }
    }

    /// Plural noun for log messages ("No variables detected.").
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Variable => "variables",
            Self::Output => "outputs",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

// ============================================================================
// Section
// ============================================================================

/// Fixed README sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Input,
    Output,
    Usage,
    Troubleshooting,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Self::Overview,
        Self::Input,
        Self::Output,
        Self::Usage,
        Self::Troubleshooting,
    ];

    pub const fn heading(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Input => "Input",
            Self::Output => "Output",
            Self::Usage => "Usage",
            Self::Troubleshooting => "Troubleshooting",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}
