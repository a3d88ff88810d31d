//! Section banner recognition for report files

use crate::constants::{REPORT_SECTION_PREFIX, report_sections};
use std::fmt;

/// Report section currently being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportSection {
    #[default]
    None,
    NodeResults,
    LinkResults,
    SystemWide,
}

impl ReportSection {
    /// Section named by a trimmed line, if the line contains a marker
    pub fn from_marker(line: &str) -> Option<Self> {
        if line.contains(report_sections::NODE_RESULTS) {
            Some(Self::NodeResults)
        } else if line.contains(report_sections::LINK_RESULTS) {
            Some(Self::LinkResults)
        } else if line.contains(report_sections::SYSTEM_WIDE) {
            Some(Self::SystemWide)
        } else {
            None
        }
    }

    /// Classify a trimmed line as a section header
    ///
    /// Lines holding a marker select that section. `**` banners without a
    /// marker close the current section. Anything else is content.
    pub fn classify(line: &str) -> Option<Self> {
        match Self::from_marker(line) {
            Some(section) => Some(section),
            None if line.starts_with(REPORT_SECTION_PREFIX) => Some(Self::None),
            None => None,
        }
    }
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::NodeResults => "Node Results",
            Self::LinkResults => "Link Results",
            Self::SystemWide => "System Wide",
        };
        f.write_str(name)
    }
}
