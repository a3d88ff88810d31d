//! Section header recognition for network definition files

use crate::constants::inp_sections;
use std::fmt;

/// Section currently being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InpSection {
    #[default]
    None,
    Junctions,
    Tanks,
    Reservoirs,
    Pipes,
    Pumps,
}

impl InpSection {
    /// Classify a trimmed `[...]` header line; unknown headers map to `None`
    pub fn from_header(header: &str) -> Self {
        let matches = |marker: &str| header.eq_ignore_ascii_case(marker);

        if matches(inp_sections::JUNCTIONS) {
            Self::Junctions
        } else if matches(inp_sections::TANKS) {
            Self::Tanks
        } else if matches(inp_sections::RESERVOIRS) {
            Self::Reservoirs
        } else if matches(inp_sections::PIPES) {
            Self::Pipes
        } else if matches(inp_sections::PUMPS) {
            Self::Pumps
        } else {
            Self::None
        }
    }
}

impl fmt::Display for InpSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "NONE",
            Self::Junctions => "JUNCTIONS",
            Self::Tanks => "TANKS",
            Self::Reservoirs => "RESERVOIRS",
            Self::Pipes => "PIPES",
            Self::Pumps => "PUMPS",
        };
        f.write_str(name)
    }
}
