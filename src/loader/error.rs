//! Error management.

use super::TopologyRule;
use pest::error::LineColLocation;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Err>;

#[derive(Debug)]
pub enum Err {
    /// The topology file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line does not follow `vertex (neighbor weight)*`.
    Syntax(pest::error::Error<TopologyRule>),
}

impl Err {
    /// The 1-based input line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Err::Io { .. } => None,
            Err::Syntax(e) => match e.line_col {
                LineColLocation::Pos((line, _)) | LineColLocation::Span((line, _), _) => {
                    Some(line)
                }
            },
        }
    }
}

impl std::fmt::Display for Err {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Err::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Err::Syntax(e) => write!(f, "malformed topology\n{}", e),
        }
    }
}

impl std::error::Error for Err {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Err::Io { source, .. } => Some(source),
            Err::Syntax(_) => None,
        }
    }
}

impl From<pest::error::Error<TopologyRule>> for Err {
    fn from(e: pest::error::Error<TopologyRule>) -> Self {
        Err::Syntax(e)
    }
}
