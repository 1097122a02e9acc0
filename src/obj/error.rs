//! Error types for OBJ loading.

/// Errors that can occur while loading an OBJ file.
#[derive(Debug)]
pub enum ObjError {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// A directive could not be parsed.
    Malformed {
        /// 1-based line number in the input.
        line: usize,
        /// What went wrong on that line.
        message: String,
    },
    /// The file contains no face directives.
    NoFaces,
    /// Some faces carry a normal or UV index and others do not.
    AttributeIndexMismatch {
        /// Which attribute is inconsistent (`"normal"` or `"uv"`).
        attribute: &'static str,
        /// Number of vertex index occurrences.
        expected: usize,
        /// Number of attribute index occurrences.
        actual: usize,
    },
    /// A face references an attribute past the end of its array.
    IndexOutOfRange {
        /// Which attribute array is overrun (`"position"`, `"normal"` or `"uv"`).
        attribute: &'static str,
        /// The offending 0-based index.
        index: u32,
        /// Length of the referenced array.
        count: usize,
    },
}

impl std::fmt::Display for ObjError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Malformed { line, message } => {
                write!(f, "malformed directive at line {line}: {message}")
            }
            Self::NoFaces => write!(f, "no faces found in OBJ input"),
            Self::AttributeIndexMismatch {
                attribute,
                expected,
                actual,
            } => write!(
                f,
                "{attribute} indices present on {actual} of {expected} face vertices"
            ),
            Self::IndexOutOfRange {
                attribute,
                index,
                count,
            } => write!(
                f,
                "{attribute} index {} out of range (only {count} defined)",
                index + 1
            ),
        }
    }
}

impl std::error::Error for ObjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ObjError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
