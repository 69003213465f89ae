//! Errors produced while loading OBJ meshes.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Vertex attribute list a face index points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Position => "position",
            Attribute::TexCoord => "texture coordinate",
            Attribute::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// Reasons an OBJ mesh could not be built. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("failed to open OBJ file {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("malformed vertex line {line} '{text}': {reason}")]
    MalformedVertexLine {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("malformed face line {line} '{text}': {reason}")]
    MalformedFaceLine {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("{attribute} index {index} on line {line} is out of range (have {len})")]
    IndexOutOfRange {
        line: usize,
        attribute: Attribute,
        index: i64,
        len: usize,
    },
}

pub type ObjResult<T> = Result<T, ObjError>;
