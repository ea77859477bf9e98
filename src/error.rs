//! Error types for the proof oracle

use std::error::Error;
use std::fmt::Display;

/// Error type for decoding a [`crate::Word`] from external input
#[derive(Debug, PartialEq, Clone)]
pub enum WordError {
    /// Input had the wrong byte width
    InvalidLength { expected: usize, got: usize },
    /// Input was not valid hexadecimal
    InvalidHex(hex::FromHexError),
}

impl Display for WordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordError::InvalidLength { expected, got } => {
                write!(f, "Expected {} bytes, got {}", expected, got)
            }
            WordError::InvalidHex(e) => write!(f, "Invalid hexadecimal input: {}", e),
        }
    }
}

impl Error for WordError {}

impl From<hex::FromHexError> for WordError {
    fn from(e: hex::FromHexError) -> Self {
        WordError::InvalidHex(e)
    }
}

/// Error type for proof boundary checks
#[derive(Debug, PartialEq, Clone)]
pub enum ProofError {
    /// Sibling path length does not match the expected tree depth
    DepthMismatch { expected: usize, got: usize },
    /// Word decoding failed
    Word(WordError),
}

impl Display for ProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProofError::DepthMismatch { expected, got } => {
                write!(f, "Expected a sibling path of length {}, got {}", expected, got)
            }
            ProofError::Word(e) => write!(f, "Word decoding failed: {}", e),
        }
    }
}

impl Error for ProofError {}

impl From<WordError> for ProofError {
    fn from(e: WordError) -> Self {
        ProofError::Word(e)
    }
}
