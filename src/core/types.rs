//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`CommitMessage`] - A commit log message that passed the non-empty gate
//!
//! # Validation
//!
//! Construction is the validation step. Once a [`CommitMessage`] exists it
//! is known to be non-empty, so nothing downstream of the prompt can commit
//! with an empty message.
//!
//! # Encoding
//!
//! A message is whatever bytes the operator typed. It is held as an
//! [`OsString`] so a line in a non-UTF-8 terminal encoding reaches
//! `git commit -m` unchanged on unix. Other platforms decode lossily.
//!
//! # Examples
//!
//! ```
//! use commitflow::core::types::CommitMessage;
//!
//! let msg = CommitMessage::new("fix bug").unwrap();
//! assert_eq!(msg.as_os_str(), "fix bug");
//!
//! // Whitespace is content, not emptiness
//! assert!(CommitMessage::new("   ").is_ok());
//! assert!(CommitMessage::new("").is_err());
//! assert!(CommitMessage::from_bytes(Vec::new()).is_err());
//! ```

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The operator entered nothing.
    #[error("commit message cannot be empty")]
    EmptyCommitMessage,
}

/// A non-empty commit message.
///
/// The only rule is length: a zero-length message is rejected, every other
/// one (including whitespace-only ones) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitMessage(OsString);

impl CommitMessage {
    /// Create a new validated commit message.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::EmptyCommitMessage` for a zero-length message.
    pub fn new(message: impl Into<OsString>) -> Result<Self, TypeError> {
        let message = message.into();
        if message.is_empty() {
            return Err(TypeError::EmptyCommitMessage);
        }
        Ok(Self(message))
    }

    /// Create a message from the raw bytes of an input line.
    ///
    /// The empty check is on the byte length, before any decoding.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TypeError> {
        if bytes.is_empty() {
            return Err(TypeError::EmptyCommitMessage);
        }
        Self::new(bytes_to_os_string(bytes))
    }

    /// Get the message as passed to git.
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// Get the message bytes for echoing back to the operator.
    pub fn as_bytes(&self) -> Cow<'_, [u8]> {
        os_str_bytes(&self.0)
    }
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(unix)]
fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod commit_message {
        use super::*;

        #[test]
        fn ordinary_message_accepted() {
            let msg = CommitMessage::new("fix bug").unwrap();
            assert_eq!(msg.as_os_str(), "fix bug");
            assert_eq!(msg.to_string(), "fix bug");
            assert_eq!(&*msg.as_bytes(), b"fix bug");
        }

        #[test]
        fn empty_rejected() {
            assert_eq!(CommitMessage::new(""), Err(TypeError::EmptyCommitMessage));
            assert_eq!(
                CommitMessage::from_bytes(Vec::new()),
                Err(TypeError::EmptyCommitMessage)
            );
        }

        #[test]
        fn whitespace_only_accepted() {
            let msg = CommitMessage::from_bytes(b"   ".to_vec()).unwrap();
            assert_eq!(msg.as_os_str(), "   ");
        }

        #[test]
        fn surrounding_whitespace_preserved() {
            let msg = CommitMessage::new("  spaced out\t").unwrap();
            assert_eq!(msg.as_os_str(), "  spaced out\t");
        }

        #[cfg(unix)]
        #[test]
        fn latin1_bytes_kept_verbatim() {
            let msg = CommitMessage::from_bytes(b"caf\xe9".to_vec()).unwrap();
            assert_eq!(&*msg.as_bytes(), b"caf\xe9");
            assert_eq!(msg.to_string(), "caf\u{fffd}");
        }

        #[test]
        fn error_display() {
            assert_eq!(
                TypeError::EmptyCommitMessage.to_string(),
                "commit message cannot be empty"
            );
        }
    }
}
