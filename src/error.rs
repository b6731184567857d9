//! Error type shared by the module, instrument, and sample codecs

use std::io;

/// Errors that can occur while decoding or encoding tracker records
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Leading 4-byte tag does not match the expected magic value
    #[error(
        "bad magic: expected '{}', found '{}'",
        display_tag(.expected.as_slice()),
        display_tag(.found.as_slice())
    )]
    FormatMismatch {
        /// Tag required for this record kind
        expected: &'static [u8; 4],
        /// Tag actually present in the stream
        found: [u8; 4],
    },

    /// Stream ended before a declared field or payload was complete
    #[error("unexpected end of stream")]
    TruncatedData,

    /// Envelope declares more points than the fixed 25-slot storage holds
    #[error("envelope declares {0} points (max 25)")]
    MalformedEnvelope(u8),

    /// Underlying stream failure, propagated unchanged
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn display_tag(tag: &[u8]) -> String {
    String::from_utf8_lossy(tag).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mismatch_display() {
        let err = FormatError::FormatMismatch {
            expected: crate::SAMPLE_MAGIC,
            found: *b"NOPE",
        };
        let msg = err.to_string();
        assert!(msg.contains("IMPS"));
        assert!(msg.contains("NOPE"));
    }

    #[test]
    fn test_io_error_is_wrapped() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = FormatError::from(io_err);
        assert!(matches!(err, FormatError::Io(_)));
    }
}
