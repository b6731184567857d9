//! Sample record encoding
//!
//! Samples are the one record kind that round-trips: the header is rebuilt
//! around a synthetic payload pointer and the PCM buffer follows it
//! immediately.

use std::io::Write;

use crate::error::FormatError;
use crate::module::Sample;
use crate::SAMPLE_HEADER_SIZE;

mod encoding;
#[cfg(test)]
mod tests;

pub(crate) use encoding::write_sample_header;
#[cfg(test)]
pub(crate) use encoding::write_string;

/// Encode a sample record to `writer`.
///
/// The header's payload pointer is implementation-assigned: it always
/// points immediately past the header, regardless of where the decoded
/// record kept its payload. Name fields longer than their on-disk capacity
/// are silently truncated; pre-validate lengths if truncation must be
/// rejected.
///
/// Decoding the output reproduces every field of `sample` except the
/// payload pointer, provided `data` holds the byte count `length` implies.
pub fn write_sample<W: Write>(sample: &Sample, writer: &mut W) -> Result<(), FormatError> {
    let mut header = Vec::with_capacity(SAMPLE_HEADER_SIZE);
    write_sample_header(&mut header, sample, SAMPLE_HEADER_SIZE as u32);
    writer.write_all(&header)?;
    writer.write_all(&sample.data)?;
    Ok(())
}
