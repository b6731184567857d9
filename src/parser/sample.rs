//! Sample record decoding

use std::io::{Read, Seek, SeekFrom};

use crate::error::FormatError;
use crate::module::{Sample, SampleFlags, VibratoWaveform};
use crate::SAMPLE_MAGIC;

use super::helpers::{read_array, read_exact, read_string, read_u32, read_u8};

/// Decode a sample record from `reader`.
///
/// Reads the fixed header at the current position, then seeks to the
/// header's stored payload pointer and reads the full PCM payload —
/// `length` frames at one or two bytes per frame. The payload is read as
/// raw bytes even when the compressed flag is set. On success the stream is
/// positioned at the end of the payload, not the end of the header.
pub fn parse_sample<R: Read + Seek>(reader: &mut R) -> Result<Sample, FormatError> {
    let magic: [u8; 4] = read_array(reader)?;
    if &magic != SAMPLE_MAGIC {
        return Err(FormatError::FormatMismatch {
            expected: SAMPLE_MAGIC,
            found: magic,
        });
    }

    let filename_bytes: [u8; 12] = read_array(reader)?;
    let filename = read_string(&filename_bytes);

    let _reserved = read_u8(reader)?;

    let global_volume = read_u8(reader)?;
    let flags = SampleFlags::from_bits(read_u8(reader)?);
    let default_volume = read_u8(reader)?;

    let name_bytes: [u8; 26] = read_array(reader)?;
    let name = read_string(&name_bytes);

    // Cvt: bit 0 is the signed/unsigned switch; the remaining bits are
    // historical import conversions with no in-memory counterpart
    let convert = read_u8(reader)?;
    let signed = convert & 0x01 != 0;

    let pan_byte = read_u8(reader)?;
    let default_pan = pan_byte & 0x7F;
    let default_pan_on = pan_byte & 0x80 != 0;

    let length = read_u32(reader)?;
    let loop_begin = read_u32(reader)?;
    let loop_end = read_u32(reader)?;
    let speed = read_u32(reader)?;
    let sustain_loop_begin = read_u32(reader)?;
    let sustain_loop_end = read_u32(reader)?;
    let payload_offset = read_u32(reader)?;

    let vibrato_speed = read_u8(reader)?;
    let vibrato_depth = read_u8(reader)?;
    let vibrato_rate = read_u8(reader)?;
    let vibrato_waveform = VibratoWaveform::from_u8(read_u8(reader)?);

    let mut sample = Sample {
        filename,
        global_volume,
        flags,
        default_volume,
        name,
        signed,
        default_pan,
        default_pan_on,
        length,
        loop_begin,
        loop_end,
        speed,
        sustain_loop_begin,
        sustain_loop_end,
        vibrato_speed,
        vibrato_depth,
        vibrato_waveform,
        vibrato_rate,
        data: Vec::new(),
    };

    log::trace!(
        "sample '{}': {} frames, payload at 0x{:08X}",
        sample.name,
        sample.length,
        payload_offset
    );

    let mut data = vec![0u8; sample.data_size()];
    reader.seek(SeekFrom::Start(payload_offset as u64))?;
    read_exact(reader, &mut data)?;
    sample.data = data;

    Ok(sample)
}
