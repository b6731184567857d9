//! Low-level encoders for sample header fields

use crate::module::Sample;
use crate::SAMPLE_MAGIC;

/// Write a fixed-capacity name field: truncate to `len` bytes, zero-pad the
/// rest.
pub(crate) fn write_string(output: &mut Vec<u8>, s: &str, len: usize) {
    let bytes = s.as_bytes();
    let copy_len = bytes.len().min(len);
    output.extend_from_slice(&bytes[..copy_len]);
    for _ in copy_len..len {
        output.push(0);
    }
}

/// Write a sample header whose payload lives at `data_offset`.
pub(crate) fn write_sample_header(output: &mut Vec<u8>, sample: &Sample, data_offset: u32) {
    output.extend_from_slice(SAMPLE_MAGIC);

    write_string(output, &sample.filename, 12);

    // Reserved
    output.push(0);

    output.push(sample.global_volume);
    output.push(sample.flags.bits());
    output.push(sample.default_volume);

    write_string(output, &sample.name, 26);

    // Cvt: only the signed bit survives a decode, so only it is written back
    output.push(sample.signed as u8);

    let mut pan_byte = sample.default_pan & 0x7F;
    if sample.default_pan_on {
        pan_byte |= 0x80;
    }
    output.push(pan_byte);

    output.extend_from_slice(&sample.length.to_le_bytes());
    output.extend_from_slice(&sample.loop_begin.to_le_bytes());
    output.extend_from_slice(&sample.loop_end.to_le_bytes());
    output.extend_from_slice(&sample.speed.to_le_bytes());
    output.extend_from_slice(&sample.sustain_loop_begin.to_le_bytes());
    output.extend_from_slice(&sample.sustain_loop_end.to_le_bytes());
    output.extend_from_slice(&data_offset.to_le_bytes());

    output.push(sample.vibrato_speed);
    output.push(sample.vibrato_depth);
    output.push(sample.vibrato_rate);
    output.push(sample.vibrato_waveform as u8);
}
