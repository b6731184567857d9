//! Instrument and envelope record decoding

use std::io::Read;

use crate::error::FormatError;
use crate::module::{
    DuplicateCheckAction, DuplicateCheckType, Envelope, EnvelopeFlags, Instrument, NewNoteAction,
    NodePoint, NoteSample,
};
use crate::{INSTRUMENT_MAGIC, KEYBOARD_TABLE_LEN, MAX_ENVELOPE_POINTS};

use super::helpers::{read_array, read_i8, read_string, read_u16, read_u8};

/// Decode an instrument record from `reader`.
///
/// Instrument records contain no pointer indirection, so any readable
/// stream will do — no seeking is required.
pub fn parse_instrument<R: Read>(reader: &mut R) -> Result<Instrument, FormatError> {
    let magic: [u8; 4] = read_array(reader)?;
    if &magic != INSTRUMENT_MAGIC {
        return Err(FormatError::FormatMismatch {
            expected: INSTRUMENT_MAGIC,
            found: magic,
        });
    }

    let filename_bytes: [u8; 12] = read_array(reader)?;
    let filename = read_string(&filename_bytes);

    let _reserved = read_u8(reader)?;

    let new_note_action = NewNoteAction::from_u8(read_u8(reader)?);
    let duplicate_check_type = DuplicateCheckType::from_u8(read_u8(reader)?);
    let duplicate_check_action = DuplicateCheckAction::from_u8(read_u8(reader)?);

    let fade_out = read_u16(reader)?;
    let pitch_pan_separation = read_i8(reader)?;
    let pitch_pan_center = read_u8(reader)?;
    let global_volume = read_u8(reader)?;

    // The override bit is INVERTED relative to the sample header: panning
    // is in effect when bit 7 is clear
    let pan_byte = read_u8(reader)?;
    let default_pan = pan_byte & 0x7F;
    let default_pan_on = pan_byte & 0x80 == 0;

    let volume_swing = read_u8(reader)?;
    let pan_swing = read_u8(reader)?;

    // TrkVers and NoS: instrument-file bookkeeping, discarded
    let _track_version = read_u16(reader)?;
    let _embedded_samples = read_u8(reader)?;
    let _reserved = read_u8(reader)?;

    let name_bytes: [u8; 26] = read_array(reader)?;
    let name = read_string(&name_bytes);

    let cutoff_byte = read_u8(reader)?;
    let resonance_byte = read_u8(reader)?;
    let filter_cutoff = (cutoff_byte & 0x80 != 0).then_some(cutoff_byte & 0x7F);
    let filter_resonance = (resonance_byte & 0x80 != 0).then_some(resonance_byte & 0x7F);

    let midi_channel = read_u8(reader)?;
    let midi_program = read_i8(reader)?;
    let midi_bank_low = read_i8(reader)?;
    let midi_bank_high = read_i8(reader)?;

    let mut keyboard_table = [NoteSample::default(); KEYBOARD_TABLE_LEN];
    for entry in keyboard_table.iter_mut() {
        entry.note = read_u8(reader)?;
        entry.sample = read_u8(reader)?;
    }

    let volume_envelope = parse_envelope(reader)?;
    let panning_envelope = parse_envelope(reader)?;
    let pitch_envelope = parse_envelope(reader)?;

    Ok(Instrument {
        filename,
        new_note_action,
        duplicate_check_type,
        duplicate_check_action,
        fade_out,
        pitch_pan_separation,
        pitch_pan_center,
        global_volume,
        default_pan,
        default_pan_on,
        volume_swing,
        pan_swing,
        name,
        filter_cutoff,
        filter_resonance,
        midi_channel,
        midi_program,
        midi_bank_low,
        midi_bank_high,
        keyboard_table,
        volume_envelope,
        panning_envelope,
        pitch_envelope,
    })
}

/// Decode one embedded envelope record.
///
/// All 25 on-disk slots are consumed; only the first `num` become node
/// points. A declared count past the fixed capacity fails instead of
/// reading out of bounds.
fn parse_envelope<R: Read>(reader: &mut R) -> Result<Envelope, FormatError> {
    let flags = EnvelopeFlags::from_bits(read_u8(reader)?);
    let num = read_u8(reader)?;
    if num as usize > MAX_ENVELOPE_POINTS {
        return Err(FormatError::MalformedEnvelope(num));
    }

    let loop_begin = read_u8(reader)?;
    let loop_end = read_u8(reader)?;
    let sustain_loop_begin = read_u8(reader)?;
    let sustain_loop_end = read_u8(reader)?;

    let mut node_points = Vec::with_capacity(num as usize);
    for slot in 0..MAX_ENVELOPE_POINTS {
        let value = read_i8(reader)?;
        let tick = read_u16(reader)?;
        if slot < num as usize {
            node_points.push(NodePoint { value, tick });
        }
    }

    let _reserved = read_u8(reader)?;

    Ok(Envelope {
        flags,
        loop_begin,
        loop_end,
        sustain_loop_begin,
        sustain_loop_end,
        node_points,
    })
}
