//! Stream decoders for the three record kinds

use std::io::{Read, Seek, SeekFrom};

use crate::error::FormatError;
use crate::module::Module;
use crate::{CHANNEL_COUNT, MODULE_HEADER_SIZE, MODULE_MAGIC};

mod helpers;
mod instrument;
mod sample;

use helpers::{read_array, read_exact, read_string, read_u16, read_u32, read_u8};

pub use instrument::parse_instrument;
pub use sample::parse_sample;

/// Decode a module record from `reader`.
///
/// Reads the fixed header, the order list that follows it contiguously, and
/// every sample the header declares. Samples are located through the
/// pointer table that sits after the order list and the instrument pointer
/// table: each 4-byte entry holds the absolute offset of one sample record,
/// in index order. Any tag mismatch, short read, bad seek, or nested sample
/// failure aborts the whole decode; no partial module is returned.
pub fn parse_module<R: Read + Seek>(reader: &mut R) -> Result<Module, FormatError> {
    let magic: [u8; 4] = read_array(reader)?;
    if &magic != MODULE_MAGIC {
        return Err(FormatError::FormatMismatch {
            expected: MODULE_MAGIC,
            found: magic,
        });
    }

    let name_bytes: [u8; 26] = read_array(reader)?;
    let song_name = read_string(&name_bytes);

    // PHiligt: editor row-highlight info
    let _highlight: [u8; 2] = read_array(reader)?;

    let order_count = read_u16(reader)?;
    let instrument_count = read_u16(reader)?;
    let sample_count = read_u16(reader)?;
    let _pattern_count = read_u16(reader)?;

    // Cwt/v and Cmwt: tracker version bookkeeping
    let _created_with = read_u16(reader)?;
    let _compatible_with = read_u16(reader)?;

    let _flags = read_u16(reader)?;
    let _special = read_u16(reader)?;

    let global_volume = read_u8(reader)?;
    let mixing_volume = read_u8(reader)?;
    let initial_speed = read_u8(reader)?;
    let initial_tempo = read_u8(reader)?;
    let separation = read_u8(reader)?;
    let pitch_wheel_depth = read_u8(reader)?;

    let _message_length = read_u16(reader)?;
    let _message_offset = read_u32(reader)?;
    let _reserved = read_u32(reader)?;

    let channel_panning: [u8; CHANNEL_COUNT] = read_array(reader)?;
    let channel_volume: [u8; CHANNEL_COUNT] = read_array(reader)?;

    let mut order_list = vec![0u8; order_count as usize];
    read_exact(reader, &mut order_list)?;

    log::debug!(
        "module '{}': {} orders, {} instruments, {} samples",
        song_name,
        order_count,
        instrument_count,
        sample_count
    );

    // The sample pointer table sits after the order list and the 4-byte
    // instrument pointer table; instrument records are not consulted here.
    let table_base = MODULE_HEADER_SIZE as u64 + order_count as u64 + instrument_count as u64 * 4;

    let mut samples = Vec::with_capacity(sample_count as usize);
    for index in 0..sample_count {
        reader.seek(SeekFrom::Start(table_base + index as u64 * 4))?;
        let offset = read_u32(reader)?;
        log::trace!("sample {} header at 0x{:08X}", index, offset);
        reader.seek(SeekFrom::Start(offset as u64))?;
        samples.push(sample::parse_sample(reader)?);
    }

    Ok(Module {
        song_name,
        global_volume,
        mixing_volume,
        initial_speed,
        initial_tempo,
        separation,
        pitch_wheel_depth,
        channel_panning,
        channel_volume,
        order_list,
        samples,
    })
}
