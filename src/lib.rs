//! Impulse Tracker binary format codec
//!
//! This crate decodes the three on-disk record kinds of the Impulse Tracker
//! ecosystem, and encodes the one of them that supports writing:
//!
//! - **Module** (`.it`, tag `IMPM`): song metadata, the channel mixing
//!   tables, the pattern order list, and the samples the song owns, located
//!   through a pointer table inside the same stream.
//! - **Instrument** (`.iti`, tag `IMPI`): note/sample keyboard mapping plus
//!   volume, panning, and pitch envelopes.
//! - **Sample** (`.its`, tag `IMPS`): playback metadata plus the raw PCM
//!   payload, round-trippable through [`write_sample`].
//!
//! Pattern data, sample decompression, and playback are out of scope. The
//! compressed flag is preserved but the payload is always read as raw bytes.
//!
//! # Usage
//!
//! ```ignore
//! use std::io::Cursor;
//!
//! let bytes = std::fs::read("song.it").unwrap();
//! let module = impulse::parse_module(&mut Cursor::new(bytes)).unwrap();
//!
//! println!("Song: {}", module.song_name);
//! println!("Orders: {}", module.total_orders());
//! println!("Samples: {}", module.samples.len());
//! ```
//!
//! # Format Reference
//!
//! - Impulse Tracker Technical Specification (ITTECH.TXT)
//! - <https://github.com/schismtracker/schismtracker/wiki/ITTECH.TXT>

mod error;
mod module;
mod parser;
mod writer;

pub use error::FormatError;
pub use module::{
    DuplicateCheckAction, DuplicateCheckType, Envelope, EnvelopeFlags, Instrument, Module,
    NewNoteAction, NodePoint, NoteSample, Sample, SampleFlags, VibratoWaveform,
};
pub use parser::{parse_instrument, parse_module, parse_sample};
pub use writer::write_sample;

// =============================================================================
// Constants
// =============================================================================

/// Module magic string "IMPM"
pub const MODULE_MAGIC: &[u8; 4] = b"IMPM";

/// Instrument magic string "IMPI"
pub const INSTRUMENT_MAGIC: &[u8; 4] = b"IMPI";

/// Sample magic string "IMPS"
pub const SAMPLE_MAGIC: &[u8; 4] = b"IMPS";

/// On-disk size of the module header, including the magic tag
pub const MODULE_HEADER_SIZE: usize = 0xC0;

/// On-disk size of the sample header, including the magic tag
pub const SAMPLE_HEADER_SIZE: usize = 0x50;

/// On-disk size of an instrument record, including the magic tag
pub const INSTRUMENT_SIZE: usize = 550;

/// Number of node-point slots stored in every on-disk envelope record
pub const MAX_ENVELOPE_POINTS: usize = 25;

/// Number of entries in an instrument's keyboard table
pub const KEYBOARD_TABLE_LEN: usize = 120;

/// Number of slots in the module channel panning/volume tables
pub const CHANNEL_COUNT: usize = 64;

// =============================================================================
// Order Constants
// =============================================================================

/// Order-list value for "skip to next position" (+++)
pub const ORDER_SKIP: u8 = 254;

/// Order-list value for "end of song" (---)
pub const ORDER_END: u8 = 255;

/// Maximum valid note (B-9)
pub const NOTE_MAX: u8 = 119;

// =============================================================================
// Tests
// =============================================================================
