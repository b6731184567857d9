//! In-memory value types for the three record kinds

mod envelope;
mod instrument;
mod sample;

pub use envelope::{Envelope, EnvelopeFlags, NodePoint};
pub use instrument::{
    DuplicateCheckAction, DuplicateCheckType, Instrument, NewNoteAction, NoteSample,
};
pub use sample::{Sample, SampleFlags, VibratoWaveform};

use crate::{CHANNEL_COUNT, ORDER_END, ORDER_SKIP};

/// A decoded module: song metadata, the channel mixing tables, the pattern
/// order list, and the samples the song owns.
///
/// The order list keeps its sentinel entries (254 = skip, 255 = end of
/// song) exactly as stored; they are markers, not pattern indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Song name (max 26 bytes on disk)
    pub song_name: String,
    /// Global volume (0-128)
    pub global_volume: u8,
    /// Mixing volume (0-128)
    pub mixing_volume: u8,
    /// Initial speed (ticks per row)
    pub initial_speed: u8,
    /// Initial tempo (BPM)
    pub initial_tempo: u8,
    /// Stereo separation (0-128, 128 = widest)
    pub separation: u8,
    /// Pitch wheel depth for MIDI controllers
    pub pitch_wheel_depth: u8,
    /// Per-channel default panning, copied verbatim (0-64, +128 = disabled)
    pub channel_panning: [u8; CHANNEL_COUNT],
    /// Per-channel default volume, copied verbatim (0-64)
    pub channel_volume: [u8; CHANNEL_COUNT],
    /// Pattern index per song position, sentinels included
    pub order_list: Vec<u8>,
    /// Samples owned by this module, in header index order
    pub samples: Vec<Sample>,
}

impl Module {
    /// Number of playable positions before the end marker, skip markers
    /// excluded.
    pub fn total_orders(&self) -> usize {
        self.order_list
            .iter()
            .take_while(|&&order| order != ORDER_END)
            .filter(|&&order| order != ORDER_SKIP)
            .count()
    }
}

impl Default for Module {
    fn default() -> Self {
        Self {
            song_name: String::new(),
            global_volume: 128,
            mixing_volume: 48,
            initial_speed: 6,
            initial_tempo: 125,
            separation: 128,
            pitch_wheel_depth: 0,
            channel_panning: [32; CHANNEL_COUNT], // center
            channel_volume: [64; CHANNEL_COUNT],  // full volume
            order_list: Vec::new(),
            samples: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_orders_honors_sentinels() {
        let module = Module {
            order_list: vec![0, 1, ORDER_SKIP, 2, ORDER_END, 3],
            ..Default::default()
        };
        assert_eq!(module.total_orders(), 3);
    }

    #[test]
    fn test_total_orders_empty() {
        assert_eq!(Module::default().total_orders(), 0);
    }
}
