//! Instrument value type, keyboard table, and playback-behavior enums

use super::Envelope;
use crate::KEYBOARD_TABLE_LEN;

/// One keyboard-table entry: the note to play and the sample to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteSample {
    /// Note to play (0-119, C-0 to B-9)
    pub note: u8,
    /// Sample number (1-99, 0 = no sample assigned)
    pub sample: u8,
}

/// What happens to the previous note when a new note starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum NewNoteAction {
    /// Cut the previous note immediately
    #[default]
    Cut = 0,
    /// Keep the previous note playing in the background
    Continue = 1,
    /// Release the previous note (key-off)
    NoteOff = 2,
    /// Fade the previous note out
    NoteFade = 3,
}

impl NewNoteAction {
    pub fn from_u8(val: u8) -> Self {
        match val {
            1 => Self::Continue,
            2 => Self::NoteOff,
            3 => Self::NoteFade,
            _ => Self::Cut,
        }
    }
}

/// What counts as a duplicate note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DuplicateCheckType {
    /// No duplicate checking
    #[default]
    Off = 0,
    /// Same note
    Note = 1,
    /// Same sample
    Sample = 2,
    /// Same instrument
    Instrument = 3,
}

impl DuplicateCheckType {
    pub fn from_u8(val: u8) -> Self {
        match val {
            1 => Self::Note,
            2 => Self::Sample,
            3 => Self::Instrument,
            _ => Self::Off,
        }
    }
}

/// What happens to a duplicate note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DuplicateCheckAction {
    /// Cut the duplicate
    #[default]
    Cut = 0,
    /// Release the duplicate (key-off)
    NoteOff = 1,
    /// Fade the duplicate out
    NoteFade = 2,
}

impl DuplicateCheckAction {
    pub fn from_u8(val: u8) -> Self {
        match val {
            1 => Self::NoteOff,
            2 => Self::NoteFade,
            _ => Self::Cut,
        }
    }
}

/// A decoded instrument: playback behavior, keyboard mapping, and the three
/// parameter envelopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    /// DOS filename (max 12 bytes on disk)
    pub filename: String,
    /// New note action
    pub new_note_action: NewNoteAction,
    /// Duplicate check type
    pub duplicate_check_type: DuplicateCheckType,
    /// Duplicate check action
    pub duplicate_check_action: DuplicateCheckAction,
    /// Fade-out rate (0-256)
    pub fade_out: u16,
    /// Pitch-pan separation (-32..32)
    pub pitch_pan_separation: i8,
    /// Pitch-pan center note (0-119)
    pub pitch_pan_center: u8,
    /// Global volume (0-128)
    pub global_volume: u8,
    /// Default panning (0-64)
    pub default_pan: u8,
    /// Default panning override enabled. Stored INVERTED on disk: the
    /// override is on when bit 7 of the pan byte is CLEAR, the opposite of
    /// the sample header convention.
    pub default_pan_on: bool,
    /// Random volume variation (0-100)
    pub volume_swing: u8,
    /// Random panning variation (0-64)
    pub pan_swing: u8,
    /// Instrument name (max 26 bytes on disk)
    pub name: String,
    /// Initial filter cutoff (0-127), None when unset
    pub filter_cutoff: Option<u8>,
    /// Initial filter resonance (0-127), None when unset
    pub filter_resonance: Option<u8>,
    /// MIDI channel (0 = disabled)
    pub midi_channel: u8,
    /// MIDI program (-1 = unset)
    pub midi_program: i8,
    /// MIDI bank, low byte (-1 = unset)
    pub midi_bank_low: i8,
    /// MIDI bank, high byte (-1 = unset)
    pub midi_bank_high: i8,
    /// Keyboard table: one (note, sample) pair per input note
    pub keyboard_table: [NoteSample; KEYBOARD_TABLE_LEN],
    /// Volume envelope
    pub volume_envelope: Envelope,
    /// Panning envelope
    pub panning_envelope: Envelope,
    /// Pitch (or filter) envelope
    pub pitch_envelope: Envelope,
}

impl Instrument {
    /// Sample number mapped to `note`, if any.
    pub fn sample_for_note(&self, note: u8) -> Option<u8> {
        let entry = self.keyboard_table.get(note as usize)?;
        (entry.sample > 0).then_some(entry.sample)
    }

    /// Note the keyboard table transposes `note` to.
    pub fn note_for_input(&self, note: u8) -> u8 {
        match self.keyboard_table.get(note as usize) {
            Some(entry) => entry.note,
            None => note,
        }
    }
}

impl Default for Instrument {
    fn default() -> Self {
        // Stock mapping: every note plays as itself with sample 1
        let mut keyboard_table = [NoteSample::default(); KEYBOARD_TABLE_LEN];
        for (i, entry) in keyboard_table.iter_mut().enumerate() {
            entry.note = i as u8;
            entry.sample = 1;
        }

        Self {
            filename: String::new(),
            new_note_action: NewNoteAction::Cut,
            duplicate_check_type: DuplicateCheckType::Off,
            duplicate_check_action: DuplicateCheckAction::Cut,
            fade_out: 0,
            pitch_pan_separation: 0,
            pitch_pan_center: 60, // C-5
            global_volume: 128,
            default_pan: 32,
            default_pan_on: false,
            volume_swing: 0,
            pan_swing: 0,
            name: String::new(),
            filter_cutoff: None,
            filter_resonance: None,
            midi_channel: 0,
            midi_program: -1,
            midi_bank_low: -1,
            midi_bank_high: -1,
            keyboard_table,
            volume_envelope: Envelope::default(),
            panning_envelope: Envelope::default(),
            pitch_envelope: Envelope::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_action_from_u8() {
        assert_eq!(NewNoteAction::from_u8(0), NewNoteAction::Cut);
        assert_eq!(NewNoteAction::from_u8(1), NewNoteAction::Continue);
        assert_eq!(NewNoteAction::from_u8(2), NewNoteAction::NoteOff);
        assert_eq!(NewNoteAction::from_u8(3), NewNoteAction::NoteFade);
        // invalid values fall back to Cut
        assert_eq!(NewNoteAction::from_u8(99), NewNoteAction::Cut);
    }

    #[test]
    fn test_duplicate_check_from_u8() {
        assert_eq!(DuplicateCheckType::from_u8(2), DuplicateCheckType::Sample);
        assert_eq!(DuplicateCheckType::from_u8(7), DuplicateCheckType::Off);
        assert_eq!(
            DuplicateCheckAction::from_u8(2),
            DuplicateCheckAction::NoteFade
        );
        assert_eq!(DuplicateCheckAction::from_u8(7), DuplicateCheckAction::Cut);
    }

    #[test]
    fn test_sample_for_note() {
        let mut instrument = Instrument::default();
        assert_eq!(instrument.sample_for_note(60), Some(1));

        instrument.keyboard_table[60].sample = 0;
        assert_eq!(instrument.sample_for_note(60), None);
        assert_eq!(instrument.sample_for_note(200), None);
    }
}
