//! Round-trip tests for the sample encoder

use std::io::Cursor;

use crate::module::{Sample, SampleFlags, VibratoWaveform};
use crate::parser::parse_sample;
use crate::writer::{write_sample, write_sample_header};
use crate::SAMPLE_HEADER_SIZE;

fn sixteen_bit_sample() -> Sample {
    Sample {
        filename: "bell.wav".into(),
        global_volume: 48,
        flags: SampleFlags::ASSOCIATED
            | SampleFlags::QUALITY_16BIT
            | SampleFlags::LOOP
            | SampleFlags::PINGPONG_LOOP,
        default_volume: 52,
        name: "Tubular Bell".into(),
        signed: false,
        default_pan: 20,
        default_pan_on: true,
        length: 8,
        loop_begin: 2,
        loop_end: 7,
        speed: 22050,
        sustain_loop_begin: 0,
        sustain_loop_end: 0,
        vibrato_speed: 3,
        vibrato_depth: 4,
        vibrato_waveform: VibratoWaveform::Square,
        vibrato_rate: 5,
        data: (0u8..16).collect(),
    }
}

#[test]
fn test_round_trip_preserves_fields() {
    let original = sixteen_bit_sample();
    let mut bytes = Vec::new();
    write_sample(&original, &mut bytes).unwrap();

    let decoded = parse_sample(&mut Cursor::new(&bytes[..])).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_round_trip_is_idempotent() {
    let mut first = Vec::new();
    write_sample(&sixteen_bit_sample(), &mut first).unwrap();

    let decoded = parse_sample(&mut Cursor::new(&first[..])).unwrap();
    let mut second = Vec::new();
    write_sample(&decoded, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_payload_pointer_is_synthetic() {
    // lay the payload somewhere other than right past the header
    let sample = sixteen_bit_sample();
    let payload_at = 200u32;
    let mut bytes = Vec::new();
    write_sample_header(&mut bytes, &sample, payload_at);
    bytes.resize(payload_at as usize, 0);
    bytes.extend_from_slice(&sample.data);

    let decoded = parse_sample(&mut Cursor::new(&bytes[..])).unwrap();
    assert_eq!(decoded, sample);

    // re-encoding assigns the fixed pointer, dropping the original offset
    let mut reencoded = Vec::new();
    write_sample(&decoded, &mut reencoded).unwrap();
    assert_eq!(
        reencoded[0x48..0x4C],
        (SAMPLE_HEADER_SIZE as u32).to_le_bytes()
    );
    let redecoded = parse_sample(&mut Cursor::new(&reencoded[..])).unwrap();
    assert_eq!(redecoded, decoded);
}

#[test]
fn test_header_layout() {
    let sample = sixteen_bit_sample();
    let mut bytes = Vec::new();
    write_sample(&sample, &mut bytes).unwrap();

    assert_eq!(bytes.len(), SAMPLE_HEADER_SIZE + sample.data.len());
    assert_eq!(&bytes[..4], b"IMPS");
    assert_eq!(bytes[0x11], 48); // GvL
    assert_eq!(bytes[0x12], sample.flags.bits()); // Flg
    assert_eq!(bytes[0x13], 52); // Vol
    assert_eq!(bytes[0x2E], 0x00); // Cvt: unsigned
    assert_eq!(bytes[0x2F], 0x80 | 20); // DfP: override bit + value
    assert_eq!(bytes[0x4F], VibratoWaveform::Square as u8); // ViT
}

#[test]
fn test_names_truncate_and_pad() {
    let sample = Sample {
        filename: "a-very-long-filename.wav".into(),
        name: "hat".into(),
        ..Default::default()
    };
    let mut bytes = Vec::new();
    write_sample(&sample, &mut bytes).unwrap();

    let decoded = parse_sample(&mut Cursor::new(&bytes[..])).unwrap();
    // over-capacity filenames lose their tail; short names pad and survive
    assert_eq!(decoded.filename, "a-very-long-");
    assert_eq!(decoded.name, "hat");
}
