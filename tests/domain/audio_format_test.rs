use diktat::domain::{AudioFormat, is_supported};

use crate::helpers::{MP3_FRAME_HEADER, build_wav};

#[test]
fn given_mono_wav_when_sniffing_then_detects_wav() {
    let wav = build_wav(48_000, &[0i16; 480]);

    assert_eq!(AudioFormat::sniff(&wav), AudioFormat::Wav);
    assert!(is_supported(&wav));
}

#[test]
fn given_header_only_wav_when_checking_then_is_supported() {
    let wav = build_wav(16_000, &[]);

    assert!(is_supported(&wav));
}

#[test]
fn given_empty_buffer_when_checking_then_not_supported() {
    assert!(!is_supported(&[]));
    assert_eq!(AudioFormat::sniff(&[]), AudioFormat::Unknown);
}

#[test]
fn given_truncated_riff_header_when_checking_then_not_supported() {
    let wav = build_wav(16_000, &[0i16; 16]);

    assert!(!is_supported(&wav[..4]));
    assert!(!is_supported(&wav[..11]));
}

#[test]
fn given_riff_container_with_other_subtype_when_checking_then_not_supported() {
    let mut webp = b"RIFF\x10\x00\x00\x00WEBPVP8 ".to_vec();
    webp.extend_from_slice(&[0u8; 8]);

    assert!(!is_supported(&webp));
}

#[test]
fn given_mp3_frame_when_sniffing_then_detects_mp3() {
    assert_eq!(AudioFormat::sniff(MP3_FRAME_HEADER), AudioFormat::Mp3);
    assert!(!is_supported(MP3_FRAME_HEADER));
}

#[test]
fn given_id3_tagged_mp3_when_sniffing_then_detects_mp3() {
    assert_eq!(AudioFormat::sniff(b"ID3\x04\x00\x00\x00\x00\x00\x00"), AudioFormat::Mp3);
}

#[test]
fn given_flac_and_ogg_signatures_when_sniffing_then_detects_each() {
    assert_eq!(AudioFormat::sniff(b"fLaC\x00\x00\x00\x22"), AudioFormat::Flac);
    assert_eq!(AudioFormat::sniff(b"OggS\x00\x02"), AudioFormat::Ogg);
}

#[test]
fn given_plain_text_when_sniffing_then_unknown() {
    assert_eq!(AudioFormat::sniff(b"hello world, not audio"), AudioFormat::Unknown);
}

#[test]
fn given_every_short_prefix_of_a_wav_when_checking_then_never_supported() {
    let wav = build_wav(8_000, &[1, 2, 3]);

    for len in 0..12 {
        assert!(!is_supported(&wav[..len]), "prefix of {} bytes", len);
    }
}
