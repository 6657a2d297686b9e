use std::fmt;

const RIFF_MAGIC: &[u8] = b"RIFF";
const WAVE_SUBTYPE: &[u8] = b"WAVE";
const ID3_MAGIC: &[u8] = b"ID3";
const FLAC_MAGIC: &[u8] = b"fLaC";
const OGG_MAGIC: &[u8] = b"OggS";

/// Audio container detected from the leading signature bytes of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Ogg,
    Unknown,
}

impl AudioFormat {
    /// Identifies the container by magic number. Filename and declared
    /// content type are never consulted.
    pub fn sniff(data: &[u8]) -> Self {
        if data.len() >= 12 && &data[..4] == RIFF_MAGIC && &data[8..12] == WAVE_SUBTYPE {
            return Self::Wav;
        }
        if data.starts_with(FLAC_MAGIC) {
            return Self::Flac;
        }
        if data.starts_with(OGG_MAGIC) {
            return Self::Ogg;
        }
        if data.starts_with(ID3_MAGIC) || is_mpeg_frame_sync(data) {
            return Self::Mp3;
        }
        Self::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
            Self::Unknown => "unknown",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Flac => "audio/flac",
            Self::Ogg => "audio/ogg",
            Self::Unknown => "application/octet-stream",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true only for buffers carrying a WAV container signature.
pub fn is_supported(data: &[u8]) -> bool {
    AudioFormat::sniff(data) == AudioFormat::Wav
}

// 11 set sync bits followed by a non-reserved MPEG version.
fn is_mpeg_frame_sync(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0xFF && (data[1] & 0xE0) == 0xE0 && (data[1] & 0x18) != 0x08
}
