/// Sample encoding sent to the recognizer. Uploads are always 16-bit linear PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEncoding {
    Linear16,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear16 => "LINEAR16",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionType {
    VoiceCommand,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VoiceCommand => "VOICE_COMMAND",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicrophoneDistance {
    Nearfield,
}

impl MicrophoneDistance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearfield => "NEARFIELD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingDeviceType {
    Smartphone,
}

impl RecordingDeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smartphone => "SMARTPHONE",
        }
    }
}

/// Description of how the audio was captured. Every upload shares the same values.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingMetadata {
    pub interaction_type: InteractionType,
    pub microphone_distance: MicrophoneDistance,
    pub device_type: RecordingDeviceType,
    pub device_name: &'static str,
    pub industry_naics_code: u32,
}

impl RecordingMetadata {
    pub const DEVICE_NAME: &'static str = "mobile";
    /// NAICS 481111, scheduled passenger air transportation.
    pub const INDUSTRY_NAICS_CODE: u32 = 481_111;

    pub fn fixed() -> Self {
        Self {
            interaction_type: InteractionType::VoiceCommand,
            microphone_distance: MicrophoneDistance::Nearfield,
            device_type: RecordingDeviceType::Smartphone,
            device_name: Self::DEVICE_NAME,
            industry_naics_code: Self::INDUSTRY_NAICS_CODE,
        }
    }
}

/// Parameters for a single recognition call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionConfig {
    pub locale: String,
    pub encoding: AudioEncoding,
    pub enable_speaker_diarization: bool,
    pub vocabulary_hints: Vec<String>,
    pub metadata: RecordingMetadata,
}

impl RecognitionConfig {
    pub fn build(locale: &str, vocabulary_hints: &[String]) -> Self {
        Self {
            locale: locale.to_string(),
            encoding: AudioEncoding::Linear16,
            enable_speaker_diarization: true,
            vocabulary_hints: vocabulary_hints.to_vec(),
            metadata: RecordingMetadata::fixed(),
        }
    }
}
