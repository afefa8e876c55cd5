//! Descriptor key vocabulary
//!
//! The engine works on a closed vocabulary of track descriptors. Keys outside
//! this vocabulary are dropped at ingestion and never stored or propagated.

use serde::{Deserialize, Serialize};

/// Named track descriptor
///
/// Every numeric descriptor carries a display label and a unit for message
/// rendering. `Key` is the single reserved categorical descriptor (musical
/// key as a string such as "Am").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    /// Tempo in beats per minute
    Bpm,
    /// Mean RMS energy
    Energy,
    /// Integrated loudness in LUFS
    Loudness,
    /// Spectral centroid (perceived brightness) in Hz
    SpectralCentroid,
    /// RMS level
    Rms,
    /// Spectral rolloff frequency in Hz
    SpectralRolloff,
    /// Spectral flatness (noisiness)
    SpectralFlatness,
    /// Zero crossing rate
    ZeroCrossingRate,
    /// Spectral contrast in dB
    SpectralContrast,
    /// Low-band energy share
    LowEnergy,
    /// Mid-band energy share
    MidEnergy,
    /// High-band energy share
    HighEnergy,
    /// Sub-bass presence
    SubBassPresence,
    /// Pulse clarity (danceability)
    Danceability,
    /// Mean onset strength
    BeatStrength,
    /// Onset events per second
    OnsetRate,
    /// Valence (mood)
    Valence,
    /// Stereo width
    StereoWidth,
    /// Key detection confidence
    KeyConfidence,
    /// Dynamic range (peak minus RMS) in dB
    DynamicRange,
    /// Loudness range in LU
    LoudnessRange,
    /// True peak in dBTP
    TruePeak,
    /// Crest factor in dB
    CrestFactor,
    /// Transient energy share
    TransientEnergy,
    /// Harmonic to noise ratio in dB
    HarmonicToNoiseRatio,
    /// Harmonic complexity
    HarmonicComplexity,
    /// Melodic range in semitones
    MelodicRange,
    /// Rhythmic density in events per second
    RhythmicDensity,
    /// Arrangement density
    ArrangementDensity,
    /// Repetition score
    RepetitionScore,
    /// Frequency spectrum occupancy
    FrequencyOccupancy,
    /// Timbral diversity
    TimbralDiversity,
    /// Vocal to instrumental balance
    VocalInstrumentalRatio,
    /// Energy curve shape
    EnergyCurve,
    /// Call-and-response presence
    CallResponsePresence,
    /// Musical key (categorical, e.g. "Am")
    Key,
}

/// All numeric descriptors, in presentation order
pub const NUMERIC_KEYS: [FeatureKey; 35] = [
    FeatureKey::Bpm,
    FeatureKey::Energy,
    FeatureKey::Loudness,
    FeatureKey::SpectralCentroid,
    FeatureKey::Rms,
    FeatureKey::SpectralRolloff,
    FeatureKey::SpectralFlatness,
    FeatureKey::ZeroCrossingRate,
    FeatureKey::SpectralContrast,
    FeatureKey::LowEnergy,
    FeatureKey::MidEnergy,
    FeatureKey::HighEnergy,
    FeatureKey::SubBassPresence,
    FeatureKey::Danceability,
    FeatureKey::BeatStrength,
    FeatureKey::OnsetRate,
    FeatureKey::Valence,
    FeatureKey::StereoWidth,
    FeatureKey::KeyConfidence,
    FeatureKey::DynamicRange,
    FeatureKey::LoudnessRange,
    FeatureKey::TruePeak,
    FeatureKey::CrestFactor,
    FeatureKey::TransientEnergy,
    FeatureKey::HarmonicToNoiseRatio,
    FeatureKey::HarmonicComplexity,
    FeatureKey::MelodicRange,
    FeatureKey::RhythmicDensity,
    FeatureKey::ArrangementDensity,
    FeatureKey::RepetitionScore,
    FeatureKey::FrequencyOccupancy,
    FeatureKey::TimbralDiversity,
    FeatureKey::VocalInstrumentalRatio,
    FeatureKey::EnergyCurve,
    FeatureKey::CallResponsePresence,
];

/// The Golden 8: the fixed descriptor subset the gatekeeper operates on,
/// ordered by importance weight
pub const GOLDEN_8: [FeatureKey; 8] = [
    FeatureKey::BeatStrength,
    FeatureKey::OnsetRate,
    FeatureKey::Danceability,
    FeatureKey::Bpm,
    FeatureKey::Energy,
    FeatureKey::SpectralRolloff,
    FeatureKey::SpectralFlatness,
    FeatureKey::DynamicRange,
];

impl FeatureKey {
    /// Wire name of this descriptor (matches the extractor's JSON keys)
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::Bpm => "bpm",
            FeatureKey::Energy => "energy",
            FeatureKey::Loudness => "loudness",
            FeatureKey::SpectralCentroid => "spectral_centroid",
            FeatureKey::Rms => "rms",
            FeatureKey::SpectralRolloff => "spectral_rolloff",
            FeatureKey::SpectralFlatness => "spectral_flatness",
            FeatureKey::ZeroCrossingRate => "zero_crossing_rate",
            FeatureKey::SpectralContrast => "spectral_contrast",
            FeatureKey::LowEnergy => "low_energy",
            FeatureKey::MidEnergy => "mid_energy",
            FeatureKey::HighEnergy => "high_energy",
            FeatureKey::SubBassPresence => "sub_bass_presence",
            FeatureKey::Danceability => "danceability",
            FeatureKey::BeatStrength => "beat_strength",
            FeatureKey::OnsetRate => "onset_rate",
            FeatureKey::Valence => "valence",
            FeatureKey::StereoWidth => "stereo_width",
            FeatureKey::KeyConfidence => "key_confidence",
            FeatureKey::DynamicRange => "dynamic_range",
            FeatureKey::LoudnessRange => "loudness_range",
            FeatureKey::TruePeak => "true_peak",
            FeatureKey::CrestFactor => "crest_factor",
            FeatureKey::TransientEnergy => "transient_energy",
            FeatureKey::HarmonicToNoiseRatio => "harmonic_to_noise_ratio",
            FeatureKey::HarmonicComplexity => "harmonic_complexity",
            FeatureKey::MelodicRange => "melodic_range",
            FeatureKey::RhythmicDensity => "rhythmic_density",
            FeatureKey::ArrangementDensity => "arrangement_density",
            FeatureKey::RepetitionScore => "repetition_score",
            FeatureKey::FrequencyOccupancy => "frequency_occupancy",
            FeatureKey::TimbralDiversity => "timbral_diversity",
            FeatureKey::VocalInstrumentalRatio => "vocal_instrumental_ratio",
            FeatureKey::EnergyCurve => "energy_curve",
            FeatureKey::CallResponsePresence => "call_response_presence",
            FeatureKey::Key => "key",
        }
    }

    /// Parse a wire name into a key
    ///
    /// Returns `None` for anything outside the vocabulary; callers drop such
    /// entries at ingestion.
    pub fn parse(name: &str) -> Option<FeatureKey> {
        let key = match name {
            "bpm" => FeatureKey::Bpm,
            "energy" => FeatureKey::Energy,
            "loudness" => FeatureKey::Loudness,
            "spectral_centroid" => FeatureKey::SpectralCentroid,
            "rms" => FeatureKey::Rms,
            "spectral_rolloff" => FeatureKey::SpectralRolloff,
            "spectral_flatness" => FeatureKey::SpectralFlatness,
            "zero_crossing_rate" => FeatureKey::ZeroCrossingRate,
            "spectral_contrast" => FeatureKey::SpectralContrast,
            "low_energy" => FeatureKey::LowEnergy,
            "mid_energy" => FeatureKey::MidEnergy,
            "high_energy" => FeatureKey::HighEnergy,
            "sub_bass_presence" => FeatureKey::SubBassPresence,
            "danceability" => FeatureKey::Danceability,
            "beat_strength" => FeatureKey::BeatStrength,
            "onset_rate" => FeatureKey::OnsetRate,
            "valence" => FeatureKey::Valence,
            "stereo_width" => FeatureKey::StereoWidth,
            "key_confidence" => FeatureKey::KeyConfidence,
            "dynamic_range" => FeatureKey::DynamicRange,
            "loudness_range" => FeatureKey::LoudnessRange,
            "true_peak" => FeatureKey::TruePeak,
            "crest_factor" => FeatureKey::CrestFactor,
            "transient_energy" => FeatureKey::TransientEnergy,
            "harmonic_to_noise_ratio" => FeatureKey::HarmonicToNoiseRatio,
            "harmonic_complexity" => FeatureKey::HarmonicComplexity,
            "melodic_range" => FeatureKey::MelodicRange,
            "rhythmic_density" => FeatureKey::RhythmicDensity,
            "arrangement_density" => FeatureKey::ArrangementDensity,
            "repetition_score" => FeatureKey::RepetitionScore,
            "frequency_occupancy" => FeatureKey::FrequencyOccupancy,
            "timbral_diversity" => FeatureKey::TimbralDiversity,
            "vocal_instrumental_ratio" => FeatureKey::VocalInstrumentalRatio,
            "energy_curve" => FeatureKey::EnergyCurve,
            "call_response_presence" => FeatureKey::CallResponsePresence,
            "key" => FeatureKey::Key,
            _ => return None,
        };
        Some(key)
    }

    /// Human-readable label used in comparison messages
    pub fn label(&self) -> &'static str {
        match self {
            FeatureKey::Bpm => "BPM",
            FeatureKey::Energy => "Energy",
            FeatureKey::Loudness => "Loudness",
            FeatureKey::SpectralCentroid => "Brightness",
            FeatureKey::Rms => "RMS Level",
            FeatureKey::SpectralRolloff => "High-Freq Content",
            FeatureKey::SpectralFlatness => "Spectral Flatness",
            FeatureKey::ZeroCrossingRate => "Zero Crossing Rate",
            FeatureKey::SpectralContrast => "Spectral Contrast",
            FeatureKey::LowEnergy => "Low Energy",
            FeatureKey::MidEnergy => "Mid Energy",
            FeatureKey::HighEnergy => "High Energy",
            FeatureKey::SubBassPresence => "Sub-Bass",
            FeatureKey::Danceability => "Danceability",
            FeatureKey::BeatStrength => "Beat Strength",
            FeatureKey::OnsetRate => "Onset Rate",
            FeatureKey::Valence => "Valence (Mood)",
            FeatureKey::StereoWidth => "Stereo Width",
            FeatureKey::KeyConfidence => "Key Confidence",
            FeatureKey::DynamicRange => "Dynamic Range",
            FeatureKey::LoudnessRange => "Loudness Range",
            FeatureKey::TruePeak => "True Peak",
            FeatureKey::CrestFactor => "Crest Factor",
            FeatureKey::TransientEnergy => "Transient Energy",
            FeatureKey::HarmonicToNoiseRatio => "Harmonic/Noise Ratio",
            FeatureKey::HarmonicComplexity => "Harmonic Complexity",
            FeatureKey::MelodicRange => "Melodic Range",
            FeatureKey::RhythmicDensity => "Rhythmic Density",
            FeatureKey::ArrangementDensity => "Arrangement Density",
            FeatureKey::RepetitionScore => "Repetition Score",
            FeatureKey::FrequencyOccupancy => "Frequency Occupancy",
            FeatureKey::TimbralDiversity => "Timbral Diversity",
            FeatureKey::VocalInstrumentalRatio => "Vocal/Instrumental",
            FeatureKey::EnergyCurve => "Energy Curve",
            FeatureKey::CallResponsePresence => "Call-Response",
            FeatureKey::Key => "Key",
        }
    }

    /// Unit suffix for message rendering (empty for dimensionless descriptors)
    pub fn unit(&self) -> &'static str {
        match self {
            FeatureKey::Bpm => "BPM",
            FeatureKey::Loudness => "LUFS",
            FeatureKey::SpectralCentroid | FeatureKey::SpectralRolloff => "Hz",
            FeatureKey::SpectralContrast
            | FeatureKey::DynamicRange
            | FeatureKey::CrestFactor
            | FeatureKey::HarmonicToNoiseRatio => "dB",
            FeatureKey::LowEnergy
            | FeatureKey::MidEnergy
            | FeatureKey::HighEnergy
            | FeatureKey::SubBassPresence
            | FeatureKey::TransientEnergy
            | FeatureKey::FrequencyOccupancy => "%",
            FeatureKey::LoudnessRange => "LU",
            FeatureKey::TruePeak => "dBTP",
            FeatureKey::MelodicRange => "semitones",
            FeatureKey::OnsetRate | FeatureKey::RhythmicDensity => "events/s",
            _ => "",
        }
    }

    /// True for the reserved categorical descriptor
    pub fn is_categorical(&self) -> bool {
        matches!(self, FeatureKey::Key)
    }
}
