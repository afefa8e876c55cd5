//! Comparison message rendering
//!
//! Messages always encode the direction of the deviation. Five descriptors
//! (tempo, energy, loudness, brightness, RMS) carry concrete corrective
//! suggestions tied to that direction; every other numeric descriptor uses a
//! uniform generic message. Wording is presentation, the direction and band
//! are the contract.

use crate::features::key::FeatureKey;
use crate::profile::ProfileStat;

use super::banding::CompatibilityStatus;

/// Render the message for one compared feature
pub fn feature_message(
    key: FeatureKey,
    value: f64,
    stat: &ProfileStat,
    band: CompatibilityStatus,
) -> String {
    match key {
        FeatureKey::Bpm => bpm_message(value, stat, band),
        FeatureKey::Energy => energy_message(value, stat, band),
        FeatureKey::Loudness => loudness_message(value, stat, band),
        FeatureKey::SpectralCentroid => brightness_message(value, stat, band),
        FeatureKey::Rms => rms_message(value, stat, band),
        _ => generic_message(key, value, stat, band),
    }
}

fn bpm_message(bpm: f64, stat: &ProfileStat, band: CompatibilityStatus) -> String {
    let diff = (bpm - stat.mean).abs();
    match band {
        CompatibilityStatus::Perfect => {
            format!("Tempo: {:.1} BPM - perfect match (target: {:.1})", bpm, stat.mean)
        }
        CompatibilityStatus::Good => format!(
            "Tempo: {:.1} BPM - good fit (range: {:.1}-{:.1})",
            bpm, stat.min, stat.max
        ),
        CompatibilityStatus::Warning => {
            let action = if bpm < stat.mean { "speed up" } else { "slow down" };
            format!(
                "Tempo: {:.1} BPM - {} by ~{:.0} BPM (target: {:.1})",
                bpm, action, diff, stat.mean
            )
        }
        CompatibilityStatus::Critical => {
            let verdict = if bpm > stat.mean { "too fast" } else { "too slow" };
            format!(
                "Tempo: {:.1} BPM - {}! Change by ~{:.0} BPM (target: {:.1})",
                bpm, verdict, diff, stat.mean
            )
        }
    }
}

fn energy_message(energy: f64, stat: &ProfileStat, band: CompatibilityStatus) -> String {
    match band {
        CompatibilityStatus::Perfect => {
            format!("Energy: {:.3} - ideal intensity level", energy)
        }
        CompatibilityStatus::Good => {
            format!("Energy: {:.3} - good fit (target: {:.3})", energy, stat.mean)
        }
        CompatibilityStatus::Warning => {
            let verdict = if energy > stat.mean { "too high" } else { "too low" };
            format!("Energy: {:.3} - {} (target: {:.3})", energy, verdict, stat.mean)
        }
        CompatibilityStatus::Critical => {
            let suggestion = if energy > stat.mean {
                "reduce intensity/compression"
            } else {
                "increase intensity/dynamics"
            };
            format!("Energy: {:.3} - {} (target: {:.3})", energy, suggestion, stat.mean)
        }
    }
}

fn loudness_message(loudness: f64, stat: &ProfileStat, band: CompatibilityStatus) -> String {
    let diff = (loudness - stat.mean).abs();
    match band {
        CompatibilityStatus::Perfect => {
            format!("Loudness: {:.1} LUFS - ideal mastering level", loudness)
        }
        CompatibilityStatus::Good => format!(
            "Loudness: {:.1} LUFS - good mastering (target: {:.1})",
            loudness, stat.mean
        ),
        CompatibilityStatus::Warning => {
            let verdict = if loudness > stat.mean { "too loud" } else { "too quiet" };
            format!(
                "Loudness: {:.1} LUFS - {}. Adjust by ~{:.1} dB (target: {:.1})",
                loudness, verdict, diff, stat.mean
            )
        }
        CompatibilityStatus::Critical => {
            let action = if loudness > stat.mean { "lower" } else { "raise" };
            format!(
                "Loudness: {:.1} LUFS - {} mastering level by ~{:.1} dB! (target: {:.1})",
                loudness, action, diff, stat.mean
            )
        }
    }
}

fn brightness_message(centroid: f64, stat: &ProfileStat, band: CompatibilityStatus) -> String {
    match band {
        CompatibilityStatus::Perfect => {
            format!("Brightness: {:.0} Hz - ideal tonal balance", centroid)
        }
        CompatibilityStatus::Good => format!(
            "Brightness: {:.0} Hz - good fit (target: {:.0})",
            centroid, stat.mean
        ),
        CompatibilityStatus::Warning => {
            let (verdict, eq) = if centroid > stat.mean {
                ("too bright", "cut highs (8kHz+)")
            } else {
                ("too dark", "boost highs (5-10kHz)")
            };
            format!(
                "Brightness: {:.0} Hz - {}. {} (target: {:.0})",
                centroid, verdict, eq, stat.mean
            )
        }
        CompatibilityStatus::Critical => {
            let eq = if centroid > stat.mean {
                "strongly lower high-shelf"
            } else {
                "strongly raise high-shelf"
            };
            format!("Brightness: {:.0} Hz - {}! (target: {:.0})", centroid, eq, stat.mean)
        }
    }
}

fn rms_message(rms: f64, stat: &ProfileStat, band: CompatibilityStatus) -> String {
    match band {
        CompatibilityStatus::Perfect => {
            format!("RMS Level: {:.3} - ideal dynamics", rms)
        }
        CompatibilityStatus::Good => {
            format!("RMS Level: {:.3} - good dynamics (target: {:.3})", rms, stat.mean)
        }
        CompatibilityStatus::Warning => {
            let action = if rms > stat.mean {
                "reduce compression"
            } else {
                "increase compression"
            };
            format!("RMS Level: {:.3} - {} (target: {:.3})", rms, action, stat.mean)
        }
        CompatibilityStatus::Critical => {
            let suggestion = if rms > stat.mean {
                "over-compressed! Reduce limiting"
            } else {
                "under-compressed! Increase limiting"
            };
            format!("RMS Level: {:.3} - {} (target: {:.3})", rms, suggestion, stat.mean)
        }
    }
}

fn generic_message(
    key: FeatureKey,
    value: f64,
    stat: &ProfileStat,
    band: CompatibilityStatus,
) -> String {
    let value_str = with_unit(value, key.unit());
    let target_str = with_unit(stat.mean, key.unit());
    match band {
        CompatibilityStatus::Perfect => {
            format!("{}: {} - perfect match", key.label(), value_str)
        }
        CompatibilityStatus::Good => {
            format!("{}: {} - good fit (target: {})", key.label(), value_str, target_str)
        }
        CompatibilityStatus::Warning => {
            let direction = if value > stat.mean { "above" } else { "below" };
            format!(
                "{}: {} - slightly {} the playlist average (target: {})",
                key.label(),
                value_str,
                direction,
                target_str
            )
        }
        CompatibilityStatus::Critical => {
            let direction = if value > stat.mean { "above" } else { "below" };
            format!(
                "{}: {} - well {} the playlist envelope! (target: {})",
                key.label(),
                value_str,
                direction,
                target_str
            )
        }
    }
}

fn with_unit(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{:.2} {}", value, unit)
    }
}
