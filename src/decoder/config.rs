use std::sync::OnceLock;

fn parse_f32(value: Option<String>, default: f32) -> f32 {
    value
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

fn parse_usize(value: Option<String>, default: usize) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_u8(value: Option<String>, default: u8) -> u8 {
    value
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_bool_u8(value: Option<String>, default: bool) -> bool {
    value
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// Tunables for one decoder instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoderConfig {
    /// Fraction of each sampling cell ignored around its border (0.0..0.9)
    pub sample_margin: f32,
    /// Luma strictly below this value counts as a dark pixel
    pub luma_threshold: u8,
    /// Largest Hamming distance accepted when correcting format strings
    pub format_max_corrections: usize,
    /// Largest Hamming distance accepted when correcting version strings
    pub version_max_corrections: usize,
    /// Treat a block as uncorrectable when it needed more than its table capacity
    pub enforce_block_capacity: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            sample_margin: 0.4,
            luma_threshold: 128,
            format_max_corrections: 3,
            version_max_corrections: 3,
            enforce_block_capacity: true,
        }
    }
}

impl DecoderConfig {
    /// Read overrides from `QR_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from `QR_*` values supplied by `lookup`; values are trimmed,
    /// unparsable ones fall back to defaults and the rest are clamped
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = Self::default();
        Self {
            sample_margin: parse_f32(lookup("QR_SAMPLE_MARGIN"), defaults.sample_margin)
                .clamp(0.0, 0.9),
            luma_threshold: parse_u8(lookup("QR_LUMA_THRESHOLD"), defaults.luma_threshold).max(1),
            format_max_corrections: parse_usize(
                lookup("QR_FORMAT_MAX_CORRECTIONS"),
                defaults.format_max_corrections,
            )
            .min(7),
            version_max_corrections: parse_usize(
                lookup("QR_VERSION_MAX_CORRECTIONS"),
                defaults.version_max_corrections,
            )
            .min(8),
            enforce_block_capacity: parse_bool_u8(
                lookup("QR_ENFORCE_BLOCK_CAPACITY"),
                defaults.enforce_block_capacity,
            ),
        }
    }

    /// Process-wide configuration, read from the environment once
    pub fn global() -> &'static DecoderConfig {
        static GLOBAL: OnceLock<DecoderConfig> = OnceLock::new();
        GLOBAL.get_or_init(Self::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert!((config.sample_margin - 0.4).abs() < f32::EPSILON);
        assert_eq!(config.luma_threshold, 128);
        assert_eq!(config.format_max_corrections, 3);
        assert_eq!(config.version_max_corrections, 3);
        assert!(config.enforce_block_capacity);
    }

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_missing_variables_fall_back() {
        assert_eq!(DecoderConfig::from_lookup(|_| None), DecoderConfig::default());
        assert_eq!(parse_usize(None, 7), 7);
        assert!(parse_bool_u8(None, true));
        assert!((parse_f32(None, 0.25) - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_variables_are_trimmed_and_clamped() {
        let config = DecoderConfig::from_lookup(lookup_from(&[
            ("QR_SAMPLE_MARGIN", " 5.0 "),
            ("QR_LUMA_THRESHOLD", "0"),
            ("QR_FORMAT_MAX_CORRECTIONS", "99"),
            ("QR_VERSION_MAX_CORRECTIONS", "99"),
            ("QR_ENFORCE_BLOCK_CAPACITY", "0"),
        ]));
        assert!((config.sample_margin - 0.9).abs() < f32::EPSILON);
        assert_eq!(config.luma_threshold, 1);
        assert_eq!(config.format_max_corrections, 7);
        assert_eq!(config.version_max_corrections, 8);
        assert!(!config.enforce_block_capacity);
    }

    #[test]
    fn test_variables_in_range_are_kept() {
        let config = DecoderConfig::from_lookup(lookup_from(&[
            ("QR_SAMPLE_MARGIN", "0.25"),
            ("QR_LUMA_THRESHOLD", " 90"),
            ("QR_FORMAT_MAX_CORRECTIONS", "2\n"),
            ("QR_VERSION_MAX_CORRECTIONS", "nope"),
            ("QR_ENFORCE_BLOCK_CAPACITY", "1"),
        ]));
        assert!((config.sample_margin - 0.25).abs() < f32::EPSILON);
        assert_eq!(config.luma_threshold, 90);
        assert_eq!(config.format_max_corrections, 2);
        assert_eq!(config.version_max_corrections, 3);
        assert!(config.enforce_block_capacity);

        let negative = DecoderConfig::from_lookup(lookup_from(&[("QR_SAMPLE_MARGIN", "-1")]));
        assert_eq!(negative.sample_margin, 0.0);
        let nan = DecoderConfig::from_lookup(lookup_from(&[("QR_SAMPLE_MARGIN", "NaN")]));
        assert!((nan.sample_margin - 0.4).abs() < f32::EPSILON);
    }
}
