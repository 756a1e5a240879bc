//! Ready-made patterns for common data formats.
//!
//! Every constant is a pattern source ready for [`StringGen`](crate::StringGen).
//! The patterns avoid `\w`, `\d`, `\s`, `\W`, `\D`, `\S` and `.` so their
//! output never shifts when a custom alphabet is configured.
//!
//! ```
//! use strgen::{patterns, StringGen};
//!
//! let mut gen = StringGen::builder(patterns::UUID4).seed(7u64).build().unwrap();
//! assert_eq!(gen.render().len(), 36);
//! ```

// Identifiers
pub const UUID4: &str = "[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}";
pub const OBJECT_ID: &str = "[a-f0-9]{24}";

// Network
pub const IPV4: &str = concat!(
    "(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])\\.",
    "(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])\\.",
    "(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])\\.",
    "(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])",
);
pub const IPV6_SHORT: &str = "[a-f0-9]{1,4}(:[a-f0-9]{1,4}){7}";
pub const MAC_ADDRESS: &str = "[a-f0-9]{2}(:[a-f0-9]{2}){5}";

// Web
pub const HEX_COLOR: &str = "#[a-fA-F0-9]{6}";
pub const HEX_COLOR_SHORT: &str = "#[a-fA-F0-9]{3}";
pub const SLUG: &str = "[a-z][a-z0-9]*(-[a-z0-9]+){1,5}";

// Data formats
pub const SEMVER: &str = "(0|[1-9][0-9]*)\\.(0|[1-9][0-9]*)\\.(0|[1-9][0-9]*)";
pub const DATE_ISO: &str = "20[2-3][0-9]-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])";
pub const TIME_24H: &str = "([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]";

// Security / auth
pub const JWT_LIKE: &str =
    "[A-Za-z0-9_-]{20,40}\\.[A-Za-z0-9_-]{20,60}\\.[A-Za-z0-9_-]{20,40}";
pub const API_KEY: &str = "(sk|pk)_(live|test)_[a-zA-Z0-9]{20}";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringGen;

    const ALL: &[(&str, &str)] = &[
        ("UUID4", UUID4),
        ("OBJECT_ID", OBJECT_ID),
        ("IPV4", IPV4),
        ("IPV6_SHORT", IPV6_SHORT),
        ("MAC_ADDRESS", MAC_ADDRESS),
        ("HEX_COLOR", HEX_COLOR),
        ("HEX_COLOR_SHORT", HEX_COLOR_SHORT),
        ("SLUG", SLUG),
        ("SEMVER", SEMVER),
        ("DATE_ISO", DATE_ISO),
        ("TIME_24H", TIME_24H),
        ("JWT_LIKE", JWT_LIKE),
        ("API_KEY", API_KEY),
    ];

    #[test]
    fn test_all_patterns_parse() {
        for &(name, pattern) in ALL {
            assert!(
                StringGen::new(pattern).is_ok(),
                "pattern {name} failed to parse"
            );
        }
    }

    #[test]
    fn test_uuid4_shape() {
        let mut gen = StringGen::builder(UUID4).seed(42u64).build().unwrap();
        for _ in 0..20 {
            let value = gen.render();
            assert_eq!(value.len(), 36);
            let dashes: Vec<usize> = value
                .char_indices()
                .filter(|(_, c)| *c == '-')
                .map(|(i, _)| i)
                .collect();
            assert_eq!(dashes, vec![8, 13, 18, 23]);
            assert_eq!(value.as_bytes()[14], b'4', "version nibble");
        }
    }

    #[test]
    fn test_ipv4_octets_in_range() {
        let mut gen = StringGen::builder(IPV4).seed(1u64).build().unwrap();
        for _ in 0..50 {
            let value = gen.render();
            let octets: Vec<&str> = value.split('.').collect();
            assert_eq!(octets.len(), 4, "got {value:?}");
            for octet in octets {
                let n: u32 = octet.parse().expect("numeric octet");
                assert!(n <= 255, "octet {octet} out of range in {value:?}");
            }
        }
    }

    #[test]
    fn test_time_24h_in_range() {
        let mut gen = StringGen::builder(TIME_24H).seed(9u64).build().unwrap();
        for _ in 0..50 {
            let value = gen.render();
            let parts: Vec<u32> = value.split(':').map(|p| p.parse().unwrap()).collect();
            assert!(parts[0] < 24 && parts[1] < 60 && parts[2] < 60, "{value:?}");
        }
    }

    #[test]
    fn test_hex_color_charset() {
        let mut gen = StringGen::builder(HEX_COLOR).seed(3u64).build().unwrap();
        let value = gen.render();
        assert!(value.starts_with('#'));
        assert!(value[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_patterns_are_alphabet_independent() {
        let mut gen = StringGen::builder(SEMVER)
            .seed(5u64)
            .alphabet("αβγ")
            .build()
            .unwrap();
        let value = gen.render();
        assert!(value.chars().all(|c| c.is_ascii_digit() || c == '.'));
    }
}
