//! Properties that hold for every input string.

use impress_colorhash::{
    bkdr_hash, hex, hsl, rgb, ColorHash, PaletteConfig, DEFAULT_LEVELS, MAX_SAFE_INTEGER,
};
use proptest::prelude::*;

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

proptest! {
    #[test]
    fn test_hex_is_deterministic(text in any::<String>()) {
        prop_assert_eq!(hex(&text), hex(&text));
        prop_assert_eq!(ColorHash::default().hex(&text), hex(&text));
    }

    #[test]
    fn test_outputs_in_range(text in any::<String>()) {
        let selected = hsl(&text);
        prop_assert!(selected.hue < 359);
        prop_assert!(DEFAULT_LEVELS.contains(&selected.saturation));
        prop_assert!(DEFAULT_LEVELS.contains(&selected.lightness));
        prop_assert!(is_hex_color(&hex(&text)), "bad hex {}", hex(&text));
        // u8 channels are in [0, 255] by type; they must agree with hex
        let color = rgb(&text);
        prop_assert_eq!(color.to_hex(), hex(&text));
    }

    #[test]
    fn test_hash_stays_below_safe_integer(text in ".{0,2000}") {
        prop_assert!(bkdr_hash(&text) <= MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_hue_ignores_palette_values(
        text in any::<String>(),
        saturation in proptest::collection::vec(0.0f64..=1.0, 3),
        lightness in proptest::collection::vec(0.0f64..=1.0, 3),
    ) {
        let custom = ColorHash::new(
            PaletteConfig::new()
                .with_saturation_levels(saturation.clone())
                .with_lightness_levels(lightness.clone()),
        )
        .unwrap();
        let default = ColorHash::default();

        let picked = custom.hsl(&text);
        prop_assert_eq!(picked.hue, default.hsl(&text).hue);

        // same-length palettes pick the same indices
        let index_of = |levels: &[f64], value: f64| levels.iter().position(|&l| l == value);
        let baseline = default.hsl(&text);
        prop_assert!(saturation.contains(&picked.saturation));
        prop_assert!(lightness.contains(&picked.lightness));
        if let (Some(i), Some(j)) = (
            index_of(&DEFAULT_LEVELS, baseline.saturation),
            index_of(&DEFAULT_LEVELS, baseline.lightness),
        ) {
            prop_assert_eq!(picked.saturation, saturation[i]);
            prop_assert_eq!(picked.lightness, lightness[j]);
        }
    }

    #[test]
    fn test_utf16_and_bytes_agree_with_str(text in any::<String>()) {
        let colors = ColorHash::default();
        let units: Vec<u16> = text.encode_utf16().collect();
        prop_assert_eq!(colors.hex_utf16(&units).unwrap(), colors.hex(&text));
        prop_assert_eq!(colors.hex_bytes(text.as_bytes()).unwrap(), colors.hex(&text));
    }
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let texts: Vec<String> = (0..200).map(|i| format!("tag/{i}")).collect();
    let expected: Vec<String> = texts.iter().map(|t| hex(t)).collect();
    let colors = ColorHash::default();
    let (texts, colors) = (&texts, &colors);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    let free: Vec<String> = texts.iter().map(|t| hex(t)).collect();
                    let shared: Vec<String> = texts.iter().map(|t| colors.hex(t)).collect();
                    (free, shared)
                })
            })
            .collect();

        for handle in handles {
            let (free, shared) = handle.join().unwrap();
            assert_eq!(free, expected);
            assert_eq!(shared, expected);
        }
    });
}
