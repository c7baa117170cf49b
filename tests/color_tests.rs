use pitchcaller::color::{contrast_tone, Rgb, TextTone};
use pitchcaller::pitches::PALETTE;
use rstest::rstest;

#[rstest]
#[case("#cd1c18", TextTone::Light)] // Red, L ~ 80
#[case("#FF8000", TextTone::Dark)] // Orange, L ~ 151
#[case("#ffde21", TextTone::Dark)] // Yellow
#[case("#008000", TextTone::Light)] // Green
#[case("#0077b6", TextTone::Light)] // Blue
#[case("#c41dc2", TextTone::Light)] // Purple
#[case("#FFA6C9", TextTone::Dark)] // Pink
#[case("#64748b", TextTone::Light)] // Slate
#[case("#ffffff", TextTone::Dark)]
#[case("#000000", TextTone::Light)]
fn test_palette_contrast(#[case] hex: &str, #[case] expected: TextTone) {
    assert_eq!(contrast_tone(hex), expected, "Wrong tone for {}", hex);
}

#[rstest]
#[case("#8b8b8b", TextTone::Light)] // L = 139
#[case("#8c8c8c", TextTone::Light)] // L = 140, inclusive
#[case("#8d8d8d", TextTone::Dark)] // L = 141
fn test_threshold_neighbourhood(#[case] hex: &str, #[case] expected: TextTone) {
    assert_eq!(contrast_tone(hex), expected);
}

#[rstest]
#[case("not a color")]
#[case("#12345")]
#[case("#zzzzzz")]
fn test_unparseable_color_gets_light_text(#[case] hex: &str) {
    assert!(Rgb::from_hex(hex).is_err());
    assert_eq!(contrast_tone(hex), TextTone::Light);
}

#[test]
fn test_luminance_weights() {
    let rgb = Rgb::from_hex("#ff0000").unwrap();
    assert!((rgb.luminance() - 0.299 * 255.0).abs() < 1e-9);
    assert_eq!(TextTone::Light.rgb(), Rgb::WHITE);
    assert_eq!(TextTone::Dark.rgb(), Rgb::BLACK);
}

#[test]
fn test_every_palette_color_parses() {
    for hex in PALETTE {
        assert!(Rgb::from_hex(hex).is_ok(), "{} should parse", hex);
    }
}
