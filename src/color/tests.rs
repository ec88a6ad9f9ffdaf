//! Unit tests for color module

use super::contrast::brightness;
use super::convert::{hex_to_rgb, rgb_to_hsb};
use super::{Cmyk, Hsb, Rgb, contrast_color, hex_to_hsb, hsb_to_hex, hsb_to_rgb, rgb_to_cmyk};

fn assert_hsb_near(actual: Hsb, expected: (f64, f64, f64)) {
    let (h, s, b) = expected;
    assert!(
        (actual.h - h).abs() < 1e-6 && (actual.s - s).abs() < 1e-6 && (actual.b - b).abs() < 1e-6,
        "Expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_hex_to_rgb_with_and_without_hash() {
    assert_eq!(hex_to_rgb("#3366CC").unwrap(), Rgb::new(51, 102, 204));
    assert_eq!(hex_to_rgb("3366cc").unwrap(), Rgb::new(51, 102, 204));
    assert_eq!(hex_to_rgb("#ffffff").unwrap(), Rgb::WHITE);
}

#[test]
fn test_hex_to_rgb_rejects_wrong_length() {
    for input in ["", "#", "#fff", "#12345", "#1234567", "##3366cc"] {
        let err = hex_to_rgb(input).unwrap_err();
        assert_eq!(err.input, input);
        assert_eq!(err.reason, "expected 6 hex digits", "input {:?}", input);
    }
}

#[test]
fn test_hex_to_rgb_rejects_non_hex() {
    for input in ["#gg0000", "zzzzzz", "#12 456", "+12345"] {
        let err = hex_to_rgb(input).unwrap_err();
        assert_eq!(err.reason, "contains non-hex characters", "input {:?}", input);
    }
}

#[test]
fn test_hex_to_rgb_multibyte_input_does_not_panic() {
    // 6 bytes, 5 chars
    assert!(hex_to_rgb("é1234").is_err());
}

#[test]
fn test_format_error_message() {
    let err = hex_to_rgb("#12").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid hex color '#12': expected 6 hex digits"
    );
}

#[test]
fn test_rgb_to_hsb_seed_example() {
    // #3366CC
    assert_hsb_near(rgb_to_hsb(Rgb::new(51, 102, 204)), (220.0, 75.0, 80.0));
}

#[test]
fn test_rgb_to_hsb_primaries() {
    assert_hsb_near(rgb_to_hsb(Rgb::new(255, 0, 0)), (0.0, 100.0, 100.0));
    assert_hsb_near(rgb_to_hsb(Rgb::new(0, 255, 0)), (120.0, 100.0, 100.0));
    assert_hsb_near(rgb_to_hsb(Rgb::new(0, 0, 255)), (240.0, 100.0, 100.0));
}

#[test]
fn test_rgb_to_hsb_grays_have_no_hue() {
    assert_hsb_near(rgb_to_hsb(Rgb::BLACK), (0.0, 0.0, 0.0));
    assert_hsb_near(rgb_to_hsb(Rgb::WHITE), (0.0, 0.0, 100.0));
}

#[test]
fn test_rgb_to_hsb_hue_wraps_below_360() {
    // Red with a hint of blue sits just under 360
    let hsb = rgb_to_hsb(Rgb::new(255, 0, 1));
    assert!(hsb.h > 359.0 && hsb.h < 360.0, "got {}", hsb.h);
}

#[test]
fn test_hsb_new_wraps_hue() {
    assert_eq!(Hsb::new(360.0, 10.0, 10.0).h, 0.0);
    assert_eq!(Hsb::new(-20.0, 10.0, 10.0).h, 340.0);
    assert_eq!(Hsb::new(359.6, 0.0, 0.0).rounded().h, 0.0);
}

#[test]
fn test_hsb_to_rgb_truncates() {
    // 0.8 * (1 - 0.75 * 0.6667) * 255 = 101.99..., truncated to 101
    assert_eq!(
        hsb_to_rgb(Hsb::new(220.0, 75.0, 80.0)),
        Rgb::new(51, 101, 204)
    );
}

#[test]
fn test_hsb_to_rgb_primaries() {
    assert_eq!(hsb_to_rgb(Hsb::new(0.0, 100.0, 100.0)), Rgb::new(255, 0, 0));
    assert_eq!(hsb_to_rgb(Hsb::new(120.0, 100.0, 100.0)), Rgb::new(0, 255, 0));
    assert_eq!(hsb_to_rgb(Hsb::new(240.0, 100.0, 100.0)), Rgb::new(0, 0, 255));
    assert_eq!(hsb_to_rgb(Hsb::new(42.0, 0.0, 0.0)), Rgb::BLACK);
}

#[test]
fn test_hsb_to_hex_rounds() {
    assert_eq!(hsb_to_hex(Hsb::new(220.0, 75.0, 80.0)), "#3366cc");
    assert_eq!(hsb_to_hex(Hsb::new(0.0, 0.0, 100.0)), "#ffffff");
    assert_eq!(hsb_to_hex(Hsb::new(220.0, 15.0, 70.0)), "#98a1b2");
}

#[test]
fn test_hsb_to_hex_out_of_range_input_is_clamped() {
    assert_eq!(hsb_to_hex(Hsb::new(0.0, -10.0, 150.0)), "#ffffff");
    assert_eq!(hsb_to_hex(Hsb::new(0.0, 50.0, -5.0)), "#000000");
}

#[test]
fn test_hex_round_trip_is_exact() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(51) {
                let hex = Rgb::new(r, g, b).to_hex();
                let back = hsb_to_hex(hex_to_hsb(&hex).unwrap());
                assert_eq!(back, hex);
            }
        }
    }
}

#[test]
fn test_hex_round_trip_within_one_after_rgb_truncation() {
    for hex in ["#3366cc", "#0a0a0c", "#ff68a8", "#48f89c", "#7840f8", "#010203"] {
        let original = hex_to_rgb(hex).unwrap();
        let rgb = hsb_to_rgb(hex_to_hsb(hex).unwrap());
        for (a, b) in [(original.r, rgb.r), (original.g, rgb.g), (original.b, rgb.b)] {
            assert!(a.abs_diff(b) <= 1, "{}: {} vs {}", hex, original, rgb);
        }
    }
}

#[test]
fn test_cmyk_black_point() {
    assert_eq!(
        rgb_to_cmyk(Rgb::BLACK),
        Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 100
        }
    );
}

#[test]
fn test_cmyk_known_values() {
    assert_eq!(
        rgb_to_cmyk(Rgb::new(51, 102, 204)),
        Cmyk {
            c: 75,
            m: 50,
            y: 0,
            k: 20
        }
    );
    assert_eq!(
        rgb_to_cmyk(Rgb::WHITE),
        Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 0
        }
    );
    assert_eq!(
        rgb_to_cmyk(Rgb::new(255, 0, 0)),
        Cmyk {
            c: 0,
            m: 100,
            y: 100,
            k: 0
        }
    );
}

#[test]
fn test_brightness_weights() {
    assert!((brightness(Rgb::new(51, 102, 204)) - 75.5718).abs() < 1e-9);
    assert!((brightness(Rgb::new(0, 0, 255)) - 0.561).abs() < 1e-9);
    assert_eq!(brightness(Rgb::BLACK), 0.0);
}

#[test]
fn test_contrast_color_extremes() {
    assert_eq!(contrast_color(Rgb::WHITE), Rgb::BLACK);
    assert_eq!(contrast_color(Rgb::BLACK), Rgb::WHITE);
}

#[test]
fn test_contrast_color_pure_blue_gets_white_text() {
    assert_eq!(contrast_color(Rgb::new(0, 0, 255)), Rgb::WHITE);
    assert_eq!(contrast_color(Rgb::new(255, 255, 0)), Rgb::BLACK);
}

#[test]
fn test_display_formats() {
    assert_eq!(Rgb::new(1, 2, 3).to_string(), "(1, 2, 3)");
    assert_eq!(Hsb::new(220.0, 75.0, 80.0).to_string(), "(220, 75, 80)");
    assert_eq!(rgb_to_cmyk(Rgb::BLACK).to_string(), "(0, 0, 0, 100)");
}
