use crate::color_565::Color565;
use crate::color_8888::Color8888;

#[test]
fn can_convert_color_8888_to_565() {
    // Test with pure colors
    let red = Color8888::new(255, 0, 0, 255);
    let green = Color8888::new(0, 255, 0, 255);
    let blue = Color8888::new(0, 0, 255, 255);

    assert_eq!(red.to_color_565().raw_value(), 0xF800);
    assert_eq!(green.to_color_565().raw_value(), 0x07E0);
    assert_eq!(blue.to_color_565().raw_value(), 0x001F);
}

#[test]
fn can_round_trip_565_through_8888() {
    // Expanding then truncating must reproduce every 16-bit value exactly.
    for raw in 0..=u16::MAX {
        let original = Color565::from_raw(raw);
        let round_trip = original.to_color_8888().to_color_565();
        assert_eq!(
            original, round_trip,
            "Round trip failed for {raw:#06X}: got {:#06X}",
            round_trip.raw_value()
        );
    }
}

#[test]
fn bgra_bytes_are_swizzled_to_rgba() {
    let pixel = Color8888::from_bgra([0x10, 0x20, 0x30, 0x40]);
    assert_eq!(pixel.to_rgba(), [0x30, 0x20, 0x10, 0x40]);
}

#[test]
fn alpha_is_applied_on_request() {
    let color = Color565::from_raw(0xFFFF).to_color_8888_with_alpha(17);
    assert_eq!(color, Color8888::new(255, 255, 255, 17));
}
