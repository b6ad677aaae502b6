use iced_core::Color;
use palette::{
    FromColor, Hsla, Hsva, RgbHue,
    rgb::{Rgb, Rgba},
};

/// Hue step between consecutive line colors, the golden angle.
const HUE_STEP: f32 = 137.508;

pub fn color_to_hex(color: Color) -> String {
    use std::fmt::Write;

    let mut hex = String::with_capacity(9);

    let [r, g, b, a] = color.into_rgba8();

    let _ = write!(&mut hex, "#");
    let _ = write!(&mut hex, "{r:02X}");
    let _ = write!(&mut hex, "{g:02X}");
    let _ = write!(&mut hex, "{b:02X}");

    if a < u8::MAX {
        let _ = write!(&mut hex, "{a:02X}");
    }

    hex
}

pub fn from_hsva(color: Hsva) -> Color {
    to_color(palette::Srgba::from_color(color))
}

fn to_color(rgba: Rgba) -> Color {
    Color {
        r: rgba.color.red,
        g: rgba.color.green,
        b: rgba.color.blue,
        a: rgba.alpha,
    }
}

fn to_rgb(color: Color) -> Rgb {
    Rgb {
        red: color.r,
        green: color.g,
        blue: color.b,
        ..Rgb::default()
    }
}

fn to_rgba(color: Color) -> Rgba {
    Rgba {
        alpha: color.a,
        color: to_rgb(color),
    }
}

pub fn lighten(color: Color, amount: f32) -> Color {
    let mut hsla = Hsla::from_color(to_rgba(color));
    hsla.lightness = (hsla.lightness + amount).clamp(0.0, 1.0);
    to_color(palette::Srgba::from_color(hsla))
}

pub fn from_hsv_degrees(h_deg: f32, s: f32, v: f32) -> Color {
    // Hue in degrees [0,360), s,v in [0,1]
    let hue = RgbHue::from_degrees(h_deg);
    from_hsva(Hsva::new(hue, s, v, 1.0))
}

/// Distinct color for the `index`-th line of a graph.
pub fn line_color(index: usize) -> Color {
    let hue = (index as f32 * HUE_STEP).rem_euclid(360.0);
    from_hsv_degrees(hue, 0.65, 0.85)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(color_to_hex(Color::from_rgb8(211, 211, 211)), "#D3D3D3");
        assert_eq!(
            color_to_hex(Color::from_rgba8(255, 0, 16, 0.0)),
            "#FF001000"
        );
    }

    #[test]
    fn lighten_raises_lightness() {
        let base = Color::from_rgb8(40, 80, 160);
        let lighter = lighten(base, 0.2);
        assert!(lighter.r + lighter.g + lighter.b > base.r + base.g + base.b);
    }

    #[test]
    fn consecutive_line_colors_differ() {
        assert_ne!(line_color(0), line_color(1));
        assert_ne!(line_color(1), line_color(2));
    }
}
