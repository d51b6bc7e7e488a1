use rand::seq::SliceRandom;
use rand::Rng;

const SATURATION: f64 = 0.70;
const LIGHTNESS: f64 = 0.45;

/// Display colors for `count` groups: hues evenly spaced around the wheel,
/// shuffled with the supplied RNG, rendered at fixed saturation and
/// lightness as `#rrggbb` strings.
pub fn group_colors<R>(count: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    if count == 0 {
        return Vec::new();
    }

    let mut hues: Vec<f64> = (0..count).map(|i| i as f64 / count as f64).collect();
    hues.shuffle(rng);
    hues.into_iter()
        .map(|hue| hsl_to_hex(hue, SATURATION, LIGHTNESS))
        .collect()
}

fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue * 6.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as usize {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;

    format!("#{:02x}{:02x}{:02x}", channel(r + m), channel(g + m), channel(b + m))
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
