use super::generator::GenerationError;
use crate::games::session_rng::SessionRng;

pub const FALLBACK_PALETTE: &[&str] = &["#FF9999", "#99FF99", "#9999FF"];

pub trait ColorSource: Send + Sync {
    /// One color per letter; neighbouring letters never share a color.
    fn colors_for(&self, len: usize, rng: &mut SessionRng) -> Result<Vec<String>, GenerationError>;
}

/// Evenly spaced hues from a random starting point, kept saturated and light
/// enough to read on a dark background.
#[derive(Debug, Clone, Copy)]
pub struct BrightColorSource {
    saturation: f64,
    lightness: f64,
}

impl BrightColorSource {
    pub fn new(saturation: f64, lightness: f64) -> Self {
        Self {
            saturation,
            lightness,
        }
    }
}

impl Default for BrightColorSource {
    fn default() -> Self {
        Self::new(0.85, 0.62)
    }
}

impl ColorSource for BrightColorSource {
    fn colors_for(&self, len: usize, rng: &mut SessionRng) -> Result<Vec<String>, GenerationError> {
        if len == 0 {
            return Ok(Vec::new());
        }

        let step = 360.0 / len as f64;
        let base_hue: f64 = rng.random_range(0.0..360.0);
        let jitter = step / 4.0;

        let mut colors: Vec<String> = Vec::with_capacity(len);
        for i in 0..len {
            let offset: f64 = if jitter > 0.0 {
                rng.random_range(-jitter..jitter)
            } else {
                0.0
            };
            let mut hue = (base_hue + step * i as f64 + offset).rem_euclid(360.0);
            if hue >= 360.0 {
                hue = 0.0;
            }
            let color = hsl_to_hex(hue, self.saturation, self.lightness)?;
            if colors.last() == Some(&color) {
                return Err(GenerationError::IndistinctColors);
            }
            colors.push(color);
        }
        Ok(colors)
    }
}

pub(crate) fn fallback_colors(len: usize) -> Vec<String> {
    FALLBACK_PALETTE
        .iter()
        .cycle()
        .take(len)
        .map(|c| c.to_string())
        .collect()
}

pub(crate) fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> Result<String, GenerationError> {
    let in_range = hue.is_finite()
        && (0.0..360.0).contains(&hue)
        && (0.0..=1.0).contains(&saturation)
        && (0.0..=1.0).contains(&lightness);
    if !in_range {
        return Err(GenerationError::InvalidColor {
            hue,
            saturation,
            lightness,
        });
    }

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    Ok(format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b)))
}
