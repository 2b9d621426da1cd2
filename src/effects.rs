//! Pure helpers for the decorative animation in the page sections.
//!
//! Nothing here holds state. Randomness is derived from a seed so the server
//! render and the hydrated client lay out the same particles.

/// Interval between decrypt-text frames.
pub const DECRYPT_TICK_MS: u64 = 30;
/// Ticks needed to lock in one more character.
pub const TICKS_PER_CHAR: u32 = 3;

const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn scatter(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Uniform value in `[0, 1)` for `seed`.
fn unit(seed: u64) -> f64 {
    (scatter(seed) >> 11) as f64 / (1u64 << 53) as f64
}

/// One frame of the "decrypting" headline: characters before the reveal
/// cursor are final, the rest are scrambled capitals.
pub fn decrypt_frame(text: &str, tick: u32) -> String {
    let revealed = (tick / TICKS_PER_CHAR) as usize;
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            if i < revealed {
                c
            } else {
                let pick = scatter(((tick as u64) << 32) | i as u64) % GLYPHS.len() as u64;
                GLYPHS[pick as usize] as char
            }
        })
        .collect()
}

pub fn is_decrypted(text: &str, tick: u32) -> bool {
    (tick / TICKS_PER_CHAR) as usize >= text.chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in percent of the container.
    pub x: f64,
    /// Vertical position in percent of the container.
    pub y: f64,
    /// Diameter in pixels.
    pub size: f64,
    /// Seconds per drift cycle.
    pub duration: f64,
    /// Seconds before the first cycle starts.
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.x, self.y, self.size, self.size, self.duration, self.delay
        )
    }
}

pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    (0..count as u64)
        .map(|i| {
            let base = seed.wrapping_mul(1_000).wrapping_add(i * 5);
            Particle {
                x: unit(base) * 100.0,
                y: unit(base + 1) * 100.0,
                size: unit(base + 2) * 2.5 + 1.0,
                duration: unit(base + 3) * 16.0 + 10.0,
                delay: unit(base + 4) * 5.0,
            }
        })
        .collect()
}

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)` inside a card
/// of `width` × `height`.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let dx = (x - width / 2.0) / 12.0;
    let dy = (y - height / 2.0) / 12.0;
    (dy * -0.6, dx * 0.6)
}

/// Hero fade while scrolling away: `(opacity, translate_y_px)`. The hero is
/// fully faded once half a viewport has scrolled past.
pub fn hero_fade(scroll_y: f64, viewport_height: f64) -> (f64, f64) {
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return (1.0, 0.0);
    }
    let progress = (scroll_y / viewport_height / 0.5).clamp(0.0, 1.0);
    (1.0 - progress, progress * 50.0)
}

/// Append a two-digit hex alpha to a `#rrggbb` color, e.g. `#818cf8` + 0x30.
pub fn with_alpha(color: &str, alpha: u8) -> String {
    format!("{color}{alpha:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrypt_starts_scrambled() {
        let frame = decrypt_frame("SAAD EDROOS", 0);
        assert_eq!(frame.chars().count(), 11);
        assert!(frame.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_decrypt_reveals_one_char_per_three_ticks() {
        let frame = decrypt_frame("HELLO", 6);
        assert!(frame.starts_with("HE"));
        assert!(!is_decrypted("HELLO", 14));
        assert!(is_decrypted("HELLO", 15));
        assert_eq!(decrypt_frame("HELLO", 15), "HELLO");
    }

    #[test]
    fn test_decrypt_is_deterministic() {
        assert_eq!(decrypt_frame("PORTFOLIO", 4), decrypt_frame("PORTFOLIO", 4));
    }

    #[test]
    fn test_particle_field_ranges() {
        let field = particle_field(20, 7);
        assert_eq!(field.len(), 20);
        for p in &field {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((1.0..3.5).contains(&p.size));
            assert!((10.0..26.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
        }
        assert_eq!(field, particle_field(20, 7));
        assert_ne!(field, particle_field(20, 8));
    }

    #[test]
    fn test_particle_style() {
        let p = Particle {
            x: 10.0,
            y: 20.5,
            size: 2.0,
            duration: 12.0,
            delay: 0.25,
        };
        assert_eq!(
            p.style(),
            "left: 10.00%; top: 20.50%; width: 2.00px; height: 2.00px; animation-duration: 12.00s; animation-delay: 0.25s"
        );
    }

    #[test]
    fn test_tilt_is_flat_at_center() {
        assert_eq!(tilt_angles(140.0, 170.0, 280.0, 340.0), (-0.0, 0.0));
        let (rx, ry) = tilt_angles(280.0, 0.0, 280.0, 340.0);
        assert!(rx > 0.0);
        assert!(ry > 0.0);
        assert!((ry - 7.0).abs() < 1e-9);
        assert!((rx - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_hero_fade() {
        assert_eq!(hero_fade(0.0, 800.0), (1.0, 0.0));
        assert_eq!(hero_fade(200.0, 800.0), (0.5, 25.0));
        assert_eq!(hero_fade(5000.0, 800.0), (0.0, 50.0));
        assert_eq!(hero_fade(100.0, 0.0), (1.0, 0.0));
        assert_eq!(hero_fade(100.0, f64::INFINITY), (1.0, 0.0));
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#818cf8", 0x30), "#818cf830");
        assert_eq!(with_alpha("#14b8a6", 0x08), "#14b8a608");
    }
}
