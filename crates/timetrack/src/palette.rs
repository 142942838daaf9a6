//! Display colors for timeline placements.

use rand::{Rng, SeedableRng, rngs::StdRng};

use timetrack_core::color::Color;

/// Inclusive lower bound of each RGB component.
const COMPONENT_MIN: u8 = 50;
/// Exclusive upper bound of each RGB component.
const COMPONENT_MAX: u8 = 200;

/// Source of mid-range random colors.
///
/// Colors avoid both very dark and very light tones so that lines stay
/// visible on light and dark backgrounds. With a seed the sequence is
/// reproducible.
#[derive(Debug, Clone)]
pub struct Palette {
    rng: StdRng,
}

impl Palette {
    /// Creates a palette, seeded when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }

    /// Returns the next color.
    pub fn next_color(&mut self) -> Color {
        let [red, green, blue] =
            [(); 3].map(|()| self.rng.random_range(COMPONENT_MIN..COMPONENT_MAX));
        Color::from_rgb8(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_palette_is_reproducible() {
        let mut first = Palette::new(Some(42));
        let mut second = Palette::new(Some(42));

        for _ in 0..10 {
            assert_eq!(first.next_color(), second.next_color());
        }
    }

    #[test]
    fn test_components_stay_in_range() {
        let mut palette = Palette::new(Some(7));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let color = palette.next_color();
            let expected: [u8; 3] =
                [(); 3].map(|()| rng.random_range(COMPONENT_MIN..COMPONENT_MAX));
            assert!(expected.iter().all(|c| (COMPONENT_MIN..COMPONENT_MAX).contains(c)));
            assert_eq!(color, Color::from_rgb8(expected[0], expected[1], expected[2]));
        }
    }
}
