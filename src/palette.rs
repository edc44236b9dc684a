/// Interpolation ramp of one channel, normalized to [0, 1].
pub type Palette = [f64; 8];

pub const PALETTE_SIZE: usize = 8;

// (weight of c0, weight of c1) for entries 2..
const STANDARD_WEIGHTS: [(f64, f64); 6] = [(6., 1.), (5., 2.), (4., 3.), (3., 4.), (2., 5.), (1., 6.)];
const DEGENERATE_WEIGHTS: [(f64, f64); 4] = [(4., 1.), (3., 2.), (2., 3.), (1., 4.)];

/// Builds the palette from the two reference values.
///
/// `c0 > c1` selects the 8-value ramp (six interpolated entries in sevenths),
/// otherwise four entries are interpolated in fifths and the last two are
/// fixed to 0 and 1. The choice depends only on the numeric comparison.
pub fn generate_palette(c0: f64, c1: f64) -> Palette {
    let mut pal = [0.0; PALETTE_SIZE];
    pal[0] = c0;
    pal[1] = c1;

    if c0 > c1 {
        for (p, (w0, w1)) in pal[2..].iter_mut().zip(STANDARD_WEIGHTS) {
            *p = (w0 * c0 + w1 * c1) / 7.0;
        }
    } else {
        for (p, (w0, w1)) in pal[2..6].iter_mut().zip(DEGENERATE_WEIGHTS) {
            *p = (w0 * c0 + w1 * c1) / 5.0;
        }
        pal[6] = 0.0;
        pal[7] = 1.0;
    }

    pal
}

/// Index of the entry closest to `v`; the lowest index wins ties.
pub fn nearest_index(pal: &Palette, v: f64) -> u8 {
    let mut best = 0;
    for (i, p) in pal.iter().enumerate() {
        if (p - v).abs() < (pal[best] - v).abs() {
            best = i;
        }
    }
    best as u8
}

pub fn normalize(v: u8) -> f64 {
    v as f64 / 255.0
}

/// Truncates toward zero. Out of range values saturate and NaN maps to 0.
pub fn denormalize(v: f64) -> u8 {
    (v * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_palette() {
        let c0 = normalize(40);
        let c1 = normalize(90);
        let pal = generate_palette(c0, c1);
        assert_eq!(pal[0], c0);
        assert_eq!(pal[1], c1);
        assert_eq!(pal[2], (4.0 * c0 + c1) / 5.0);
        assert_eq!(pal[5], (c0 + 4.0 * c1) / 5.0);
        assert_eq!(pal[6], 0.0);
        assert_eq!(pal[7], 1.0);
    }

    #[test]
    fn test_equal_references_take_degenerate_branch() {
        let pal = generate_palette(0.5, 0.5);
        assert_eq!(pal[6], 0.0);
        assert_eq!(pal[7], 1.0);
        for p in &pal[..6] {
            assert!((p - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_standard_palette_is_monotonic() {
        let c0 = normalize(200);
        let c1 = normalize(10);
        let pal = generate_palette(c0, c1);
        assert_eq!(pal[0], c0);
        assert_eq!(pal[1], c1);
        assert_eq!(pal[2], (6.0 * c0 + c1) / 7.0);
        assert_eq!(pal[7], (c0 + 6.0 * c1) / 7.0);

        let ramp = [pal[0], pal[2], pal[3], pal[4], pal[5], pal[6], pal[7], pal[1]];
        for w in ramp.windows(2) {
            assert!(w[0] > w[1], "{:?}", ramp);
        }
    }

    #[test]
    fn test_nearest_index_prefers_lowest_on_tie() {
        let pal = generate_palette(0.0, 0.0);
        // entries 0, 2..=6 are all 0.0
        assert_eq!(nearest_index(&pal, 0.0), 0);
        assert_eq!(nearest_index(&pal, 1.0), 7);
        assert_eq!(nearest_index(&pal, 0.9), 7);
    }

    #[test]
    fn test_normalize_round_trips_every_byte() {
        for v in 0..=255u8 {
            assert_eq!(denormalize(normalize(v)), v);
        }
    }

    #[test]
    fn test_denormalize_saturates() {
        assert_eq!(denormalize(1.5), 255);
        assert_eq!(denormalize(-0.5), 0);
        assert_eq!(denormalize(f64::NAN), 0);
    }
}
