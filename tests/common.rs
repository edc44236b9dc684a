#![allow(dead_code)]

use bc5::{Color32, Image};

/// Deterministic RNG so failures are reproducible.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}

pub fn solid(size: u32, r: u8, g: u8) -> Image<Color32> {
    Image::from_fn(size, size, |_, _| Color32::new(r, g, 0, 255))
}

pub fn noise(size: u32, seed: u64) -> Image<Color32> {
    let mut rng = SimpleRng::new(seed);
    Image::from_fn(size, size, |_, _| {
        Color32::new(rng.next_u8(), rng.next_u8(), rng.next_u8(), rng.next_u8())
    })
}

/// Smooth red/green ramps, like a tangent space normal map would have.
pub fn ramps(size: u32) -> Image<Color32> {
    Image::from_fn(size, size, |x, y| {
        Color32::new(
            (x * 255 / (size - 1)) as u8,
            (y * 255 / (size - 1)) as u8,
            255,
            255,
        )
    })
}

/// Min and max of one channel inside the 4x4 block holding `(x, y)`.
pub fn block_range(image: &Image<Color32>, x: u32, y: u32, channel: usize) -> (u8, u8) {
    let (bx, by) = (x / 4 * 4, y / 4 * 4);
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for y in by..by + 4 {
        for x in bx..bx + 4 {
            let v = image.get(x, y)[channel];
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}
