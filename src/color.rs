use std::fmt;
use std::ops::{Index, IndexMut};

pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;
pub const ALPHA: usize = 3;

/// RGBA pixel, one byte per channel.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color32(pub [u8; 4]);

impl Color32 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub const fn r(self) -> u8 {
        self.0[RED]
    }

    pub const fn g(self) -> u8 {
        self.0[GREEN]
    }

    pub const fn b(self) -> u8 {
        self.0[BLUE]
    }

    pub const fn a(self) -> u8 {
        self.0[ALPHA]
    }

    pub fn into_rgba_bytes(data: Vec<Self>) -> Vec<u8> {
        let mut result = vec![0u8; data.len() * 4];

        for (chunk, color) in result.chunks_exact_mut(4).zip(data.into_iter()) {
            chunk.copy_from_slice(&color.0);
        }

        result
    }

    pub fn from_rgba_bytes(bytes: &[u8]) -> Vec<Self> {
        bytes
            .chunks_exact(4)
            .map(|c| Self::new(c[0], c[1], c[2], c[3]))
            .collect()
    }

    pub fn to_rgba_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Debug for Color32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:08X}", self.to_rgba_u32())
    }
}

impl Index<usize> for Color32 {
    type Output = u8;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Color32 {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_rgba_hex() {
        let c = Color32::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(format!("{:?}", c), "#12345678");
    }

    #[test]
    fn test_rgba_bytes_round_trip() {
        let colors = vec![Color32::new(1, 2, 3, 4), Color32::new(5, 6, 7, 8)];
        let bytes = Color32::into_rgba_bytes(colors.clone());
        assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Color32::from_rgba_bytes(&bytes), colors);
    }
}
