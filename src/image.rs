use crate::{color::Color32, error::check_len, Result};

/// Row-major pixel buffer, `w * h` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<T> {
    pub w: u32,
    pub h: u32,
    pub data: Vec<T>,
}

impl<T: Copy + Default> Image<T> {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            w,
            h,
            data: vec![T::default(); w as usize * h as usize],
        }
    }

    pub fn from_fn(w: u32, h: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut data = Vec::with_capacity(w as usize * h as usize);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self { w, h, data }
    }

    pub fn get(&self, x: u32, y: u32) -> T {
        self.data[self.offset(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, v: T) {
        let offset = self.offset(x, y);
        self.data[offset] = v;
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.w && y < self.h);
        y as usize * self.w as usize + x as usize
    }
}

impl Image<Color32> {
    pub fn from_rgba_bytes(w: u32, h: u32, bytes: &[u8]) -> Result<Self> {
        check_len(bytes.len(), 4 * w as usize * h as usize)?;
        Ok(Self {
            w,
            h,
            data: Color32::from_rgba_bytes(bytes),
        })
    }

    pub fn into_rgba_bytes(self) -> Image<u8> {
        Image {
            w: self.w,
            h: self.h,
            data: Color32::into_rgba_bytes(self.data),
        }
    }
}
