use std::io::{Read, Write};
use std::path::Path;

use byteorder::{ByteOrder, BE};
use log::trace;

use crate::{
    block::BlueMode,
    color::Color32,
    image::Image,
    options::{DecodeOptions, EncodeOptions},
    Error, Result,
};

/// "BC5 " read as a big-endian u32.
pub const BC5_SIG: u32 = 0x4243_3520;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bc5Header {
    pub sig: u32,
    pub width: u32,
    pub height: u32,
}

impl Bc5Header {
    pub const FILE_SIZE: usize = 12;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            sig: BC5_SIG,
            width,
            height,
        }
    }

    fn check_size(buf: &[u8]) -> bool {
        buf.len() >= Self::FILE_SIZE
    }

    fn from_bytes(buf: &[u8]) -> Self {
        assert!(Self::check_size(buf));
        Self {
            sig: BE::read_u32(&buf[0..]),
            width: BE::read_u32(&buf[4..]),
            height: BE::read_u32(&buf[8..]),
        }
    }

    fn to_bytes(self) -> [u8; Self::FILE_SIZE] {
        let mut buf = [0; Self::FILE_SIZE];
        BE::write_u32(&mut buf[0..], self.sig);
        BE::write_u32(&mut buf[4..], self.width);
        BE::write_u32(&mut buf[8..], self.height);
        buf
    }
}

/// BC5 compressed red/green image: the block data, its dimensions and the
/// options used when decompressing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bc5 {
    data: Vec<u8>,
    width: u32,
    height: u32,
    options: DecodeOptions,
}

impl Bc5 {
    /// Wraps already compressed block data. No validation happens until
    /// decompression.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            options: DecodeOptions::default(),
        }
    }

    pub fn from_rgba(image: &Image<Color32>) -> Result<Self> {
        Self::from_rgba_with(image, &EncodeOptions::default())
    }

    pub fn from_rgba_with(image: &Image<Color32>, options: &EncodeOptions) -> Result<Self> {
        let data = crate::compress_image(image, options)?;
        Ok(Self::new(data, image.w, image.h))
    }

    /// Replaces the block data and dimensions with the compressed form of
    /// `image`. On error `self` is left untouched.
    pub fn set_from_rgba(&mut self, image: &Image<Color32>) -> Result<()> {
        self.data = crate::compress_image(image, &EncodeOptions::default())?;
        self.width = image.w;
        self.height = image.h;
        Ok(())
    }

    pub fn with_blue_mode(mut self, blue_mode: BlueMode) -> Self {
        self.options.blue_mode = blue_mode;
        self
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn decompress(&self) -> Result<Image<Color32>> {
        crate::decompress_image(&self.data, self.width, self.height, &self.options)
    }

    /// Decompresses the pixel at `(x, y)` on the fly.
    pub fn at(&self, x: i64, y: i64) -> Color32 {
        crate::point_query(
            &self.data,
            self.width,
            self.height,
            self.options.blue_mode,
            x,
            y,
        )
    }

    /// Number of pixels described by the dimensions.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn blue_mode(&self) -> BlueMode {
        self.options.blue_mode
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if !Bc5Header::check_size(buf) {
            return Err(Error::Truncated { len: buf.len() });
        }

        let header = Bc5Header::from_bytes(buf);
        if header.sig != BC5_SIG {
            return Err(Error::BadSignature(header.sig));
        }

        if buf.len() <= Bc5Header::FILE_SIZE {
            return Err(Error::Truncated { len: buf.len() });
        }

        trace!(
            "read BC5 header {}x{}, {} data bytes",
            header.width,
            header.height,
            buf.len() - Bc5Header::FILE_SIZE
        );

        Ok(Self::new(
            buf[Bc5Header::FILE_SIZE..].to_vec(),
            header.width,
            header.height,
        ))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Bc5Header::FILE_SIZE + self.data.len());
        buf.extend_from_slice(&Bc5Header::new(self.width, self.height).to_bytes());
        buf.extend_from_slice(&self.data);
        buf
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        trace!(
            "writing BC5 header {}x{}, {} data bytes",
            self.width,
            self.height,
            self.data.len()
        );
        writer.write_all(&Bc5Header::new(self.width, self.height).to_bytes())?;
        writer.write_all(&self.data)?;
        Ok(())
    }

    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let buf = std::fs::read(path)?;
        Self::from_bytes(&buf)
    }

    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
