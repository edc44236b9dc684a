#![warn(clippy::all)]

//! BC5 red/green block compression.
//!
//! Each 4x4 block is stored in 16 bytes: for red and then green, two
//! reference bytes followed by sixteen 3-bit palette indices. The blue
//! channel is not stored and is synthesized on decompression according to
//! [`BlueMode`].

use log::debug;

mod block;
mod color;
mod container;
mod error;
mod image;
mod indices;
mod options;
mod palette;
mod tiler;

pub use block::{Block, BlueMode, BC5_BLOCK_SIZE, DECOMPRESSED_ALPHA};
pub use color::Color32;
pub use container::{Bc5, Bc5Header, BC5_SIG};
pub use error::{Error, Result};
pub use image::Image;
pub use indices::{pack_indices, pack_indices_into, unpack_indices};
pub use options::{DecodeOptions, EncodeOptions, Parallelism};
pub use palette::{denormalize, generate_palette, normalize, Palette};
pub use tiler::{block_count, point_query, tile, untile};

use block::PIXELS_PER_BLOCK;

/// Compresses a single 4x4 block into 16 bytes.
pub fn compress_block(block: &Block) -> [u8; BC5_BLOCK_SIZE] {
    block::compress_block(block)
}

/// Decompresses a single block, `bytes` must be exactly 16 bytes long.
pub fn decompress_block(bytes: &[u8], blue_mode: BlueMode) -> Result<Block> {
    block::decompress_block(bytes, blue_mode)
}

/// Compresses a square image with sides divisible by 4, returning the blocks
/// in row-major order.
pub fn compress_image(image: &Image<Color32>, options: &EncodeOptions) -> Result<Vec<u8>> {
    if image.w != image.h || image.w % block::BLOCK_DIM != 0 {
        return Err(Error::InvalidDimensions {
            width: image.w,
            height: image.h,
        });
    }
    error::check_len(image.data.len(), image.w as usize * image.h as usize)?;

    let blocks = block_count(image.w, image.h);
    debug!(
        "compressing {}x{} image, {} blocks, {:?}",
        image.w, image.h, blocks, options.parallelism
    );

    let mut output = vec![0u8; blocks * BC5_BLOCK_SIZE];
    tiler::fill_slots(&mut output, BC5_BLOCK_SIZE, options.parallelism, |i, slot| {
        slot.copy_from_slice(&block::compress_block(&tiler::extract_block(image, i)));
    });
    Ok(output)
}

/// Decompresses row-major block data of a `width` x `height` image.
pub fn decompress_image(
    data: &[u8],
    width: u32,
    height: u32,
    options: &DecodeOptions,
) -> Result<Image<Color32>> {
    tiler::check_block_dims(width, height)?;
    let blocks = block_count(width, height);
    error::check_len(data.len(), blocks * BC5_BLOCK_SIZE)?;

    debug!(
        "decompressing {}x{} image, {} blocks, {:?}, {:?}",
        width, height, blocks, options.blue_mode, options.parallelism
    );

    let mut decoded = vec![[Color32::default(); PIXELS_PER_BLOCK]; blocks];
    let blue_mode = options.blue_mode;
    tiler::fill_slots(&mut decoded, 1, options.parallelism, |i, slot| {
        let start = i * BC5_BLOCK_SIZE;
        let mut bytes = [0; BC5_BLOCK_SIZE];
        bytes.copy_from_slice(&data[start..start + BC5_BLOCK_SIZE]);
        slot[0] = block::decompress_block_array(&bytes, blue_mode);
    });

    untile(&decoded, width, height)
}

#[doc(hidden)]
#[macro_export]
macro_rules! mask {
    ($size:expr) => {
        !(!($size ^ $size)).checked_shl($size as u32).unwrap_or(0)
    };
}
