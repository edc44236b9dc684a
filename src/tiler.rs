use log::warn;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::{
    block::{decompress_block_array, Block, BlueMode, BC5_BLOCK_SIZE, BLOCK_DIM, PIXELS_PER_BLOCK},
    color::Color32,
    image::Image,
    options::Parallelism,
    Error, Result,
};

pub(crate) fn check_block_dims(width: u32, height: u32) -> Result<()> {
    if width % BLOCK_DIM != 0 || height % BLOCK_DIM != 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

pub fn block_count(width: u32, height: u32) -> usize {
    (width / BLOCK_DIM) as usize * (height / BLOCK_DIM) as usize
}

/// Splits the image into 4x4 blocks, block rows outer, block columns inner.
pub fn tile(image: &Image<Color32>) -> Result<Vec<Block>> {
    check_block_dims(image.w, image.h)?;
    Ok((0..block_count(image.w, image.h))
        .map(|i| extract_block(image, i))
        .collect())
}

pub(crate) fn extract_block(image: &Image<Color32>, index: usize) -> Block {
    let blocks_per_row = (image.w / BLOCK_DIM) as usize;
    let block_x = index % blocks_per_row;
    let block_y = index / blocks_per_row;
    let stride = image.w as usize;

    let mut block = [Color32::default(); PIXELS_PER_BLOCK];
    for (y, row) in block.chunks_exact_mut(BLOCK_DIM as usize).enumerate() {
        let start = (4 * block_y + y) * stride + 4 * block_x;
        row.copy_from_slice(&image.data[start..start + 4]);
    }
    block
}

/// Reassembles blocks produced by [`tile`] (or by decompression) into an image.
pub fn untile(blocks: &[Block], width: u32, height: u32) -> Result<Image<Color32>> {
    check_block_dims(width, height)?;
    let expected = block_count(width, height);
    if blocks.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: blocks.len(),
        });
    }

    let blocks_per_row = width / BLOCK_DIM;
    Ok(Image::from_fn(width, height, |x, y| {
        let block_ix = (y / BLOCK_DIM) * blocks_per_row + x / BLOCK_DIM;
        blocks[block_ix as usize][((y % BLOCK_DIM) * BLOCK_DIM + x % BLOCK_DIM) as usize]
    }))
}

/// Decompresses the single block containing `(x, y)` and returns that pixel.
///
/// Coordinates outside the image give the zero pixel. The block is located at
/// byte offset `(y / 4) * height + (x / 4) * 16`, which only matches the
/// layout used by [`untile`] on the first block row. If that offset runs past
/// the data the zero pixel is returned as well.
pub fn point_query(
    data: &[u8],
    width: u32,
    height: u32,
    blue_mode: BlueMode,
    x: i64,
    y: i64,
) -> Color32 {
    if x < 0 || x >= width as i64 || y < 0 || y >= height as i64 {
        return Color32::default();
    }

    let (x, y) = (x as usize, y as usize);
    let block_ix = (y / 4) * height as usize + (x / 4) * BC5_BLOCK_SIZE;

    let bytes: &[u8; BC5_BLOCK_SIZE] = match data
        .get(block_ix..block_ix + BC5_BLOCK_SIZE)
        .and_then(|b| b.try_into().ok())
    {
        Some(bytes) => bytes,
        None => {
            warn!(
                "point query ({}, {}) reads block at {} past {} bytes of data",
                x,
                y,
                block_ix,
                data.len()
            );
            return Color32::default();
        }
    };

    let block = decompress_block_array(bytes, blue_mode);
    block[(y % 4) * 4 + x % 4]
}

/// Fills `output` slot by slot, slot `i` being `output[i * slot_len..][..slot_len]`.
/// Slots are independent, so with `Parallelism::Parallel` they are handed out to
/// the rayon pool; the result is identical either way.
pub(crate) fn fill_slots<T, F>(output: &mut [T], slot_len: usize, parallelism: Parallelism, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        if parallelism.is_parallel() {
            output
                .par_chunks_exact_mut(slot_len)
                .enumerate()
                .for_each(|(i, slot)| f(i, slot));
            return;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = parallelism;

    for (i, slot) in output.chunks_exact_mut(slot_len).enumerate() {
        f(i, slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{compress_block, decompress_block};

    fn gradient(w: u32, h: u32) -> Image<Color32> {
        Image::from_fn(w, h, |x, y| Color32::new((x * 8) as u8, (y * 8) as u8, 0, 255))
    }

    #[test]
    fn test_tile_is_row_major() {
        let image = gradient(8, 8);
        let blocks = tile(&image).unwrap();
        assert_eq!(blocks.len(), 4);
        // block 1 is the top right one
        assert_eq!(blocks[1][0], image.get(4, 0));
        assert_eq!(blocks[1][15], image.get(7, 3));
        // block 2 is the bottom left one
        assert_eq!(blocks[2][0], image.get(0, 4));
        assert_eq!(blocks[2][5], image.get(1, 5));
    }

    #[test]
    fn test_untile_inverts_tile() {
        let image = gradient(12, 8);
        let blocks = tile(&image).unwrap();
        assert_eq!(untile(&blocks, 12, 8).unwrap(), image);
    }

    #[test]
    fn test_untile_checks_block_count() {
        let blocks = tile(&gradient(8, 8)).unwrap();
        assert!(matches!(
            untile(&blocks[..3], 8, 8),
            Err(Error::InvalidLength { expected: 4, actual: 3 })
        ));
        assert!(matches!(
            untile(&blocks, 8, 6),
            Err(Error::InvalidDimensions { width: 8, height: 6 })
        ));
    }

    #[test]
    fn test_tile_rejects_partial_blocks() {
        let image = Image::<Color32>::new(6, 8);
        assert!(matches!(tile(&image), Err(Error::InvalidDimensions { .. })));
    }

    fn compress_blocks(image: &Image<Color32>) -> Vec<u8> {
        tile(image)
            .unwrap()
            .iter()
            .flat_map(compress_block)
            .collect()
    }

    #[test]
    fn test_point_query_first_block_row() {
        let image = gradient(8, 8);
        let data = compress_blocks(&image);

        for y in 0..4 {
            for x in 0..8 {
                let block = (x / 4) as usize * BC5_BLOCK_SIZE;
                let expected = decompress_block(&data[block..block + 16], BlueMode::CopyRed)
                    .unwrap()[(y * 4 + x % 4) as usize];
                assert_eq!(point_query(&data, 8, 8, BlueMode::CopyRed, x, y), expected);
            }
        }
    }

    #[test]
    fn test_point_query_uses_height_as_row_stride() {
        let image = Image::from_fn(8, 8, |_, _| Color32::new(100, 200, 0, 0));
        let data = compress_blocks(&image);

        // (0, 4) reads bytes 8..24: green half of block 0, red half of block 1
        let px = point_query(&data, 8, 8, BlueMode::AlwaysZero, 0, 4);
        assert_eq!(px, Color32::new(200, 100, 0, 1));
    }

    #[test]
    fn test_point_query_out_of_bounds() {
        let data = compress_blocks(&gradient(8, 8));
        let zero = Color32::default();
        for (x, y) in [(-1, 0), (8, 0), (0, -1), (0, 8), (i64::MAX, i64::MIN)] {
            assert_eq!(point_query(&data, 8, 8, BlueMode::AlwaysOne, x, y), zero);
        }
    }

    #[test]
    fn test_point_query_past_data_is_zero() {
        let data = compress_blocks(&gradient(16, 16));
        // (15, 15) lands at byte 96, only two blocks are left
        assert_eq!(point_query(&data[..32], 16, 16, BlueMode::AlwaysOne, 15, 15), Color32::default());
    }

    #[test]
    fn test_fill_slots_orders_by_index() {
        for parallelism in [Parallelism::Sequential, Parallelism::Parallel] {
            let mut output = vec![0usize; 4 * 100];
            fill_slots(&mut output, 4, parallelism, |i, slot| slot.fill(i));
            for (i, slot) in output.chunks_exact(4).enumerate() {
                assert!(slot.iter().all(|&v| v == i));
            }
        }
    }
}
