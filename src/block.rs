use crate::{
    color::{Color32, GREEN, RED},
    indices::{pack_indices, unpack_index_array, INDEX_BYTES},
    palette::{denormalize, generate_palette, nearest_index, normalize, Palette},
    Error, Result,
};

pub const BC5_BLOCK_SIZE: usize = 16;
pub const BLOCK_DIM: u32 = 4;
pub const PIXELS_PER_BLOCK: usize = 16;

/// 4x4 pixels, row-major.
pub type Block = [Color32; PIXELS_PER_BLOCK];

// Byte offsets of the two channel sub-blocks.
const RED_OFFSET: usize = 0;
const GREEN_OFFSET: usize = 8;

/// How decompression fills the blue channel, which BC5 does not store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlueMode {
    AlwaysZero,
    AlwaysOne,
    /// `sqrt(1 - (2r-1)^2 + (2g-1)^2) / 2 + 0.5` on the normalized palette
    /// values. Note the green term is added, so this is not the usual unit
    /// normal reconstruction; inputs where the radicand goes negative decode
    /// to 0.
    ComputeNormalZ,
    CopyRed,
}

/// Alpha written to every decompressed pixel. Literal 1, not 255.
pub const DECOMPRESSED_ALPHA: u8 = 1;

pub fn compress_block(block: &Block) -> [u8; BC5_BLOCK_SIZE] {
    let mut output = [0; BC5_BLOCK_SIZE];
    compress_channel(block, RED, &mut output[RED_OFFSET..RED_OFFSET + 8]);
    compress_channel(block, GREEN, &mut output[GREEN_OFFSET..GREEN_OFFSET + 8]);
    output
}

fn compress_channel(block: &Block, channel: usize, output: &mut [u8]) {
    let (min, max) = block.iter().fold((u8::MAX, u8::MIN), |(min, max), px| {
        (min.min(px[channel]), max.max(px[channel]))
    });

    // Always (min, max), so compression only ever produces the 6-value palette.
    let pal = generate_palette(normalize(min), normalize(max));

    let mut indices = [0; PIXELS_PER_BLOCK];
    for (index, px) in indices.iter_mut().zip(block.iter()) {
        *index = nearest_index(&pal, normalize(px[channel]));
    }

    output[0] = denormalize(pal[0]);
    output[1] = denormalize(pal[1]);
    output[2..2 + INDEX_BYTES].copy_from_slice(&pack_indices(&indices));
}

pub fn decompress_block(bytes: &[u8], blue_mode: BlueMode) -> Result<Block> {
    let bytes: &[u8; BC5_BLOCK_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
        expected: BC5_BLOCK_SIZE,
        actual: bytes.len(),
    })?;
    Ok(decompress_block_array(bytes, blue_mode))
}

pub fn decompress_block_array(bytes: &[u8; BC5_BLOCK_SIZE], blue_mode: BlueMode) -> Block {
    let (red_pal, red_indices) = decode_channel(&bytes[RED_OFFSET..RED_OFFSET + 8]);
    let (green_pal, green_indices) = decode_channel(&bytes[GREEN_OFFSET..GREEN_OFFSET + 8]);

    let mut block = [Color32::default(); PIXELS_PER_BLOCK];
    for (i, px) in block.iter_mut().enumerate() {
        let r = red_pal[red_indices[i] as usize];
        let g = green_pal[green_indices[i] as usize];

        let red = denormalize(r);
        let blue = match blue_mode {
            BlueMode::AlwaysZero => 0,
            BlueMode::AlwaysOne => denormalize(1.0),
            BlueMode::ComputeNormalZ => normal_z(r, g),
            BlueMode::CopyRed => red,
        };

        *px = Color32::new(red, denormalize(g), blue, DECOMPRESSED_ALPHA);
    }

    block
}

fn decode_channel(bytes: &[u8]) -> (Palette, [u8; PIXELS_PER_BLOCK]) {
    let pal = generate_palette(normalize(bytes[0]), normalize(bytes[1]));
    let mut index_bytes = [0; INDEX_BYTES];
    index_bytes.copy_from_slice(&bytes[2..2 + INDEX_BYTES]);
    (pal, unpack_index_array(&index_bytes))
}

fn normal_z(r: f64, g: f64) -> u8 {
    let z = (1.0 - (2.0 * r - 1.0).powi(2) + (2.0 * g - 1.0).powi(2)).sqrt();
    denormalize(z / 2.0 + 0.5)
}
