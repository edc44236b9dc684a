use byteorder::{ByteOrder, BE};

use crate::{error::check_len, mask, Result};

pub const INDEX_BITS: usize = 3;
pub const INDEX_BYTES: usize = 6;

/// Packs 16 palette indices into 48 bits, index `i` at bits `3i..3i+3`,
/// stored big-endian.
pub fn pack_indices(indices: &[u8; 16]) -> [u8; INDEX_BYTES] {
    let mut bytes = [0; INDEX_BYTES];
    BE::write_u48(&mut bytes, pack_u48(indices));
    bytes
}

/// Same as [`pack_indices`], writing into a caller supplied 6 byte slice.
pub fn pack_indices_into(indices: &[u8; 16], output: &mut [u8]) -> Result<()> {
    check_len(output.len(), INDEX_BYTES)?;
    BE::write_u48(output, pack_u48(indices));
    Ok(())
}

pub fn unpack_indices(bytes: &[u8]) -> Result<[u8; 16]> {
    check_len(bytes.len(), INDEX_BYTES)?;
    Ok(unpack_u48(BE::read_u48(bytes)))
}

pub fn unpack_index_array(bytes: &[u8; INDEX_BYTES]) -> [u8; 16] {
    unpack_u48(BE::read_u48(bytes))
}

fn unpack_u48(data: u64) -> [u8; 16] {
    let mut indices = [0; 16];
    for (i, index) in indices.iter_mut().enumerate() {
        *index = ((data >> (i * INDEX_BITS)) & mask!(INDEX_BITS as u64)) as u8;
    }
    indices
}

fn pack_u48(indices: &[u8; 16]) -> u64 {
    indices
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &index)| {
            acc | ((index as u64 & mask!(INDEX_BITS as u64)) << (i * INDEX_BITS))
        })
}
