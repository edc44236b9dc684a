use crate::block::BlueMode;

/// How blocks of a full image are distributed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    /// Blocks are spread over the rayon thread pool. Without the `rayon`
    /// feature this behaves like `Sequential`.
    Parallel,
}

impl Parallelism {
    pub(crate) fn is_parallel(self) -> bool {
        cfg!(feature = "rayon") && self == Parallelism::Parallel
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub parallelism: Parallelism,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            parallelism: Parallelism::Parallel,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    pub blue_mode: BlueMode,
    pub parallelism: Parallelism,
}

impl DecodeOptions {
    pub fn with_blue_mode(blue_mode: BlueMode) -> Self {
        Self {
            blue_mode,
            ..Self::default()
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            blue_mode: BlueMode::AlwaysZero,
            parallelism: Parallelism::Parallel,
        }
    }
}
