pub(crate) mod resampler;
pub(crate) mod sample;
pub(crate) mod warp;
