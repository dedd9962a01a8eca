//! Gradient remapping for erosion-style dissolve effects.
//!
//! An erosion effect drives each pixel through a fade-in / fade-out envelope whose
//! timing lives in a side-channel *erosion texture*: red holds the inverted attack,
//! green holds the release. Artists author a color gradient indexed by
//! `(global_time / animation_duration, normalized_time)`; the shader wants one indexed
//! by `(attack, normalized_time)`. This crate converts the former into the latter.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`load_texture`] reads the erosion and gradient images.
//! 2. **Estimate**: [`AttackReleaseTable::build`] averages the erosion texture's green
//!    values per red byte and fills gaps by linear interpolation.
//! 3. **Remap**: [`remap_gradient`] walks every output column (one attack value),
//!    warps each row's normalized time into the old global-time axis, and bilinearly
//!    samples the source gradient.
//! 4. **Save**: [`save_texture`] writes the result as PNG.
//!
//! Everything between load and save is pure, deterministic computation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod estimate;
mod foundation;
mod io;
mod remap;

pub use estimate::table::{AttackReleaseTable, TABLE_LEN};
pub use foundation::core::{Texture, TimingParams};
pub use foundation::error::{RemapError, RemapResult};
pub use io::image_io::{decode_texture, encode_png, load_texture, save_texture};
pub use remap::resampler::{RemapOpts, remap_gradient, remap_with_erosion};
pub use remap::sample::bilinear_sample;
pub use remap::warp::ColumnWarp;
