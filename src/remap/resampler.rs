use rayon::prelude::*;

use crate::{
    estimate::table::AttackReleaseTable,
    foundation::{
        core::{Texture, TimingParams},
        error::{RemapError, RemapResult},
        math::{linspace_at, quantize_u8},
    },
    remap::{sample::bilinear_sample, warp::ColumnWarp},
};

/// Execution options for [`remap_gradient`].
///
/// Columns are independent, so parallel and sequential runs produce identical pixels.
#[derive(Clone, Debug, Default)]
pub struct RemapOpts {
    /// Render columns on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

/// Resample `gradient` from the global-time parameterization into the
/// per-pixel (attack, normalized time) one.
///
/// The output has the same width, height and channel count as the input.
/// Column `col` represents attack `col / (width - 1)`; row `row` represents
/// normalized time `row / (height - 1)`. Samples are clamped to `[0, 255]`
/// and truncated to bytes.
///
/// Fails with [`RemapError::InvalidInput`] for an empty or malformed gradient, or invalid timing.
#[tracing::instrument(
    skip_all,
    fields(width = gradient.width, height = gradient.height, channels = gradient.channels)
)]
pub fn remap_gradient(
    gradient: &Texture,
    table: &AttackReleaseTable,
    params: &TimingParams,
    opts: &RemapOpts,
) -> RemapResult<Texture> {
    params.validate()?;
    gradient.validate()?;
    if gradient.is_empty() {
        return Err(RemapError::invalid_input(format!(
            "gradient must be at least 1x1, got {}x{}",
            gradient.width, gradient.height
        )));
    }

    let width = gradient.width;
    let columns: Vec<Vec<u8>> = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            (0..width)
                .into_par_iter()
                .map(|col| {
                    let warp = ColumnWarp::for_column(col, width, table, params);
                    render_column(gradient, &warp)
                })
                .collect()
        })
    } else {
        (0..width)
            .map(|col| {
                let warp = ColumnWarp::for_column(col, width, table, params);
                render_column(gradient, &warp)
            })
            .collect()
    };

    let mut out = Texture::zeroed(gradient.width, gradient.height, gradient.channels)?;
    let channels = usize::from(gradient.channels);
    for (col, column) in columns.iter().enumerate() {
        for (row, px) in column.chunks_exact(channels).enumerate() {
            let dst = out.pixel_offset(col as u32, row as u32);
            out.data[dst..dst + channels].copy_from_slice(px);
        }
    }

    tracing::debug!(parallel = opts.parallel, "gradient remapped");
    Ok(out)
}

/// Build the table from `erosion`, then remap `gradient` through it.
pub fn remap_with_erosion(
    erosion: &Texture,
    gradient: &Texture,
    params: &TimingParams,
    opts: &RemapOpts,
) -> RemapResult<Texture> {
    let table = AttackReleaseTable::build(erosion)?;
    remap_gradient(gradient, &table, params, opts)
}

/// One destination column, top to bottom, as interleaved bytes.
fn render_column(gradient: &Texture, warp: &ColumnWarp) -> Vec<u8> {
    tracing::trace!(
        attack = warp.attack,
        red = warp.red_value,
        key_press = warp.key_press,
        key_release = warp.key_release,
        "column"
    );

    let channels = usize::from(gradient.channels);
    let mut column = Vec::with_capacity(gradient.height as usize * channels);
    let mut px = vec![0.0f64; channels];

    for row in 0..gradient.height {
        let normalized_time = linspace_at(row, gradient.height);
        let (x, y) = warp.source_coords(normalized_time, gradient.width, gradient.height);
        bilinear_sample(gradient, x, y, &mut px);
        column.extend(px.iter().map(|&v| quantize_u8(v)));
    }
    column
}

fn build_thread_pool(threads: Option<usize>) -> RemapResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RemapError::invalid_input(
            "remap threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RemapError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/remap/resampler.rs"]
mod tests;
