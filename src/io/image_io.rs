use std::{io::Cursor, path::Path};

use crate::foundation::{
    core::Texture,
    error::{RemapError, RemapResult},
};

/// Decode an encoded image into a [`Texture`], keeping its channel count.
///
/// Gray, gray+alpha, RGB and RGBA images map to 1..=4 channels. Higher bit
/// depths and palettes are converted to 8 bits per sample first.
pub fn decode_texture(bytes: &[u8]) -> RemapResult<Texture> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| RemapError::decode(format!("decode image from memory: {e}")))?;
    let (width, height) = (dyn_img.width(), dyn_img.height());

    let (channels, data) = match dyn_img.color().channel_count() {
        1 => (1, dyn_img.into_luma8().into_raw()),
        2 => (2, dyn_img.into_luma_alpha8().into_raw()),
        3 => (3, dyn_img.into_rgb8().into_raw()),
        _ => (4, dyn_img.into_rgba8().into_raw()),
    };
    Texture::new(width, height, channels, data)
}

/// Read and decode the image at `path`.
///
/// Missing or unreadable files fail with [`RemapError::Io`]; corrupt data with
/// [`RemapError::Decode`]. Both messages carry the path.
#[tracing::instrument]
pub fn load_texture(path: &Path) -> RemapResult<Texture> {
    let bytes = std::fs::read(path)
        .map_err(|e| RemapError::io(format!("read '{}': {e}", path.display())))?;
    let tex = decode_texture(&bytes).map_err(|e| match e {
        RemapError::Decode(msg) => RemapError::decode(format!("'{}': {msg}", path.display())),
        other => other,
    })?;
    tracing::debug!(
        width = tex.width,
        height = tex.height,
        channels = tex.channels,
        "texture loaded"
    );
    Ok(tex)
}

/// Encode `tex` as PNG in memory.
pub fn encode_png(tex: &Texture) -> RemapResult<Vec<u8>> {
    tex.validate()?;
    let mut buf = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut buf),
        &tex.data,
        tex.width,
        tex.height,
        color_type(tex.channels)?,
        image::ImageFormat::Png,
    )
    .map_err(|e| RemapError::Other(anyhow::anyhow!("encode png: {e}")))?;
    Ok(buf)
}

/// Write `tex` to `path` as PNG, creating missing parent directories.
#[tracing::instrument(skip(tex))]
pub fn save_texture(path: &Path, tex: &Texture) -> RemapResult<()> {
    tex.validate()?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            RemapError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        &tex.data,
        tex.width,
        tex.height,
        color_type(tex.channels)?,
        image::ImageFormat::Png,
    )
    .map_err(|e| write_error(path, e))
}

/// Filesystem failures are [`RemapError::Io`]; encoder failures are wrapped as `Other`.
fn write_error(path: &Path, err: image::ImageError) -> RemapError {
    match err {
        image::ImageError::IoError(e) => {
            RemapError::io(format!("write png '{}': {e}", path.display()))
        }
        other => {
            RemapError::Other(anyhow::anyhow!("encode png '{}': {other}", path.display()))
        }
    }
}

fn color_type(channels: u8) -> RemapResult<image::ExtendedColorType> {
    match channels {
        1 => Ok(image::ExtendedColorType::L8),
        2 => Ok(image::ExtendedColorType::La8),
        3 => Ok(image::ExtendedColorType::Rgb8),
        4 => Ok(image::ExtendedColorType::Rgba8),
        n => Err(RemapError::invalid_input(format!(
            "cannot encode a {n}-channel texture as png"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/image_io.rs"]
mod tests;
