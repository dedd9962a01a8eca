use crate::foundation::error::{RemapError, RemapResult};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Interleaved row-major 8-bit raster with an explicit channel count.
pub struct Texture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Samples per pixel (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA).
    pub channels: u8,
    /// `width * height * channels` samples, row by row.
    pub data: Vec<u8>,
}

impl Texture {
    /// Wrap raw samples, checking that the buffer matches the declared shape.
    ///
    /// A zero-sized texture is allowed; a zero channel count is not.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> RemapResult<Self> {
        let tex = Self {
            width,
            height,
            channels,
            data,
        };
        tex.validate()?;
        Ok(tex)
    }

    /// All-zero texture of the given shape.
    pub fn zeroed(width: u32, height: u32, channels: u8) -> RemapResult<Self> {
        let len = expected_len(width, height, channels)?;
        Self::new(width, height, channels, vec![0u8; len])
    }

    /// Check that `data` matches the declared shape.
    ///
    /// Textures assembled through the public fields are unchecked until this runs.
    pub fn validate(&self) -> RemapResult<()> {
        if self.channels == 0 {
            return Err(RemapError::invalid_input("texture must have at least one channel"));
        }
        let expected = expected_len(self.width, self.height, self.channels)?;
        if self.data.len() != expected {
            return Err(RemapError::invalid_input(format!(
                "texture {}x{}x{} expects {expected} samples, got {}",
                self.width,
                self.height,
                self.channels,
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when the texture has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `(width, height, channels)`, mostly for diagnostics.
    pub fn shape(&self) -> (u32, u32, u8) {
        (self.width, self.height, self.channels)
    }

    /// Samples of the pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let idx = self.pixel_offset(x, y);
        &self.data[idx..idx + usize::from(self.channels)]
    }

    pub(crate) fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * usize::from(self.channels)
    }
}

fn expected_len(width: u32, height: u32, channels: u8) -> RemapResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(usize::from(channels)))
        .ok_or_else(|| RemapError::invalid_input("texture buffer size overflow"))
}

/// Timing of the erosion animation, in the same (arbitrary) time unit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingParams {
    /// Longest fade-in delay (attack = 1).
    pub fade_in: f64,
    /// Length of the fade-out window.
    pub fade_out: f64,
    /// Total animation length; also the divisor mapping time to the old U axis.
    pub animation_duration: f64,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            fade_in: 0.5,
            fade_out: 2.0,
            animation_duration: 2.0,
        }
    }
}

impl TimingParams {
    /// Build and validate a parameter set.
    pub fn new(fade_in: f64, fade_out: f64, animation_duration: f64) -> RemapResult<Self> {
        let params = Self {
            fade_in,
            fade_out,
            animation_duration,
        };
        params.validate()?;
        Ok(params)
    }

    /// Time at which the fade-out window opens.
    pub fn fade_out_start(&self) -> f64 {
        self.animation_duration - self.fade_out
    }

    /// Reject non-finite or negative values and a zero duration.
    ///
    /// `fade_in + fade_out > animation_duration` is accepted.
    pub fn validate(&self) -> RemapResult<()> {
        for (name, v) in [
            ("fade_in", self.fade_in),
            ("fade_out", self.fade_out),
            ("animation_duration", self.animation_duration),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RemapError::invalid_input(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if self.animation_duration <= 0.0 {
            return Err(RemapError::invalid_input("animation_duration must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
