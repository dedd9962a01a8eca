use crate::{
    estimate::table::AttackReleaseTable,
    foundation::{core::TimingParams, math::lerp},
};

/// Per-column time window on the source gradient's time axis.
///
/// A destination column stands for one attack value. Its rows walk from
/// `key_press` to `key_release`, and each global time maps back to the old
/// `global_time / animation_duration` U coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnWarp {
    /// Fade-in progress for this column, in `[0, 1]`.
    pub attack: f64,
    /// Erosion red byte matching `attack` (red stores the inverted attack).
    pub red_value: u8,
    /// Release fraction looked up from the table, in `[0, 1]` for well-formed tables.
    pub release: f64,
    /// Global time at which the pixel starts fading in.
    pub key_press: f64,
    /// Global time at which the pixel has fully faded out; always `> key_press`.
    pub key_release: f64,
    animation_duration: f64,
}

impl ColumnWarp {
    /// Narrowest allowed `[key_press, key_release]` window.
    pub const MIN_WINDOW: f64 = 0.001;

    /// Timing for destination column `col` of a `width`-wide output.
    ///
    /// A single-column output uses the midpoint attack 0.5.
    pub fn for_column(
        col: u32,
        width: u32,
        table: &AttackReleaseTable,
        params: &TimingParams,
    ) -> Self {
        let attack = if width > 1 {
            f64::from(col) / f64::from(width - 1)
        } else {
            0.5
        };
        let red_value = (255.0 * (1.0 - attack)).round_ties_even().clamp(0.0, 255.0) as u8;
        let release = table.release_fraction(red_value);

        let key_press = params.fade_in * attack;
        let mut key_release = params.fade_out_start() + release * params.fade_out;
        if key_release <= key_press + Self::MIN_WINDOW {
            key_release = key_press + Self::MIN_WINDOW;
        }

        Self {
            attack,
            red_value,
            release,
            key_press,
            key_release,
            animation_duration: params.animation_duration,
        }
    }

    /// Global time reached after `normalized_time` of this column's window.
    pub fn global_time(&self, normalized_time: f64) -> f64 {
        lerp(self.key_press, self.key_release, normalized_time)
    }

    /// Source `(x, y)` in a `width x height` gradient for a destination row at `normalized_time`.
    pub fn source_coords(&self, normalized_time: f64, width: u32, height: u32) -> (f64, f64) {
        let u = (self.global_time(normalized_time) / self.animation_duration).clamp(0.0, 1.0);
        let x = u * f64::from(width.saturating_sub(1));
        let y = normalized_time * f64::from(height.saturating_sub(1));
        (x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/remap/warp.rs"]
mod tests;
