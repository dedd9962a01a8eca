use crate::foundation::{
    core::Texture,
    error::{RemapError, RemapResult},
    math::interp,
};

/// Number of entries in an [`AttackReleaseTable`] (one per red byte).
pub const TABLE_LEN: usize = 256;

/// Deterministic mapping from an erosion red byte (inverted attack) to a
/// representative green value (release), on the 0..=255 green scale.
///
/// Built from an erosion texture by [`AttackReleaseTable::build`]: every red
/// value that occurs gets the mean of its green samples, gaps are filled by
/// linear interpolation between the nearest observed red values, and the ends
/// are extended flat.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackReleaseTable {
    values: [f64; TABLE_LEN],
    resolved: usize,
}

impl AttackReleaseTable {
    /// Identity ramp: entry `i` is `i`. Used when the erosion texture has no samples.
    pub fn identity() -> Self {
        let mut values = [0.0; TABLE_LEN];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f64;
        }
        Self {
            values,
            resolved: 0,
        }
    }

    /// Scan an erosion texture (R = inverted attack, G = release) and build the table.
    ///
    /// Fails with [`RemapError::InvalidInput`] when the texture has fewer than two channels.
    #[tracing::instrument(skip(erosion), fields(width = erosion.width, height = erosion.height))]
    pub fn build(erosion: &Texture) -> RemapResult<Self> {
        erosion.validate()?;
        if erosion.channels < 2 {
            return Err(RemapError::invalid_input(format!(
                "erosion texture needs at least 2 channels (R=attack, G=release), got {}",
                erosion.channels
            )));
        }

        let acc = Accumulator::scan(erosion);
        let table = acc.densify();

        tracing::debug!(
            resolved = table.resolved,
            r0 = table.values[0],
            r127 = table.values[127],
            r255 = table.values[255],
            "attack/release table built"
        );
        Ok(table)
    }

    /// Green value for a red byte.
    pub fn get(&self, red: u8) -> f64 {
        self.values[usize::from(red)]
    }

    /// Green value for a red byte, normalised to `[0, 1]`.
    pub fn release_fraction(&self, red: u8) -> f64 {
        self.get(red) / 255.0
    }

    /// All 256 entries, indexed by red byte.
    pub fn values(&self) -> &[f64; TABLE_LEN] {
        &self.values
    }

    /// How many red values had at least one sample in the erosion texture.
    pub fn resolved_count(&self) -> usize {
        self.resolved
    }
}

/// Per-red running sums; an entry is resolved once it has a sample.
struct Accumulator {
    sums: [f64; TABLE_LEN],
    counts: [u64; TABLE_LEN],
}

impl Accumulator {
    fn scan(erosion: &Texture) -> Self {
        let mut acc = Self {
            sums: [0.0; TABLE_LEN],
            counts: [0; TABLE_LEN],
        };
        for px in erosion.data.chunks_exact(usize::from(erosion.channels)) {
            let r = usize::from(px[0]);
            acc.sums[r] += f64::from(px[1]);
            acc.counts[r] += 1;
        }
        acc
    }

    fn densify(self) -> AttackReleaseTable {
        let mut xp = Vec::with_capacity(TABLE_LEN);
        let mut fp = Vec::with_capacity(TABLE_LEN);
        for (r, (&sum, &count)) in self.sums.iter().zip(self.counts.iter()).enumerate() {
            if count > 0 {
                xp.push(r as f64);
                fp.push(sum / count as f64);
            }
        }

        if xp.is_empty() {
            return AttackReleaseTable::identity();
        }

        let mut values = [0.0; TABLE_LEN];
        for (i, v) in values.iter_mut().enumerate() {
            *v = interp(i as f64, &xp, &fp);
        }
        AttackReleaseTable {
            values,
            resolved: xp.len(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/estimate/table.rs"]
mod tests;
