use crate::animation::values::Interpolatable;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    #[default]
    Linear,
    Step,
}

const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last bracketing keyframe so coherent sampling
/// (small scroll deltas between frames) avoids a binary search.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// A piecewise function over strictly increasing keyframe inputs.
///
/// Construction validates the table, so sampling is infallible and never
/// extrapolates: inputs before the first keyframe yield the first output,
/// inputs after the last yield the last.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    name: &'static str,
    times: Vec<f32>,
    values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    pub fn new(
        name: &'static str,
        times: Vec<f32>,
        values: Vec<T>,
        interpolation: InterpolationMode,
    ) -> Result<Self> {
        if times.is_empty() || values.is_empty() {
            return Err(Error::EmptyTrack(name));
        }
        if times.len() != values.len() {
            return Err(Error::KeyframeCountMismatch {
                track: name,
                times: times.len(),
                values: values.len(),
            });
        }

        let mut previous = f32::NEG_INFINITY;
        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() || value <= previous {
                return Err(Error::UnsortedKeyframes { track: name, index, value });
            }
            previous = value;
        }

        Ok(Self {
            name,
            times,
            values,
            interpolation,
        })
    }

    /// Linear track, the common case.
    pub fn linear(name: &'static str, times: Vec<f32>, values: Vec<T>) -> Result<Self> {
        Self::new(name, times, values, InterpolationMode::Linear)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Fails unless the inputs start at exactly 0 and end at exactly 1.
    #[allow(clippy::float_cmp)]
    pub fn ensure_unit_domain(&self) -> Result<()> {
        let start = self.times[0];
        let end = self.times[self.times.len() - 1];
        if start == 0.0 && end == 1.0 {
            Ok(())
        } else {
            Err(Error::DomainMismatch { track: self.name, start, end })
        }
    }

    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        // partition_point finds the first index where t > time, i.e. next_index
        let next_idx = self.times.partition_point(|&t| t <= time);
        let idx = next_idx.saturating_sub(1);

        self.sample_at_frame(idx, time)
    }

    /// Sampling with a cursor; the cursor is updated to the bracketing frame.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> T {
        let len = self.times.len();
        if len == 1 {
            return self.values[0].clone();
        }

        // Cursor may be stale if the track was swapped; restart from 0
        let i = if cursor.last_index < len { cursor.last_index } else { 0 };
        let t_curr = self.times[i];

        let found_index = if time >= t_curr {
            // Forward: check [idx, idx+1) for a few frames ahead
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    res = Some(len - 1);
                    break;
                }
                if time < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Backward: time < times[i], find the first idx with times[idx] <= time
            let mut res = None;
            for offset in 1..=MAX_SCAN_OFFSET {
                if i < offset {
                    // Before the first keyframe
                    res = Some(0);
                    break;
                }
                let idx = i - offset;
                if time >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = found_index.unwrap_or_else(|| {
            // Large jump: fall back to binary search
            self.times.partition_point(|&t| t <= time).saturating_sub(1)
        });

        cursor.last_index = final_index;
        self.sample_at_frame(final_index, time)
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();

        if index >= len - 1 {
            return self.values[len - 1].clone();
        }

        let next_idx = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        let t = if dt > 0.0 { (time - t0) / dt } else { 0.0 };
        // Before the first keyframe t is negative; clamp instead of extrapolating
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self.interpolation {
            InterpolationMode::Step => self.values[index].clone(),
            InterpolationMode::Linear => {
                T::interpolate_linear(&self.values[index], &self.values[next_idx], t)
            }
        }
    }
}
