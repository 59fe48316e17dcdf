use rand::Rng;

use crate::error::ClutchError;

/// Source of the draws behind every advisory and board result. Injectable so
/// tests can script exact sequences instead of living with `thread_rng`.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns `ClutchError::RandomSource` if the source cannot produce a
    /// draw. There is no retry: a dead source is fatal to the operation.
    fn next_unit(&mut self) -> Result<f64, ClutchError>;

    /// Uniform integer draw in `[min, max]`, both ends inclusive.
    ///
    /// # Errors
    ///
    /// Same failure mode as [`RandomSource::next_unit`].
    fn next_wait(&mut self, min: u16, max: u16) -> Result<u16, ClutchError>;
}

/// Production source backed by the thread-local generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> Result<f64, ClutchError> {
        Ok(rand::thread_rng().r#gen::<f64>())
    }

    fn next_wait(&mut self, min: u16, max: u16) -> Result<u16, ClutchError> {
        Ok(rand::thread_rng().gen_range(min..=max))
    }
}

/// Scripted source for tests. Hands out the given unit-interval values in
/// order; a non-cycling sequence errors once exhausted, which doubles as a
/// way to exercise the random-failure path.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    index: usize,
    cycle: bool,
}

impl SequenceRandom {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            index: 0,
            cycle: false,
        }
    }

    #[must_use]
    pub fn cycling(values: Vec<f64>) -> Self {
        Self {
            values,
            index: 0,
            cycle: true,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> Result<f64, ClutchError> {
        if self.values.is_empty() || (!self.cycle && self.index >= self.values.len()) {
            return Err(ClutchError::RandomSource(
                "draw sequence exhausted".to_string(),
            ));
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        Ok(value)
    }

    fn next_wait(&mut self, min: u16, max: u16) -> Result<u16, ClutchError> {
        let unit = self.next_unit()?;
        let span = f64::from(max - min) + 1.0;
        // unit < 1.0 keeps the offset within the span, but clamp anyway in
        // case a scripted value sits exactly at 1.0
        let offset = (unit * span) as u16;
        Ok(min + offset.min(max - min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_hands_out_values_in_order() {
        let mut src = SequenceRandom::new(vec![0.1, 0.9]);
        assert_eq!(src.next_unit().unwrap(), 0.1);
        assert_eq!(src.next_unit().unwrap(), 0.9);
        assert!(src.next_unit().is_err());
    }

    #[test]
    fn cycling_sequence_wraps() {
        let mut src = SequenceRandom::cycling(vec![0.25]);
        for _ in 0..10 {
            assert_eq!(src.next_unit().unwrap(), 0.25);
        }
    }

    #[test]
    fn wait_draw_spans_inclusive_range() {
        let mut low = SequenceRandom::new(vec![0.0]);
        assert_eq!(low.next_wait(10, 30).unwrap(), 10);

        let mut high = SequenceRandom::new(vec![0.999_999]);
        assert_eq!(high.next_wait(10, 30).unwrap(), 30);

        let mut mid = SequenceRandom::new(vec![0.5]);
        assert_eq!(mid.next_wait(1, 5).unwrap(), 3);
    }

    #[test]
    fn empty_sequence_fails_immediately() {
        let mut src = SequenceRandom::new(vec![]);
        assert!(matches!(
            src.next_unit(),
            Err(ClutchError::RandomSource(_))
        ));
    }
}
