use rand::rngs::ThreadRng;
use rand::RngExt;

/// source of unit-interval randomness for jittered score and wait-time
/// estimates. scoring functions take a sampler argument instead of reaching
/// for a global generator so that callers can request deterministic output.
pub trait UnitSampler {
    /// the next value in [0, 1)
    fn next_unit(&mut self) -> f64;

    /// a value drawn uniformly from [min, max)
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }
}

/// the production sampler: fresh thread-local randomness on every draw.
/// results are deliberately not reproducible across invocations.
pub struct RandomSampler {
    rng: ThreadRng,
}

impl RandomSampler {
    pub fn new() -> RandomSampler {
        RandomSampler { rng: rand::rng() }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitSampler for RandomSampler {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// a sampler that cycles through a fixed sequence of values. used to make
/// scoring deterministic in tests and reproducible demo runs.
pub struct SequenceSampler {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSampler {
    /// builds a cycling sampler over the given values. an empty sequence
    /// degrades to a constant midpoint draw.
    pub fn new(values: Vec<f64>) -> SequenceSampler {
        SequenceSampler { values, cursor: 0 }
    }

    /// a sampler that always returns the same value.
    pub fn constant(value: f64) -> SequenceSampler {
        SequenceSampler::new(vec![value])
    }
}

impl UnitSampler for SequenceSampler {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
