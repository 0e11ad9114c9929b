// src/encode/embedding.rs

/// Width of the sinusoidal time embedding.
pub const TIME_EMBED_DIM: usize = 128;

/// Longest period (in time-scalar units) represented by the embedding.
pub const MAX_TIME_PERIOD: f32 = 36000.0;

/// Sinusoidal embedding of a scalar timestep.
///
/// The first half of the row holds cosines, the second half sines, over
/// frequencies geometrically spaced from 1 down to 1/`max_period`.
pub fn timestep_embedding(t: f32, dim: usize, max_period: f32) -> Vec<f32> {
    let half = dim / 2;
    let mut row = vec![0.0; dim];
    for j in 0..half {
        let freq = (-(max_period.ln()) * j as f32 / half as f32).exp();
        let arg = t * freq;
        row[j] = arg.cos();
        row[half + j] = arg.sin();
    }
    row
}
