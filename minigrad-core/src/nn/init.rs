use crate::error::MinigradError;
use crate::nn::Parameter;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Draws `n` samples uniformly from `[low, high)`.
pub(crate) fn uniform_values<R: Rng + ?Sized>(
    n: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vec<f64>, MinigradError> {
    let dist = uniform_dist(low, high)?;
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

fn uniform_dist(low: f64, high: f64) -> Result<Uniform<f64>, MinigradError> {
    if !low.is_finite() {
        return Err(MinigradError::InvalidHyperparameter {
            name: "low".to_string(),
            value: low,
        });
    }
    // Uniform::new panics on an empty range
    if !high.is_finite() || high <= low {
        return Err(MinigradError::InvalidHyperparameter {
            name: "high".to_string(),
            value: high,
        });
    }
    Ok(Uniform::new(low, high))
}

/// Fills the parameters with values drawn uniformly from `[low, high)`.
///
/// Operates in-place.
pub fn uniform_<R: Rng + ?Sized>(
    params: &[&Parameter],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), MinigradError> {
    let dist = uniform_dist(low, high)?;
    for param in params {
        param.set_value(dist.sample(rng))?;
    }
    Ok(())
}

/// Fills the parameters with values drawn from `N(mean, std^2)`.
///
/// Operates in-place.
pub fn normal_<R: Rng + ?Sized>(
    params: &[&Parameter],
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<(), MinigradError> {
    if !mean.is_finite() {
        return Err(MinigradError::InvalidHyperparameter {
            name: "mean".to_string(),
            value: mean,
        });
    }
    // Normal::new accepts a negative std (it mirrors the distribution)
    if !std.is_finite() || std < 0.0 {
        return Err(MinigradError::InvalidHyperparameter {
            name: "std".to_string(),
            value: std,
        });
    }
    let dist = Normal::new(mean, std).map_err(|_| MinigradError::InvalidHyperparameter {
        name: "std".to_string(),
        value: std,
    })?;
    for param in params {
        param.set_value(dist.sample(rng))?;
    }
    Ok(())
}

/// Fills the parameters with `value`.
pub fn constant_(params: &[&Parameter], value: f64) -> Result<(), MinigradError> {
    for param in params {
        param.set_value(value)?;
    }
    Ok(())
}

/// Fills the parameters with zero.
pub fn zeros_(params: &[&Parameter]) -> Result<(), MinigradError> {
    constant_(params, 0.0)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
