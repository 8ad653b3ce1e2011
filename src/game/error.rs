use thiserror::Error;

/// Rejections at entity-creation boundaries. The tick itself never errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EntityError {
    #[error("mass must be finite and non-negative, got {0}")]
    InvalidMass(f64),
    #[error("position ({x}, {y}) is outside the world [0, {world_size}]")]
    OutOfBounds { x: f64, y: f64, world_size: f64 },
}

pub(crate) fn validate(x: f64, y: f64, mass: f64, world_size: f64) -> Result<(), EntityError> {
    if !mass.is_finite() || mass < 0.0 {
        return Err(EntityError::InvalidMass(mass));
    }
    let inside = |v: f64| (0.0..=world_size).contains(&v);
    if !inside(x) || !inside(y) {
        return Err(EntityError::OutOfBounds { x, y, world_size });
    }
    Ok(())
}
