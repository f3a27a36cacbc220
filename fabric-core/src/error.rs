/// Errors produced by the `fabric-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A temperature value was NaN or infinite.
    #[error("invalid temperature {value}: must be a finite number")]
    InvalidTemperature { value: f64 },
}
