/// Preferred lens direction for acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    User,
    Environment,
}

/// Constraint set handed to device acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub facing: FacingMode,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CaptureConstraints {
    /// High-quality first attempt: rear-facing at the configured resolution.
    pub fn preferred(width: u32, height: u32) -> Self {
        Self {
            facing: FacingMode::Environment,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Minimal constraint set for the second-tier attempt after a
    /// quality-related acquisition failure. Keeps older devices usable.
    pub fn fallback() -> Self {
        Self {
            facing: FacingMode::Environment,
            width: None,
            height: None,
        }
    }
}
