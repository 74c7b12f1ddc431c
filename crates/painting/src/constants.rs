/// Minimum travel (device units) before a non-final sample is accepted.
pub const MIN_MOVE_DISTANCE: f32 = 4.0;

/// Interior angle (degrees) below which a curve chunk is split at its apex.
pub const OPEN_ANGLE_DEGREES: f32 = 120.0;

/// Lengths below this are treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Smallest resample step, so zero spacing cannot stall the filter.
pub const MIN_SPACING_STEP: f32 = 0.01;

/// Smallest radius a jittered sample may end up with.
pub const MIN_RADIUS: f32 = 0.01;

/// Most centerline samples one move may produce; longer moves widen the step.
pub const MAX_SEGMENT_SAMPLES: usize = 1 << 16;
