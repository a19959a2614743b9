/// Cubes emitted per matched occurrence — one match renders as a small cloud.
pub const CLUSTER_SIZE: usize = 10;

/// Horizontal spread of a cluster: x and z are drawn from [-SPREAD/2, +SPREAD/2).
pub const SPREAD: f64 = 10.0;

/// A match's fractional position in the token stream is scaled into [0, HEIGHT_SPAN).
pub const HEIGHT_SPAN: f64 = 100.0;

/// Compression applied after scaling, keeping the column near the camera.
pub const HEIGHT_SCALE: f64 = 0.2;

/// Downward shift that centers the column around the scene origin.
pub const HEIGHT_SHIFT: f64 = 10.0;

/// Number of term slots a visualization pass accepts.
pub const TERM_SLOTS: usize = 3;

/// Numerical epsilon for near-zero comparisons.
pub const EPSILON: f64 = 1e-10;
