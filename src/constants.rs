// Run layout
pub const DEFAULT_CONFIG_PATH: &str = "params.toml";
pub const DEFAULT_OUTPUT_DIR: &str = "out";

// Plot surface, 12x8 inches at 100 dpi
pub const DEFAULT_IMAGE_WIDTH: u32 = 1200;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 800;

// Ratios T/dt this close to an integer count as exact multiples
pub const GRID_RELATIVE_TOLERANCE: f64 = 1e-9;

// Upper bound on T/dt, keeps a stored trajectory within a few hundred MB
pub const MAX_GRID_POINTS: usize = 10_000_000;

// Math
pub const PI: f64 = std::f64::consts::PI;
