/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Conventional significance level used by every test.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Tukey fence multiplier.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Lower and upper bound of a Likert scale question.
pub const SCALE_MIN: i64 = 1;
pub const SCALE_MAX: i64 = 7;

/// Numeric questions whose range exceeds this are bucketed.
pub const DEFAULT_NUMERIC_BIN_THRESHOLD: f64 = 20.0;

/// Number of equal-width buckets for wide numeric ranges.
pub const DEFAULT_NUMERIC_BIN_COUNT: usize = 10;

/// Minimum observations per group before a group enters an ANOVA.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 10;

/// Minimum complete rows for a regression fit.
pub const DEFAULT_MIN_REGRESSION_ROWS: usize = 10;

/// A correlation pair is scored only with strictly more valid pairs than this.
pub const MIN_CORRELATION_PAIRS: usize = 3;

/// Columns with this many valid values or fewer are left out of a matrix.
pub const DEFAULT_MIN_COLUMN_VALUES: usize = 10;

/// Shapiro–Wilk is only run for 3 ≤ n < this.
pub const SHAPIRO_MAX_N: usize = 5000;

/// z critical value for the 95% difference-in-means interval.
pub const Z_CRITICAL_95: f64 = 1.96;

/// p-values below this are passed through unrounded.
pub const P_VALUE_PASSTHROUGH: f64 = 0.00001;

/// Default result cache TTL in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Default maximum number of cached payloads.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1024;
