/// Probability above which the dashboard flags a customer as high risk
pub const DEFAULT_RISK_THRESHOLD: f64 = 0.5;
/// Number of bars in the feature importance chart
pub const DEFAULT_TOP_FEATURES: usize = 10;
/// Fewest bars the chart may be configured to show
pub const MIN_TOP_FEATURES: usize = 1;
/// Most bars the chart may be configured to show
pub const MAX_TOP_FEATURES: usize = 50;
