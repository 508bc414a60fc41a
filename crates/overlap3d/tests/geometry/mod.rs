mod lite_conservatism;
mod tolerance_monotonicity;
mod transform_invariance;
mod utils;
