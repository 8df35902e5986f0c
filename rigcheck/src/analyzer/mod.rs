pub mod rules;

// Re-export for convenience
pub use rules::{evaluate, estimate_power, EvaluationResult, RuleInfo, BASELINE_DRAW_W, RULES};
