pub mod definitions;
pub mod evaluator;
