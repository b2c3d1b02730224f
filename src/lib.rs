pub mod engine;
#[cfg(feature = "network")]
pub mod hint_server;

// module re-exports
pub use engine::definitions::{Board, BoardError, Player, Seeds, Stores, Suggestion, Variant};
pub use engine::evaluator::{suggest_move, AdvancedStrategy, SimpleStrategy, Strategy};

#[cfg(test)]
mod tests;
