pub mod calculations;
pub mod engine;
pub mod input;
pub mod models;
pub mod solver;

pub use engine::{Calculator, CalculatorState, EngineError, Input, Operation};
pub use models::*;
