//! Basic calculator engine.
//!
//! The engine keeps the operand being typed, an optional pending operation
//! and an overwrite flag, and folds operations strictly left to right with
//! no precedence: `2 + 3 * 4 =` evaluates as `(2 + 3) * 4`.

pub mod format;
mod input;
mod operation;
mod state;

pub use input::Input;
pub use operation::Operation;
pub use state::{Calculator, CalculatorState, EngineError, Pending};
