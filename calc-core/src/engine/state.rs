use thiserror::Error;
use tracing::{debug, warn};

use super::format::{format_number, group_operand};
use super::{Input, Operation};

/// Reasons an input leaves the calculator unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An operand could not be read as a base-10 floating point number.
    #[error("operand '{0}' is not a number")]
    UnparsableOperand(String),

    /// `=` was pressed with no operator pending.
    #[error("no pending operation")]
    NoPendingOperation,

    /// A character other than `0`-`9` or `.` was offered as a digit.
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(char),
}

/// Left operand and operator waiting for the right operand.
///
/// Kept as one value so that an operator is never pending without its
/// left operand, or the other way around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub operand: String,
    pub operation: Operation,
}

/// Snapshot of the basic calculator.
///
/// Every transition takes the current state by reference and returns the
/// next state, leaving the original untouched. Transitions that decline an
/// input return an [`EngineError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    current_operand: String,
    pending: Option<Pending>,
    overwrite: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: "0".to_string(),
            pending: None,
            overwrite: false,
        }
    }
}

impl CalculatorState {
    /// Creates the initial state: operand `"0"`, nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a state from its parts. An empty operand becomes `"0"`.
    pub fn from_parts(
        current_operand: impl Into<String>,
        pending: Option<Pending>,
        overwrite: bool,
    ) -> Self {
        let current_operand = current_operand.into();
        let current_operand = if current_operand.is_empty() {
            "0".to_string()
        } else {
            current_operand
        };
        Self {
            current_operand,
            pending,
            overwrite,
        }
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operation)
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Applies the pending operation to the two operands.
    ///
    /// A pure function of the state: calling it twice gives the same value.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoPendingOperation`] if no operator is pending
    /// - [`EngineError::UnparsableOperand`] if either operand is not a number
    pub fn evaluate(&self) -> Result<f64, EngineError> {
        let pending = self
            .pending
            .as_ref()
            .ok_or(EngineError::NoPendingOperation)?;
        let previous = parse_operand(&pending.operand)?;
        let current = parse_operand(&self.current_operand)?;

        Ok(pending.operation.apply(previous, current))
    }

    /// Enters a digit or decimal point.
    ///
    /// Right after an operator or `=`, the entry replaces the operand (a
    /// decimal point starts `"0."`). Otherwise leading zeros and a second
    /// decimal point are ignored.
    pub fn append_digit(
        &self,
        digit: char,
    ) -> Result<Self, EngineError> {
        if !(digit.is_ascii_digit() || digit == '.') {
            return Err(EngineError::InvalidDigit(digit));
        }

        let mut next = self.clone();

        if self.overwrite {
            next.current_operand = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            next.overwrite = false;
            return Ok(next);
        }

        if digit == '0' && self.current_operand == "0" {
            return Ok(next);
        }
        if digit == '.' && self.current_operand.contains('.') {
            return Ok(next);
        }
        if self.current_operand == "0" && digit != '.' {
            next.current_operand = digit.to_string();
            return Ok(next);
        }

        next.current_operand.push(digit);
        Ok(next)
    }

    /// Removes the last character of the operand.
    ///
    /// Right after an operator or `=` this resets the operand to `"0"`.
    pub fn delete_digit(&self) -> Self {
        let mut next = self.clone();

        if self.overwrite {
            next.current_operand = "0".to_string();
            next.overwrite = false;
            return next;
        }

        if self.current_operand == "0" {
            return next;
        }

        next.current_operand.pop();
        if next.current_operand.is_empty() || next.current_operand == "-" {
            next.current_operand = "0".to_string();
        }
        next
    }

    /// Selects an operator.
    ///
    /// With nothing pending, the current operand becomes the left operand.
    /// With an operator already pending, that operation is evaluated first
    /// and its result becomes the left operand.
    pub fn choose_operation(
        &self,
        operation: Operation,
    ) -> Self {
        let pending = match &self.pending {
            None => Some(Pending {
                operand: self.current_operand.clone(),
                operation,
            }),
            Some(_) => match self.evaluate() {
                Ok(value) => Some(Pending {
                    operand: format_number(value),
                    operation,
                }),
                Err(error) => {
                    warn!(%error, "chained evaluation failed; dropping pending operation");
                    None
                }
            },
        };

        Self {
            current_operand: "0".to_string(),
            pending,
            overwrite: true,
        }
    }

    /// Completes the pending operation (the `=` key).
    ///
    /// Returns the next state together with the trace of what was
    /// evaluated, e.g. `"1,200 + 34 ="`. An operand that fails to parse
    /// yields a result of `"0"`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoPendingOperation`] if no operator is pending.
    pub fn calculate(&self) -> Result<(Self, String), EngineError> {
        let pending = self
            .pending
            .as_ref()
            .ok_or(EngineError::NoPendingOperation)?;

        let trace = format!(
            "{} {} {} =",
            group_operand(&pending.operand),
            pending.operation,
            group_operand(&self.current_operand)
        );

        let current_operand = match self.evaluate() {
            Ok(value) => format_number(value),
            Err(error) => {
                warn!(%error, "evaluation failed; result reset to 0");
                "0".to_string()
            }
        };

        let next = Self {
            current_operand,
            pending: None,
            overwrite: true,
        };
        Ok((next, trace))
    }

    /// Negates the current operand. Does not touch the overwrite flag.
    pub fn toggle_sign(&self) -> Result<Self, EngineError> {
        let value = parse_operand(&self.current_operand)?;
        Ok(Self {
            current_operand: format_number(-value),
            ..self.clone()
        })
    }

    /// Divides the current operand by 100.
    pub fn percent(&self) -> Result<Self, EngineError> {
        let value = parse_operand(&self.current_operand)?;
        Ok(Self {
            current_operand: format_number(value / 100.0),
            overwrite: true,
            ..self.clone()
        })
    }
}

/// Reads an operand as a number. `NaN` counts as unparsable; infinities
/// are accepted.
fn parse_operand(operand: &str) -> Result<f64, EngineError> {
    operand
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .ok_or_else(|| EngineError::UnparsableOperand(operand.to_string()))
}

/// A calculator session: the current state plus the trace of the last
/// completed calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    state: CalculatorState,
    last_calculation: Option<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Trace of the last `=`, such as `"5 * 4 ="`.
    pub fn last_calculation(&self) -> Option<&str> {
        self.last_calculation.as_deref()
    }

    /// Applies one input event. On error the session is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use calc_core::{Calculator, Input, Operation};
    ///
    /// let mut calc = Calculator::new();
    /// calc.press(Input::Digit('9')).unwrap();
    /// calc.press(Input::Choose(Operation::Divide)).unwrap();
    /// calc.press(Input::Digit('4')).unwrap();
    /// calc.press(Input::Calculate).unwrap();
    ///
    /// assert_eq!(calc.state().current_operand(), "2.25");
    /// assert_eq!(calc.last_calculation(), Some("9 / 4 ="));
    /// ```
    pub fn press(
        &mut self,
        input: Input,
    ) -> Result<(), EngineError> {
        let next = match input {
            Input::Digit(digit) => self.state.append_digit(digit)?,
            Input::Delete => self.state.delete_digit(),
            Input::Choose(operation) => self.state.choose_operation(operation),
            Input::Calculate => {
                let (next, trace) = self.state.calculate()?;
                self.last_calculation = Some(trace);
                next
            }
            Input::ToggleSign => self.state.toggle_sign()?,
            Input::Percent => self.state.percent()?,
            Input::Clear => {
                self.last_calculation = None;
                CalculatorState::new()
            }
        };

        debug!(?input, operand = %next.current_operand, "calculator input applied");
        self.state = next;
        Ok(())
    }

    /// Applies a sequence of keys (see [`Input::from_key`]).
    ///
    /// Spaces and tabs are skipped, unknown keys are logged and skipped,
    /// and declined inputs are ignored just like a single [`press`](Self::press).
    ///
    /// ```
    /// use calc_core::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.feed("2 + 3 * 4 =");
    ///
    /// assert_eq!(calc.state().current_operand(), "20");
    /// ```
    pub fn feed(
        &mut self,
        keys: &str,
    ) {
        for key in keys.chars() {
            if key == ' ' || key == '\t' {
                continue;
            }
            let Some(input) = Input::from_key(key) else {
                warn!(%key, "ignoring unknown calculator key");
                continue;
            };
            if let Err(error) = self.press(input) {
                debug!(%key, %error, "calculator input declined");
            }
        }
    }

    /// The current operand with thousands separators.
    pub fn display(&self) -> String {
        group_operand(&self.state.current_operand)
    }

    /// The pending left operand and operator, e.g. `"1,200 +"`.
    pub fn pending_display(&self) -> Option<String> {
        self.state
            .pending
            .as_ref()
            .map(|p| format!("{} {}", group_operand(&p.operand), p.operation))
    }
}
