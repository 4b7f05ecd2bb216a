mod financial_result;
mod settings;
mod tool;

pub use financial_result::FinancialResult;
pub use settings::{APP_VERSION, Settings, ThemeMode};
pub use tool::{TOOL_DISCLAIMER, ToolKind};
