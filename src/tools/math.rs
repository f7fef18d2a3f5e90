//! Arithmetic tools.

use std::sync::Arc;

use crate::tools::schema::ToolParameters;
use crate::tools::tool::{FunctionTool, Tool};

/// Create the `multiply` tool.
///
/// Takes two numbers and returns the product as a formatted string, e.g.
/// `"2 × 2 = 4"`. Pure and deterministic; whole numbers render without a
/// decimal point.
pub fn multiply_tool() -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "multiply",
        "Multiply two numbers",
        ToolParameters::object()
            .number("a", "First number", true)
            .number("b", "Second number", true)
            .build(),
        |args, _ctx| async move {
            let a = args.get_f64("a")?;
            let b = args.get_f64("b")?;
            Ok(serde_json::Value::String(format!("{a} × {b} = {}", a * b)))
        },
    ))
}
