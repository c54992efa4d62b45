use std::io::{self, Write};

use serde_json::Value;

use crate::error::AppResult;

pub fn print_lines<S: AsRef<str>>(lines: &[S]) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line.as_ref())?;
    }

    Ok(())
}

/// Strings print bare; everything else prints as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
