use serde::Serialize;
use serde_json::Value;

use crate::cli::GetArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::text::render_value;

#[derive(Debug, Serialize)]
struct GetResult<'a> {
    profile: &'a str,
    key: &'a str,
    value: Value,
    found: bool,
}

pub fn run(ctx: &mut AppContext, args: GetArgs) -> AppResult<()> {
    let stored = ctx.profile()?.get_or_load()?.raw(&args.key).cloned();

    let (value, found) = match (stored, args.default) {
        (Some(value), _) => (value, true),
        (None, Some(default)) => (Value::String(default), false),
        (None, None) => {
            return Err(AppError::InvalidInput(format!(
                "key `{}` not found in profile `{}`",
                args.key,
                ctx.profile_name()
            )));
        }
    };

    let text = render_value(&value);
    let result = GetResult {
        profile: ctx.profile_name(),
        key: &args.key,
        value,
        found,
    };
    ctx.output.emit(&text, &result)
}
