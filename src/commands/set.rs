use serde::Serialize;
use serde_json::Value;

use crate::cli::{SetArgs, ValueKind};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::text::render_value;

#[derive(Debug, Serialize)]
struct SetResult<'a> {
    profile: &'a str,
    key: &'a str,
    value: &'a Value,
}

pub fn run(ctx: &mut AppContext, args: SetArgs) -> AppResult<()> {
    let value = parse_value(args.kind, &args.value)?;

    let profile = ctx.profile()?;
    let data = profile.get_or_load()?;
    match &value {
        Value::String(text) => data.set_string(&args.key, text),
        Value::Bool(flag) => data.set_bool(&args.key, *flag),
        Value::Number(number) => match number.as_i64() {
            Some(int) => data.set_int(&args.key, int),
            None => data.set(&args.key, number)?,
        },
        other => data.set(&args.key, other)?,
    }
    profile.save()?;

    let text = format!(
        "{}: {} = {}",
        ctx.profile_name(),
        args.key,
        render_value(&value)
    );
    let result = SetResult {
        profile: ctx.profile_name(),
        key: &args.key,
        value: &value,
    };
    ctx.output.emit(&text, &result)
}

fn parse_value(kind: ValueKind, raw: &str) -> AppResult<Value> {
    let invalid = |expected: &str| {
        AppError::InvalidInput(format!("`{raw}` is not a valid {expected} value"))
    };

    match kind {
        ValueKind::String => Ok(Value::String(raw.to_string())),
        ValueKind::Int => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid("int")),
        ValueKind::Float => {
            let parsed = raw.trim().parse::<f64>().map_err(|_| invalid("float"))?;
            if !parsed.is_finite() {
                return Err(invalid("float"));
            }
            Ok(Value::from(parsed))
        }
        ValueKind::Bool => raw
            .trim()
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| invalid("bool")),
        ValueKind::Json => Ok(serde_json::from_str(raw)?),
    }
}
