use serde::Serialize;

use crate::cli::KeyArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct DeleteResult<'a> {
    profile: &'a str,
    removed: Vec<String>,
}

pub fn remove_key(ctx: &mut AppContext, args: KeyArgs) -> AppResult<()> {
    let profile = ctx.profile()?;
    let data = profile.get_or_load()?;
    let existed = data.has_key(&args.key);
    data.delete_key(&args.key);
    profile.save()?;

    let removed = if existed { vec![args.key] } else { Vec::new() };
    let text = format!("{}: removed {} key(s)", ctx.profile_name(), removed.len());
    let result = DeleteResult {
        profile: ctx.profile_name(),
        removed,
    };
    ctx.output.emit(&text, &result)
}

pub fn clear(ctx: &mut AppContext) -> AppResult<()> {
    let profile = ctx.profile()?;
    let data = profile.get_or_load()?;
    let removed: Vec<String> = data.keys().map(str::to_string).collect();
    data.delete_all();
    profile.save()?;

    let text = format!("{}: removed {} key(s)", ctx.profile_name(), removed.len());
    let result = DeleteResult {
        profile: ctx.profile_name(),
        removed,
    };
    ctx.output.emit(&text, &result)
}
