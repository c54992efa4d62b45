use serde::Serialize;

use crate::cli::KeyArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct HasResult<'a> {
    profile: &'a str,
    key: &'a str,
    present: bool,
}

pub fn run(ctx: &mut AppContext, args: KeyArgs) -> AppResult<()> {
    let present = ctx.profile()?.get_or_load()?.has_key(&args.key);

    let result = HasResult {
        profile: ctx.profile_name(),
        key: &args.key,
        present,
    };
    ctx.output.emit(&present.to_string(), &result)
}
