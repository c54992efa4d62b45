use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::text::render_value;
use crate::profile::SettingsData;

#[derive(Debug, Serialize)]
struct ShowResult<'a> {
    profile: &'a str,
    settings: SettingsData,
}

pub fn run(ctx: &mut AppContext) -> AppResult<()> {
    let settings = ctx.profile()?.get_or_load()?.clone();

    let lines: Vec<String> = if settings.is_empty() {
        vec![format!("{}: 0 settings", ctx.profile_name())]
    } else {
        settings
            .iter()
            .map(|(key, value)| format!("{key} = {}", render_value(value)))
            .collect()
    };

    let result = ShowResult {
        profile: ctx.profile_name(),
        settings,
    };
    ctx.output.emit_lines(&lines, &result)
}
