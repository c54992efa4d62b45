use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        root,
        json,
        verbose,
        command,
    } = cli;

    init_tracing(verbose);

    let mut ctx = AppContext::bootstrap(profile, root, json)?;

    match command {
        Command::Get(args) => commands::get::run(&mut ctx, args),
        Command::Set(args) => commands::set::run(&mut ctx, args),
        Command::Has(args) => commands::has::run(&mut ctx, args),
        Command::Rm(args) => commands::delete::remove_key(&mut ctx, args),
        Command::Clear => commands::delete::clear(&mut ctx),
        Command::Show => commands::show::run(&mut ctx),
        Command::List => commands::list::run(&ctx),
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr subscriber. A second call in the same process is ignored.
fn init_tracing(verbose: u8) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
