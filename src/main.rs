use clap::Parser;

fn main() {
    let cli = profiles::cli::Cli::parse();

    if let Err(err) = profiles::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
