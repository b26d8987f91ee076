use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dfl",
    about = concat!("[*] dayflow v", env!("CARGO_PKG_VERSION"), " - tasks, focus, notes"),
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = dayflow::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
