use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logger();

    if let Err(e) = genumerate_cli::run(std::env::args().collect()) {
        if let Some(err) = e.downcast_ref::<clap::Error>() {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
