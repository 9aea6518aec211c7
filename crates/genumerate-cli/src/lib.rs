mod case;
mod cli;
mod codegen;
mod format;
mod generate;
mod load;
mod names;
mod write;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cli = cli::parse_args(&args)?;

    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("failed to resolve working directory: {e}"))?;
    let format = format::resolve_format_config(&cwd);
    tracing::debug!(source = ?format.source, "resolved format options");

    generate::run(&cli, &format)
}
