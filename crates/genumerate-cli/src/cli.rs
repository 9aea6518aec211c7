use crate::codegen::Category;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const USAGE_EXAMPLES: &str = "\
Examples:
  Write the generated enums to a file:
    $ prisma-genumerate ./schema.prisma -o ./src/constants/model.constant.ts
  Print them instead of saving:
    $ prisma-genumerate ./schema.prisma --print
  Or both:
    $ prisma-genumerate ./schema.prisma -o ./src/constants/model.constant.ts --print";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "prisma-genumerate",
    version,
    about = "Generate TypeScript enums from a Prisma schema",
    disable_version_flag = true,
    after_help = USAGE_EXAMPLES
)]
pub struct Cli {
    /// Prisma schema file, relative to the working directory
    pub schema: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the result to the console
    #[arg(long)]
    pub print: bool,

    /// Fail instead of generating empty enums when the schema cannot be read or parsed
    #[arg(long)]
    pub strict: bool,

    /// Do not write; fail if the output file is out of date
    #[arg(long, requires = "output")]
    pub check: bool,

    /// Declarations to generate (default: all)
    #[arg(long, value_enum, value_delimiter = ',', value_name = "LIST")]
    pub emit: Vec<Category>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    _version: Option<bool>,
}

impl Cli {
    pub fn categories(&self) -> &[Category] {
        if self.emit.is_empty() {
            &Category::ALL
        } else {
            &self.emit
        }
    }
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Cli> {
    let cli = Cli::try_parse_from(args)?;

    if cli.output.is_none() && !cli.print {
        anyhow::bail!(
            "Invalid argument. Missing --output (-o) argument, please specify it! \
             OR you can specify --print argument just for printing result to the console!"
        );
    }

    Ok(cli)
}
