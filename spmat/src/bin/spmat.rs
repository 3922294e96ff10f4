use clap::Parser;

use spmat::logging::DEFAULT_LOG_LEVEL;
use spmat::{init_logging, Shell, ShellConfig};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "spmat - Interactive sparse matrix backed by nested ordered trees")]
struct Cli {
    /// Value every unwritten cell reads as
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    default: i64,

    /// Number of rows; enables bounds checking (requires --cols)
    #[arg(long, requires = "cols")]
    rows: Option<usize>,

    /// Number of columns; enables bounds checking (requires --rows)
    #[arg(long, requires = "rows")]
    cols: Option<usize>,

    /// Suppress the banner and prompt, for piped input
    #[arg(short, long)]
    quiet: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "SPMAT_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl Cli {
    fn shell_config(&self) -> ShellConfig<i64> {
        let mut config = ShellConfig::new(self.default);
        if let (Some(rows), Some(cols)) = (self.rows, self.cols) {
            config = config.with_dimensions(rows, cols);
        }
        if self.quiet {
            config = config.quiet();
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = cli.shell_config();
    tracing::debug!(?config, "starting session");

    let mut shell = Shell::new(&config)?;
    let stdin = std::io::stdin();
    shell.run(stdin.lock(), &mut std::io::stdout(), &mut std::io::stderr())?;

    Ok(())
}
