use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use fix_content_lengths::cli::usage_and_exit;
use fix_content_lengths::{build_options, process_path, Args, Counters};

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stdout)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_level(false)
        .try_init();
}

fn print_summary(counters: &Counters) {
    println!("== Summary ==");
    println!("Patched:              {}", counters.patched);
    println!("Lines replaced:       {}", counters.lines_replaced);
    println!("Verified (dry run):   {}", counters.verified);
    println!("Skipped (missing):    {}", counters.missing);
    println!("Skipped (mismatch):   {}", counters.misaligned);
    println!("Skipped (total):      {}", counters.skipped());
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => err.exit(),
        Err(err) => {
            let rendered = err.to_string();
            usage_and_exit(rendered.lines().next().unwrap_or("wrong parameter"))
        }
    };

    let opts = match build_options(&args) {
        Ok(opts) => opts,
        Err(err) => usage_and_exit(&err.to_string()),
    };

    init_logging(opts.verbose);

    let counters = process_path(&opts)?;

    if opts.verbose {
        print_summary(&counters);
    }

    Ok(())
}
