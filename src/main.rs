use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use scylla_help::archive;
use scylla_help::cli::{Args, Commands};
use scylla_help::context::RunContext;
use scylla_help::crypto;
use scylla_help::report;
use scylla_help::upload;

fn main() -> Result<()> {
    let args = Args::parse();
    initialize_logging(args.quiet)?;

    let mut ctx = RunContext::new(args.uuid.clone());
    ctx.open_sinks(args.out_file.as_deref(), args.call_home, args.tee)?;

    run_command(&mut ctx, &args)?;
    ctx.close_sinks();

    // The stages below operate on the files now on disk, not on in-memory
    // report state.
    archive::archive_files(&mut ctx, args.zip, args.encrypt)?;
    if args.encrypt {
        crypto::encrypt_archive(&mut ctx)?;
    }
    upload::send_results(&ctx, args.call_home);
    ctx.cleanup(args.keep);

    Ok(())
}

/// Run the selected report or check operation against the open sinks.
fn run_command(ctx: &mut RunContext, args: &Args) -> Result<()> {
    match args.command {
        Commands::System => {
            info!("collecting system information");
            let res = report::system::collect(ctx)?;
            report::write(ctx, &res)
        }
        Commands::Scylla => {
            info!("collecting scylla runtime information");
            let res = report::runtime::collect()?;
            report::write(ctx, &res)
        }
        Commands::Version => {
            report::version::check();
            Ok(())
        }
    }
}

/// Initialize terminal logging. Quiet mode suppresses progress tracing and
/// keeps warnings, including upload-failure lines.
fn initialize_logging(quiet: bool) -> Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}
