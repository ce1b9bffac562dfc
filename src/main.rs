use anyhow::{Context, Result};
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use followsun::args::{CliAction, ParsedArgs, RunArgs};
use followsun::constants::{FAULT_DEFAULT_LINE, USAGE, USAGE_EXIT_CODE};
use followsun::logger::LogLevel;
use followsun::{Capabilities, Estimator, Log, SystemClock};

/// Resolve capabilities, run the estimator and write the result line.
///
/// # Arguments
/// * `args` - Parsed positional values and flags
/// * `out` - Destination of the result line (standard output in production)
///
/// # Returns
/// - `Ok(())` once the `<TAG> <HH:MM> <HH:MM>` line is written
/// - `Err` only if the line could not be written
fn run<W: Write>(args: &RunArgs, out: &mut W) -> Result<()> {
    let mut capabilities = Capabilities::detect();
    if args.no_precise {
        capabilities.precise = false;
    }

    let estimator = Estimator::new(SystemClock, capabilities);
    let estimate = estimator.estimate_args(
        &args.latitude,
        &args.longitude,
        args.sunrise_offset.as_deref(),
        args.sunset_offset.as_deref(),
    );
    Log::log_debug(&format!("Result from {} path", estimate.source));

    let line = estimate.output_line(estimator.capabilities().precise);
    writeln!(out, "{}", line).context("failed to write result to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Run `job` and turn any escaping error or panic into the hardcoded answer.
///
/// The process still exits successfully: the scheduler reading `out` always
/// gets a line it can parse.
fn report<W, F>(out: &mut W, job: F)
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    // The default panic hook has already written the panic message to stderr
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| job(&mut *out)));
    match outcome {
        Ok(Ok(())) => return,
        Ok(Err(e)) => Log::log_error_chain(LogLevel::Crit, &e),
        Err(_) => Log::log_critical("Unexpected fault while estimating sunrise/sunset"),
    }

    let _ = writeln!(out, "{}", FAULT_DEFAULT_LINE);
    let _ = out.flush();
}

fn main() {
    let args = match ParsedArgs::from_env().action {
        CliAction::Run(args) => args,
        CliAction::ShowInfo(text) => {
            print!("{}", text);
            return;
        }
        CliAction::ShowUsage => {
            println!("{}", USAGE);
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    Log::set_debug(args.debug_enabled);

    let mut stdout = io::stdout().lock();
    report(&mut stdout, |out| run(&args, out));
}
