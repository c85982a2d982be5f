use clap::Parser;
use delta_calc::calculator::calculate;
use delta_calc::ui::config::UIConfig;
use delta_calc::ui::console::help::HELP;
use delta_calc::ui::console::print::Printer;
use delta_calc::ui::console::AppBuilder;
use delta_calc::ui::{parse_pair, Mode};
use delta_calc::Error;
use log::{debug, warn};
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true)]
struct Args {
    /// Two values to compare, without values an interactive session starts
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    values: Vec<OsString>,
}

fn main() -> ExitCode {
    env_logger::init();
    let config = UIConfig::detect();

    let raw: Vec<OsString> = std::env::args_os().skip(1).collect();
    let values = match Args::try_parse() {
        // clap swallows a `--` marker, every argument must be counted
        Ok(args) if args.values.len() == raw.len() => args.values,
        Ok(_) => {
            debug!(target: "cli", "end of options marker kept as a value");
            raw
        }
        Err(e) => {
            debug!(target: "cli", "arguments rejected: {e}");
            return usage_error(raw.len(), config).unwrap_or(ExitCode::FAILURE);
        }
    };

    match run(&values, config) {
        Ok(code) => code,
        Err(e) => {
            warn!(target: "cli", "session aborted: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(values: &[OsString], config: UIConfig) -> anyhow::Result<ExitCode> {
    let mode = Mode::from_args(values);
    debug!(target: "cli", "mode: {mode:?}");

    match mode {
        Mode::Interactive => {
            AppBuilder::new(config).build()?.run()?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::Help => {
            Printer::new(io::stdout(), config.colored).print(HELP)?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::OneShot(first, second) => match parse_pair(first, second) {
            Ok((val1, val2)) => {
                Printer::new(io::stdout(), config.colored).print(calculate(val1, val2))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                debug!(target: "cli", "one-shot values rejected: {e:?}");
                Printer::new(io::stderr(), config.colored_errors)
                    .error(format_args!("Error: {e}"))?;
                Ok(ExitCode::FAILURE)
            }
        },
        Mode::Invalid(count) => Ok(usage_error(count, config)?),
    }
}

fn usage_error(count: usize, config: UIConfig) -> io::Result<ExitCode> {
    Printer::new(io::stderr(), config.colored_errors)
        .error(format_args!("Error: {}", Error::ArgumentCount(count)))?;
    Printer::new(io::stdout(), config.colored).print(HELP)?;
    Ok(ExitCode::FAILURE)
}
