//! Converter CLI
//!
//! Converts time, weight, length, and baking units:
//! - `converter 60 d` prints every other time unit for 60 days
//! - `converter 5.5 kg pounds` converts between two units
//! - `converter baking 2 c ml` resolves units in an explicit domain
//! - `converter --install` copies the binary onto the PATH

mod cli;
mod config;
mod install;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use converter_core::ConverterError;
use converter_units::{convert_in, render_table};

use crate::cli::{Cli, Request};
use crate::config::{Config, OutputFormat};
use crate::output::ConversionOutput;

fn init_logging(filter: &str) {
    // Logs go to stderr so stdout stays parseable in JSON mode
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(request: Request, config: &Config, format: OutputFormat) -> Result<String, ConverterError> {
    match request {
        Request::Help => Ok(format!("{}\n", Cli::command().render_help())),
        Request::Install => install::install(config).map(|lines| {
            let mut text = lines.join("\n");
            text.push('\n');
            text
        }),
        Request::Convert { selector, value, from_unit, to_unit } => {
            let result = convert_in(selector, value, &from_unit, &to_unit)?;
            let out = ConversionOutput::new(value, &from_unit, &to_unit, result);
            Ok(output::render_conversion(&out, format))
        }
        Request::Table { selector, value, from_unit } => {
            let table = render_table(selector, value, &from_unit)?;
            Ok(output::render_table(&table, format))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();

    let filter = if cli.verbose { "debug" } else { config.log_filter.as_str() };
    init_logging(filter);

    let format = if cli.json { OutputFormat::Json } else { config.output };
    debug!(args = ?cli.args, ?format, "starting");

    let result = cli.request().and_then(|request| run(request, &config, format));
    let status = report(result, format, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(status)
}

/// Write the outcome and return the process status: 0 on success, 1 on any
/// error. JSON errors go to `out`, text errors to `err_out`.
fn report<'a>(
    result: Result<String, ConverterError>,
    format: OutputFormat,
    out: &'a mut dyn Write,
    err_out: &'a mut dyn Write,
) -> u8 {
    match result {
        Ok(text) => {
            if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
                warn!("failed to write output: {}", e);
                return 1;
            }
            0
        }
        Err(err) => {
            debug!(code = %err.code, "{}", err.message);
            let text = output::render_error(&err, format);
            let sink = match format {
                OutputFormat::Json => out,
                OutputFormat::Text => err_out,
            };
            // The status already reports the failure if stderr is gone
            let _ = sink.write_all(text.as_bytes()).and_then(|_| sink.flush());
            1
        }
    }
}
