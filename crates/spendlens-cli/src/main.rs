mod cli;
mod dispatch;
mod logging;
mod output;
mod server;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use spendlens_client::ClientError;

use crate::dispatch::Dispatched;
use crate::stdout_io::write_stdout_line;

const ROOT_HELP: &str = "spendlens - read-only spending reports over a transaction file

Usage:
  spendlens <command>

Start here:
  spendlens query --action getRecentTransactions --n 5
  spendlens query --action aggregateByCategory
  spendlens query --action aggregateByMonth --json
  spendlens serve                                   GET http://127.0.0.1:8787/api?action=...
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_line(ROOT_HELP.trim_end()).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if write_stdout_line(err.to_string().trim_end()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error = ClientError::invalid_argument(&clean_message);
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };

    logging::init_tracing();
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(Dispatched::Report(success)) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Ok(Dispatched::Served) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

/// Drops clap's trailing usage lines; recovery steps replace them.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.is_internal() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::strip_clap_boilerplate;

    #[test]
    fn strips_usage_suffix() {
        let message = "error: unexpected argument '--bogus' found\n\nUsage: spendlens query [OPTIONS]\n\nFor more information, try '--help'.\n";
        assert_eq!(
            strip_clap_boilerplate(message),
            "error: unexpected argument '--bogus' found"
        );
    }
}
