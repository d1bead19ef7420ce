use std::path::Path;

use spendlens_client::config::{resolve_data_path, resolve_listen_addr};
use spendlens_client::{
    ClientError, ClientResult, RawQueryParams, SuccessEnvelope, TransactionQueryService,
};

use crate::cli::{Cli, Commands};
use crate::server;

/// Outcome of one CLI invocation: a report to print, or a server that ran
/// until shutdown.
#[derive(Debug)]
pub enum Dispatched {
    Report(SuccessEnvelope),
    Served,
}

pub fn dispatch(cli: &Cli) -> ClientResult<Dispatched> {
    match &cli.command {
        Commands::Query { action, n, data, .. } => {
            run_query(action.as_deref(), n.as_deref(), data.as_deref()).map(Dispatched::Report)
        }
        Commands::Serve { addr, data } => {
            run_serve(addr.as_deref(), data.as_deref()).map(|()| Dispatched::Served)
        }
    }
}

fn run_query(
    action: Option<&str>,
    n: Option<&str>,
    data: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let data_path = resolve_data_path(data)?;
    TransactionQueryService::from_json_file(data_path).execute(&RawQueryParams::new(action, n))
}

fn run_serve(addr: Option<&str>, data: Option<&Path>) -> ClientResult<()> {
    let listen_addr = resolve_listen_addr(addr)?;
    let data_path = resolve_data_path(data)?;
    let service = TransactionQueryService::from_json_file(data_path);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| server_error(&error.to_string()))?;

    runtime
        .block_on(server::serve(listen_addr, service))
        .map_err(|error| server_error(&format!("could not serve on {listen_addr}: {error}")))
}

fn server_error(detail: &str) -> ClientError {
    ClientError::new(
        "internal_server_failed",
        detail,
        vec!["Check that the address is free, or pass a different --addr.".to_string()],
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;

    use super::{Dispatched, dispatch};
    use crate::cli::parse_from;

    #[test]
    fn query_dispatches_against_the_given_file() {
        let dir = std::env::temp_dir().join(format!("spendlens-dispatch-{}", std::process::id()));
        assert!(fs::create_dir_all(&dir).is_ok());
        let path = dir.join("tx.json");
        let body = json!({
            "transactions": [
                { "id": "t001", "date": "2024-09-01", "amount": 10, "category": "Food", "merchant": "Test" }
            ]
        });
        assert!(fs::write(&path, body.to_string()).is_ok());

        let path_arg = path.display().to_string();
        let parsed = parse_from([
            "spendlens",
            "query",
            "--action",
            "aggregateByCategory",
            "--data",
            path_arg.as_str(),
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let outcome = dispatch(&cli);
            assert!(outcome.is_ok());
            if let Ok(Dispatched::Report(envelope)) = outcome {
                assert_eq!(envelope.action, "aggregateByCategory");
                assert_eq!(envelope.data["categories"][0]["percentage"], 100.0);
            }
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn invalid_listen_address_fails_before_binding() {
        let parsed = parse_from(["spendlens", "serve", "--addr", "not-an-addr"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let outcome = dispatch(&cli);
            assert!(outcome.is_err());
            if let Err(error) = outcome {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }
}
