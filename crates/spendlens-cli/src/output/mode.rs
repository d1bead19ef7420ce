use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Query { json: true, .. } => OutputMode::Json,
        Commands::Query { json: false, .. } | Commands::Serve { .. } => OutputMode::Text,
    }
}
