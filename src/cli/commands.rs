//! CLI command implementations

use std::io;
use std::path::Path;

use crate::config::StoreConfig;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::protocol::{BasicArrayStoreResponderFactory, StoreResponderFactory};
use crate::store::MemoryArrayStoreFactory;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::serve_lines;

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Write a default configuration file. Refuses to overwrite.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(config_path.to_path_buf()));
    }

    StoreConfig::default().save(config_path)?;

    let path = config_path.display().to_string();
    log_event_with_fields(Event::ConfigWritten, &[("path", path.as_str())]);
    Ok(())
}

/// Load configuration, build a store and answer stdin requests until EOF.
pub fn serve(config_path: &Path) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = StoreConfig::load(config_path)?;
    let path = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);

    let factory = BasicArrayStoreResponderFactory::new(MemoryArrayStoreFactory);
    let responder = factory.create_responder(&config)?;

    log_event(Event::Serving);
    let handled = serve_lines(&responder, io::stdin().lock(), io::stdout().lock())?;

    let handled = handled.to_string();
    log_event_with_fields(Event::ShutdownComplete, &[("requests", handled.as_str())]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pagestore.json");

        init(&path).unwrap();

        assert_eq!(StoreConfig::load(&path).unwrap(), StoreConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pagestore.json");
        init(&path).unwrap();

        let err = init(&path).unwrap_err();
        assert!(matches!(err, CliError::AlreadyInitialized(_)));
    }

    #[test]
    fn test_serve_rejects_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = serve(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "PAGESTORE_CLI_CONFIG_ERROR");
    }
}
