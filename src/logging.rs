use std::path::Path;

use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, Naming};

/// Start the logger: a `RUST_LOG`-style env filter wins, `default_level` is
/// the fallback. With a directory, logs rotate in files there; otherwise
/// they go to stderr, colored.
pub fn setup_logging(
    default_level: &str,
    log_dir: Option<&Path>,
) -> Result<(), FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(default_level)?;
    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(7),
            ),
        None => logger.format(flexi_logger::colored_default_format),
    };
    logger.start()?;
    Ok(())
}
