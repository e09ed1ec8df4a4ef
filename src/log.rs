use log::LevelFilter;

/// Write log messages to a file in the system temp directory. The
/// interface owns the terminal, so logs cannot go to `stdout`.
pub fn enable(name: &str) -> Result<(), anyhow::Error> {
    let logfile = std::env::temp_dir().join(format!("{name}.log"));
    simple_logging::log_to_file(logfile, LevelFilter::Info)?;

    Ok(())
}
