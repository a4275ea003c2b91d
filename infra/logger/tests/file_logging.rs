use aqua_logger::{LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_sink_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("aqua-file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .rotation(Rotation::NEVER)
        .json()
        .init()?;
    assert!(logger.has_file_sink());

    tracing::info!(file = "favicon-32.png", "generated");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let line = contents.lines().next().expect("at least one line");
    assert!(line.starts_with('{'), "json sink should write objects, got {line}");
    assert!(contents.contains("favicon-32.png"));

    Ok(())
}
