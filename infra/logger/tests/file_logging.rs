use sdui_domain::config::LoggingConfig;
use sdui_logger::LoggerBuilder;
use std::fs;
use std::time::Duration;

#[test]
fn json_file_logging_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("logs");
    let config = LoggingConfig { json: true, dir: Some(dir.clone()), ..LoggingConfig::default() };

    let logger = LoggerBuilder::from_config("sdui-file-test", &config)?.console(false).init()?;
    assert!(logger.writes_files());

    tracing::info!(profile = "black", "dictionary cached");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let line = contents.lines().find(|line| line.contains("dictionary cached")).expect("event written");
    assert!(line.starts_with('{'), "file output should be JSON: {line}");
    assert!(line.contains("\"profile\":\"black\""));
    Ok(())
}
