use nimbus_services::{LogLevel, LoggerService, TracingLogger};
use std::error::Error;
use std::sync::Mutex;

/// Records every log call so the provided trait defaults can be checked.
#[derive(Default)]
struct RecordingLogger {
    lines: Mutex<Vec<(LogLevel, String, Option<String>)>>,
}

impl LoggerService for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str, cause: Option<&(dyn Error + 'static)>) {
        self.lines.lock().unwrap().push((
            level,
            message.to_owned(),
            cause.map(|e| e.to_string()),
        ));
    }
}

// ── Provided defaults delegate with the right level ──────────────

#[test]
fn level_conveniences_delegate() {
    let logger = RecordingLogger::default();
    logger.trace("t");
    logger.debug("d");
    logger.info("i");
    logger.warn("w");
    logger.error("e");

    let lines = logger.lines.lock().unwrap();
    let levels: Vec<_> = lines.iter().map(|(level, _, _)| *level).collect();
    assert_eq!(
        levels,
        vec![
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error
        ]
    );
    assert!(lines.iter().all(|(_, _, cause)| cause.is_none()));
}

#[test]
fn with_cause_conveniences_carry_the_cause() {
    let logger = RecordingLogger::default();
    let cause = std::io::Error::other("boom");
    logger.warn_with("lookup failed", &cause);
    logger.error_with("giving up", &cause);

    let lines = logger.lines.lock().unwrap();
    assert_eq!(lines[0].0, LogLevel::Warn);
    assert_eq!(lines[0].2.as_deref(), Some("boom"));
    assert_eq!(lines[1].0, LogLevel::Error);
}

// ── Level ordering and rendering ─────────────────────────────────

#[test]
fn levels_order_by_severity() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Error);
}

#[test]
fn level_renders_lowercase() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(serde_json::to_string(&LogLevel::Error).unwrap(), "\"error\"");
}

// ── TracingLogger ────────────────────────────────────────────────

#[test]
fn tracing_logger_emits_through_the_facade() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let logger = TracingLogger;
        logger.info("request handled");
        logger.error_with("request failed", &std::io::Error::other("backend down"));
        logger.log(LogLevel::Trace, "fine-grained", None);
    });
}
