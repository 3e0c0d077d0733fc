//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, format_entry and DefaultLogger.

use crate::log::{format_entry, Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "galaxy3d::rhi::GraphicsDevice".to_string(),
        message: "Synthesized 2 dependencies for 1 subpasses".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Trace, LogSeverity::Trace);
    assert_ne!(LogSeverity::Trace, LogSeverity::Debug);
    assert_ne!(LogSeverity::Info, LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    let severities = [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ];
    for severity in severities {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Info.label(), "INFO ");
    assert_eq!(LogSeverity::Error.label(), "ERROR");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_without_file_line() {
    let entry = entry(LogSeverity::Debug, None, None);

    assert_eq!(entry.severity, LogSeverity::Debug);
    assert_eq!(entry.source, "galaxy3d::rhi::GraphicsDevice");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_clone() {
    let entry1 = entry(LogSeverity::Error, Some("render_pass.rs"), Some(42));
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.message, entry2.message);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
    assert_eq!(entry1.timestamp, entry2.timestamp);
}

// ============================================================================
// FORMAT TESTS
// ============================================================================

#[test]
fn test_format_entry_normal() {
    let line = format_entry(&entry(LogSeverity::Trace, None, None));

    assert!(line.starts_with('['));
    assert!(line.contains("] [TRACE] [galaxy3d::rhi::GraphicsDevice] Synthesized 2 dependencies"));
    assert!(!line.contains(".rs:"));
}

#[test]
fn test_format_entry_detailed() {
    let line = format_entry(&entry(LogSeverity::Error, Some("render_pass.rs"), Some(42)));

    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(render_pass.rs:42)"));
}

#[test]
fn test_format_entry_needs_file_and_line() {
    let line = format_entry(&entry(LogSeverity::Error, Some("render_pass.rs"), None));
    assert!(!line.contains("render_pass.rs"));
}

#[test]
fn test_format_entry_timestamp_layout() {
    let line = format_entry(&entry(LogSeverity::Info, None, None));

    // [YYYY-MM-DD HH:MM:SS.mmm]
    let close = line.find(']').unwrap();
    let timestamp = &line[1..close];
    assert_eq!(timestamp.len(), 23);
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[10..11], " ");
    assert_eq!(&timestamp[19..20], ".");
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    logger.log(&entry(LogSeverity::Trace, None, None));
    logger.log(&entry(LogSeverity::Debug, None, None));
    logger.log(&entry(LogSeverity::Info, None, None));
    logger.log(&entry(LogSeverity::Warn, None, None));
    logger.log(&entry(LogSeverity::Error, Some("log_tests.rs"), Some(1)));
}

#[test]
fn test_logger_trait_object() {
    let logger: Box<dyn Logger> = Box::new(DefaultLogger);
    logger.log(&entry(LogSeverity::Info, None, None));
}
