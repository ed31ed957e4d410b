use super::*;
use log::{Level, Metadata, Record};

#[test]
fn parse_level_cases() {
    let cases: &[(Option<&str>, Level)] = &[
        (None, Level::Info),
        (Some(""), Level::Info),
        (Some("debug"), Level::Debug),
        (Some("DEBUG"), Level::Debug),
        (Some(" debug "), Level::Debug),
        (Some("info"), Level::Info),
        (Some("warn"), Level::Warn),
        (Some("WARN"), Level::Warn),
        (Some("error"), Level::Error),
        (Some("trace"), Level::Trace),
        (Some("TRACE"), Level::Trace),
        (Some("garbage"), Level::Info),
        (Some("off"), Level::Info),
    ];

    for (value, expected) in cases {
        let lvl = parse_level(*value);
        assert_eq!(
            lvl, *expected,
            "value {:?} should yield level {:?}, got {:?}",
            value, expected, lvl
        );
    }
}

#[test]
fn enabled_respects_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = Logger {
            level: logger_level,
            target: LogTarget::Stderr,
        };

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("test_target")
                .build();

            let expected = record_level <= logger_level;
            assert_eq!(
                logger.enabled(&meta),
                expected,
                "logger level {:?}, record level {:?}",
                logger_level,
                record_level
            );
        }
    }
}

#[test]
fn format_record_includes_level_target_and_message() {
    let args = format_args!("searching files");
    let record = Record::builder()
        .level(Level::Info)
        .target("fileglob_fs::walker")
        .args(args)
        .build();

    let line = format_record(&record);

    assert!(
        line.ends_with(" INFO [fileglob_fs::walker] searching files"),
        "unexpected line: {line}"
    );
}

#[test]
fn stderr_logger_does_not_panic() {
    let logger = Logger {
        level: Level::Info,
        target: LogTarget::Stderr,
    };

    let cases = [
        (Level::Debug, "debug"),
        (Level::Info, "info"),
        (Level::Error, "error"),
    ];

    for (lvl, msg) in &cases {
        let args = format_args!("{msg}");
        let record = Record::builder().level(*lvl).target("t").args(args).build();
        logger.log(&record);
    }

    logger.flush();
}

#[test]
fn init_is_idempotent() {
    init(Level::Warn).expect("first init");
    init(Level::Trace).expect("second init is a no-op");
}
