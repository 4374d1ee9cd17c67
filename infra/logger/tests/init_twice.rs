use folio_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_install_is_rejected() {
    let logger = Logger::builder()
        .name("folio-init-twice")
        .level(LevelFilter::WARN)
        .init()
        .expect("first init should succeed");
    assert!(!logger.writes_file());
    assert_eq!(logger.name(), "folio-init-twice");

    let err = Logger::builder().name("folio-init-twice-again").init().expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
