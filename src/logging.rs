use std::sync::Once;

/// Routes `log` output through the test harness. Safe to call from every test, only the first call
/// installs the logger.
pub(crate) fn initialize_logging() {
    use simplelog::*;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // another test binary's logger may already be installed, which is fine
        let _ = CombinedLogger::init(
            vec![
                TestLogger::new(LevelFilter::Debug, Config::default()),
            ]
        );
    });
}
