pub(crate) mod quick;

/// Routes `log` output through the test harness so `--nocapture` shows rotations and recolorings.
pub(crate) fn init_logging() {
    use simplelog::{Config, LevelFilter, TestLogger};

    // Another test may have installed the logger already.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
