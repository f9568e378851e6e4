
/// Installs a terminal logger so `log` output from the trees shows up in failing tests.
/// Only the first call in a test binary has any effect.
pub(crate) fn init_logging() {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
