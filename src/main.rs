use StoichLab::cli::cli_main::run_cli;
use StoichLab::settings::{DEFAULT_CONFIG_FILE, LabSettings};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    //
    let (settings, settings_error) = match LabSettings::load(DEFAULT_CONFIG_FILE) {
        Ok(settings) => (settings, None),
        Err(e) => (LabSettings::default(), Some(e)),
    };
    let level = settings.level_filter().unwrap_or(LevelFilter::Info);
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
    if let Some(e) = settings_error {
        log::warn!("{}: using default settings", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run_cli(&args, &settings));
}
