use log::info;

use fractal_viewer::{
    ConfigSource, DEFAULT_CONFIG_FILE, ExportController, ExtensionFilePresenter, ViewerConfig,
    ViewerSession, run_gui,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let (config, source) = ViewerConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    match &source {
        ConfigSource::File(path) => info!("configuration loaded from {}", path.display()),
        ConfigSource::Defaults => info!("no {} found, using defaults", DEFAULT_CONFIG_FILE),
    }

    let session = ViewerSession::new(config)?;
    run_gui(session, ExportController::new(ExtensionFilePresenter::new()))?;

    Ok(())
}
