use log::info;

use fractal_viewer::{
    ConfigSource, DEFAULT_CONFIG_FILE, ExportController, ExtensionFilePresenter, ViewerConfig,
    ViewerSession,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let (config, source) = ViewerConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    match &source {
        ConfigSource::File(path) => info!("configuration loaded from {}", path.display()),
        ConfigSource::Defaults => info!("no {} found, using defaults", DEFAULT_CONFIG_FILE),
    }

    let export_path = config.export_path.clone();
    let session = ViewerSession::new(config)?;
    let controller = ExportController::new(ExtensionFilePresenter::new());

    controller.export(&session, export_path)?;

    Ok(())
}
