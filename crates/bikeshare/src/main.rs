mod bootstrap;
mod session;

use anyhow::Result;
use bikeshare_core::settings::Settings;
use bikeshare_ui::console::Console;

fn main() -> Result<()> {
    let settings = Settings::load_from_args(std::env::args_os());

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Data directory: {}", settings.data_dir.display());

    let mut console = Console::stdio();
    let rounds = session::run(&mut console, &settings.data_dir)?;

    tracing::info!("Session finished after {} round(s)", rounds);
    Ok(())
}
