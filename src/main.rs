use panel_vision::{ImageSource, PanelAnalyzer, Settings, VisionError};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

fn init_logging(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}

#[tokio::main]
async fn main() -> Result<(), VisionError> {
    let mut args = std::env::args().skip(1);
    let Some(image) = args.next() else {
        eprintln!("usage: panel-vision <image> [config-file]");
        std::process::exit(2);
    };
    let config_file = args.next().map(PathBuf::from);

    let settings = Settings::load(config_file.as_deref())?;
    init_logging(settings.level()?);
    if let Some(path) = &config_file {
        info!("Loaded settings from {}", path.display());
    }

    let analyzer = Arc::new(PanelAnalyzer::new(settings.analysis)?);
    let analysis = analyzer.analyze_async(ImageSource::path(image)).await;

    match serde_json::to_string_pretty(&analysis) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize analysis: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
