use formcheck_analysis::FormAnalyzer;
use formcheck_base::log;
use formcheck_pose::KeypointProvider;
use formcheck_server::config::ModelConfig;
use formcheck_server::{AppState, Config, Server};
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(feature = "onnx")]
fn load_provider(model: &ModelConfig) -> Result<Box<dyn KeypointProvider>, Box<dyn std::error::Error>> {
    use formcheck_pose::YoloPoseProvider;

    log::info!("Loading {} from {} on {}", model.name, model.path.display(), model.device());
    let provider = YoloPoseProvider::load(&model.path, model.device())?
        .with_name(model.name.clone())
        .with_conf_threshold(model.person_threshold)
        .with_iou_threshold(model.iou_threshold);
    Ok(Box::new(provider))
}

#[cfg(not(feature = "onnx"))]
fn load_provider(model: &ModelConfig) -> Result<Box<dyn KeypointProvider>, Box<dyn std::error::Error>> {
    Err(format!(
        "cannot load {}: built without an inference backend, rebuild with `--features onnx`",
        model.path.display()
    )
    .into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = Config::discover(std::env::args_os().nth(1).map(PathBuf::from))?;
    formcheck_base::init_logger(&config.log.to_log_config()?)?;

    log::info!("Basketball Shooting Form Analyzer");
    match &source {
        Some(path) => log::info!("Configuration: {}", path.display()),
        None => log::info!("Configuration: defaults"),
    }

    let provider = load_provider(&config.model)?;
    log::info!("Model loaded: {}", provider.name());

    let state = Arc::new(AppState::new(
        provider,
        FormAnalyzer::new(config.analysis.standards),
        config.analysis.keypoint_threshold,
    ));

    let server = Server::bind(config.server.addr.as_str(), state, config.server.max_body_bytes).await?;
    log::info!("Listening on {}", server.local_addr());

    tokio::signal::ctrl_c().await?;
    log::info!("Shutting down");
    drop(server);

    Ok(())
}
