use formcheck_analysis::{FormStandards, IdealRange};
use formcheck_base::log::LevelFilter;
use formcheck_pose::Device;
use formcheck_server::config::{Config, DeviceKind, DEFAULT_ADDR, DEFAULT_MAX_BODY_BYTES};
use formcheck_server::ServerError;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.addr, DEFAULT_ADDR);
    assert_eq!(config.server.addr, "0.0.0.0:5000");
    assert_eq!(config.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert_eq!(config.model.path, PathBuf::from("models/yolov8s-pose.onnx"));
    assert_eq!(config.model.name, "YOLOv8s-pose");
    assert_eq!(config.model.device(), Device::Cpu);
    assert_eq!(config.model.person_threshold, 0.25);
    assert_eq!(config.model.iou_threshold, 0.45);
    assert_eq!(config.analysis.keypoint_threshold, 0.5);
    assert_eq!(config.analysis.standards, FormStandards::default());
    assert_eq!(config.log.level, None);
    assert_eq!(config.log.dir, None);
}

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_toml_str(
        r#"
        [server]
        addr = "127.0.0.1:8080"

        [model]
        device = "cuda"
        cuda_device_id = 1
        "#,
    )
    .unwrap();

    assert_eq!(config.server.addr, "127.0.0.1:8080");
    assert_eq!(config.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert_eq!(config.model.device, DeviceKind::Cuda);
    assert_eq!(config.model.device(), Device::Cuda { device_id: 1 });
    assert_eq!(config.model.name, "YOLOv8s-pose");
}

#[test]
fn test_analysis_ranges() {
    let config = Config::from_toml_str(
        r#"
        [analysis]
        keypoint_threshold = 0.3
        elbow_angle = { min = 75, max = 105 }
        shooting_arc = { min = 50.0, max = 70.0 }
        "#,
    )
    .unwrap();

    assert_eq!(config.analysis.keypoint_threshold, 0.3);
    assert_eq!(config.analysis.standards.elbow_angle, IdealRange::new(75.0, 105.0));
    assert_eq!(config.analysis.standards.shooting_arc, IdealRange::new(50.0, 70.0));
    assert_eq!(config.analysis.standards.knee_bend, IdealRange::new(120.0, 150.0));
}

#[test]
fn test_inverted_range_is_rejected() {
    let err = Config::from_toml_str(
        r#"
        [analysis]
        knee_bend = { min = 150, max = 120 }
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::Config(ref msg) if msg.contains("knee_bend")));
}

#[test]
fn test_threshold_out_of_range_is_rejected() {
    let err = Config::from_toml_str("[analysis]\nkeypoint_threshold = 1.5\n").unwrap_err();
    assert!(matches!(err, ServerError::Config(ref msg) if msg.contains("keypoint_threshold")));
}

#[test]
fn test_zero_body_limit_is_rejected() {
    let err = Config::from_toml_str("[server]\nmax_body_bytes = 0\n").unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
}

#[test]
fn test_unknown_device_is_rejected() {
    let err = Config::from_toml_str("[model]\ndevice = \"tpu\"\n").unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
}

#[test]
fn test_invalid_toml_is_rejected() {
    assert!(matches!(
        Config::from_toml_str("[server\naddr = 1"),
        Err(ServerError::Config(_))
    ));
}

#[test]
fn test_log_level_parsing() {
    let config = Config::from_toml_str("[log]\nlevel = \"warn\"\ndir = \"logs\"\n").unwrap();
    let log_config = config.log.to_log_config().unwrap();
    assert_eq!(log_config.level, Some(LevelFilter::Warn));
    assert_eq!(log_config.dir, Some(PathBuf::from("logs")));

    let unset = Config::default().log.to_log_config().unwrap();
    assert_eq!(unset.level, None);
    assert_eq!(unset.dir, None);
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let config = Config::from_toml_str("[log]\nlevel = \"loud\"\n").unwrap();
    assert!(matches!(
        config.log.to_log_config(),
        Err(ServerError::Config(ref msg)) if msg.contains("loud")
    ));
}

#[test]
fn test_load_missing_file() {
    let err = Config::load(&PathBuf::from("/nonexistent/formcheck.toml")).unwrap_err();
    assert!(matches!(err, ServerError::Config(ref msg) if msg.contains("cannot read")));
}

#[test]
fn test_discover_explicit_path() {
    let path = std::env::temp_dir().join(format!("formcheck-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[model]\nname = \"custom-pose\"\n").unwrap();

    let (config, source) = Config::discover(Some(path.clone())).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.model.name, "custom-pose");
    assert_eq!(source, Some(path));
}
