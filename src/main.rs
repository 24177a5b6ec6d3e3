//! Head direction estimation application for real-time orientation tracking.

use anyhow::Result;
use clap::Parser;
use head_direction::{
    config::Config,
    detection_loop::DetectionLoop,
    mesh_detection::FaceMeshDetector,
    overlay::{DrawSurface, NullSurface, OverlayPublisher, WindowOverlay},
    video::Camera,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value = "0")]
    cam: i32,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    video: Option<PathBuf>,

    /// Path to the face mesh ONNX model
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Delay between detection cycles in milliseconds
    #[arg(long)]
    interval: Option<u64>,

    /// Run without the overlay window
    #[arg(long)]
    headless: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Head Direction Estimation");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Apply command line overrides
    config.video.camera_index = args.cam;
    if let Some(video) = args.video {
        config.video.video_file = Some(video);
    }
    if let Some(model) = args.model {
        config.detector.model_path = model;
    }
    if let Some(interval) = args.interval {
        config.tracking.tick_interval_ms = interval;
    }
    if args.headless {
        config.display.headless = true;
    }

    config.validate()?;

    let camera = match &config.video.video_file {
        Some(path) => Camera::from_file(path)?,
        None => Camera::open(config.video.camera_index)?,
    };

    if config.display.headless {
        run_pipeline(config, camera, NullSurface).await
    } else {
        let overlay = WindowOverlay::new(&config.display.window_name, config.display.marker_radius)?;
        run_pipeline(config, camera, overlay).await
    }
}

/// Wire the detection loop to its capabilities and run it until Ctrl-C
async fn run_pipeline<S: DrawSurface>(config: Config, camera: Camera, surface: S) -> Result<()> {
    let overlay = OverlayPublisher::new(surface);

    let mut detection_loop =
        DetectionLoop::<FaceMeshDetector, _, _>::new(config.loop_config(), camera, overlay);

    // Log every direction change observed on the watch slot
    let mut directions = detection_loop.direction();
    tokio::spawn(async move {
        while directions.changed().await.is_ok() {
            let direction = *directions.borrow_and_update();
            info!("Head direction: {direction}");
        }
    });

    // Ctrl-C suppresses the next scheduled cycle
    let handle = detection_loop.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Exit requested by user");
            handle.cancel();
        }
    });

    detection_loop.run().await?;
    Ok(())
}
