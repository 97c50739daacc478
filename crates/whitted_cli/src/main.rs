use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use whitted_core::load_scene;
use whitted_renderer::{render_all, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "whitted")]
#[command(about = "Render a JSON scene with a Whitted-style ray tracer", long_about = None)]
struct Args {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Directory prepended to every output filename
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Worker threads for parallel rendering (defaults to one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Render on the calling thread only
    #[arg(long)]
    serial: bool,
}

fn output_path(out_dir: Option<&Path>, filename: &Path) -> PathBuf {
    match out_dir {
        Some(dir) => dir.join(filename),
        None => filename.to_path_buf(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let start = Instant::now();
    let scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    let (spheres, rectangles) = scene.geometry_breakdown();
    log::info!(
        "Scene ready in {:?}: {} spheres, {} rectangles, {} lights, {} outputs",
        start.elapsed(),
        spheres,
        rectangles,
        scene.light_count(),
        scene.output_count()
    );

    let config = RenderConfig::default().with_parallel(!args.serial);
    let start = Instant::now();
    let images = render_all(&scene, &config);

    for rendered in &images {
        let path = output_path(args.out_dir.as_deref(), &rendered.output.filename);
        rendered
            .image
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    log::info!("Rendered {} image(s) in {:?}", images.len(), start.elapsed());
    Ok(())
}
