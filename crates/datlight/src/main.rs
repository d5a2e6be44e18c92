use anyhow::{Context, Result};
use datlight_core::{load_scene, Scene};
use datlight_renderer::{render, RenderConfig, World};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Instant;
use structopt::StructOpt;

mod output;

#[derive(Debug, StructOpt)]
#[structopt(name = "datlight", about = "Recursive CPU ray tracer", rename_all = "kebab-case")]
struct Opt {
    /// Scene file (JSON). The built-in scene is used when omitted.
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,

    /// Output PNG path
    #[structopt(short, long, default_value = "trace.png", parse(from_os_str))]
    output: PathBuf,

    #[structopt(long, default_value = "1024")]
    width: u32,

    #[structopt(long, default_value = "768")]
    height: u32,

    /// Tracer threads [default: logical CPU count]
    #[structopt(short, long)]
    jobs: Option<usize>,

    /// Maximum reflection depth
    #[structopt(long, default_value = "1")]
    depth: u32,

    /// Image-plane distance between pixels [default: 0.02 / 1024 * width]
    #[structopt(long)]
    pixel_scale: Option<f32>,

    #[structopt(long, default_value = "info")]
    log_level: String,
}

impl Opt {
    fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::new()
            .with_resolution(self.width, self.height)
            .with_max_depth(self.depth);

        if let Some(jobs) = self.jobs {
            config = config.with_workers(jobs);
        }
        if let Some(scale) = self.pixel_scale {
            config = config.with_pixel_scale(scale);
        }
        config
    }
}

fn load(opt: &Opt) -> Result<Scene> {
    match &opt.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => Ok(Scene::default_scene()),
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    let level = opt.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let scene = load(&opt)?;
    log::info!(
        "Scene '{}': {} objects, {} lights",
        scene.name,
        scene.object_count(),
        scene.light_count()
    );

    let world = World::from_scene(&scene)?;
    let config = opt.render_config();

    let start = Instant::now();
    let framebuffer = render(&world, &config)?;
    let render_time = start.elapsed();

    let start = Instant::now();
    output::write_png(&framebuffer, &opt.output)?;
    let write_time = start.elapsed();

    log::info!("Rendering\t{:?}", render_time);
    log::info!("Writing\t\t{:?}", write_time);
    log::info!("Total time\t{:?}", render_time + write_time);
    log::info!("Saved to {}", opt.output.display());

    Ok(())
}
