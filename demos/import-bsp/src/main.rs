//! Imports a BSP file and prints a summary of what was found.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use quarry_scene::{full_error_display, import_bsp, ImportOptions, Scene};

#[derive(Parser, Debug)]
#[command(about = "Import a Quake BSP file into scene data")]
struct Args {
    /// The .bsp file to import
    map: PathBuf,

    /// RON file with import options. Flags below override it.
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Directory containing palette.lmp
    #[arg(long)]
    resources: Option<PathBuf>,

    #[arg(long)]
    scale: Option<f32>,

    /// Decode textures
    #[arg(long)]
    materials: bool,

    /// Import lights, cameras and every other entity
    #[arg(long)]
    entities: bool,

    #[arg(long)]
    worldspawn_only: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", full_error_display(&err));
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();

    // Initialise logger
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_max_level(level)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Error initialising logger")?;

    let options = build_options(&args)?;
    let scene = import_bsp(&args.map, &options)
        .with_context(|| format!("Error importing {:?}", args.map))?;

    print_summary(&scene);

    Ok(())
}

fn build_options(args: &Args) -> Result<ImportOptions> {
    let mut options = match &args.options {
        Some(path) => load_options(path)?,
        None => ImportOptions::default(),
    };

    if let Some(dir) = &args.resources {
        options.resource_dir = dir.clone();
    }
    if let Some(scale) = args.scale {
        options.scale = scale;
    }
    if args.materials {
        options.create_materials = true;
    }
    if args.entities {
        options.create_lights = true;
        options.create_cameras = true;
        options.all_entities = true;
    }
    if args.worldspawn_only {
        options.worldspawn_only = true;
    }

    Ok(options)
}

fn load_options(path: &Path) -> Result<ImportOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Error reading options from {:?}", path))?;
    let options = ron::from_str(&text).with_context(|| format!("Error parsing {:?}", path))?;
    info!("Loaded options from {:?}", path);

    Ok(options)
}

fn print_summary(scene: &Scene) {
    let report = &scene.report;
    println!(
        "{} (version {:#x}, {:?})",
        scene.map_name, report.version, report.variant
    );

    for mesh in scene.meshes.iter() {
        println!(
            "  {}: {} polygons, {} vertices, {} materials",
            mesh.name,
            mesh.polygons.len(),
            mesh.positions.len(),
            mesh.materials.len()
        );
    }

    for model in report.models.iter() {
        if model.hidden > 0 || model.failed() > 0 {
            println!(
                "  model {}: {} hidden, {} degenerate, {} repeated vertex, {} duplicate, {} malformed",
                model.model_idx,
                model.hidden,
                model.degenerate,
                model.repeated_vertex,
                model.duplicate,
                model.malformed
            );
        }
    }
    if report.discarded_models() > 0 {
        println!("  {} empty models discarded", report.discarded_models());
    }

    println!(
        "  {} materials ({} of {} textures without pixels)",
        scene.materials.len(),
        report.textures_without_pixels,
        report.textures
    );
    println!(
        "  {} lights, {} cameras, {} objects ({} entities skipped)",
        scene.lights.len(),
        scene.cameras.len(),
        scene.objects.len(),
        report.entities_skipped
    );

    match scene.active_camera() {
        Some(camera) => println!(
            "  active camera at {:?}",
            camera.transform.position.as_slice()
        ),
        None if !scene.cameras.is_empty() => warn!("No player start camera"),
        None => {}
    }

    println!("  took {:?}", report.timings.total);
}
