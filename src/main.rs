use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, debug, info};
use simple_logger::SimpleLogger;

use toruslife::Engine;
use toruslife::config::ParamsOverride;
use toruslife::rule::RuleKind;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let args: Vec<String> = std::env::args().collect();

    let kind: RuleKind = match args.get(1) {
        Some(s) => s.parse()?,
        None => RuleKind::Life,
    };
    let ticks: usize = match args.get(2) {
        Some(s) => s.parse().with_context(|| format!("invalid tick count {s:?}"))?,
        None => 20,
    };
    let out_dir: PathBuf = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));
    let overrides: ParamsOverride = match args.get(4) {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("failed to parse {path}"))?
        }
        None => ParamsOverride::default(),
    };

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let params = overrides.resolve(kind);
    debug!("params: {}", serde_json::to_string(&params)?);
    info!(
        "Running {} on {}x{} for {} ticks ({} steps/tick), seed={}",
        params.kind, params.width, params.height, ticks, params.steps_per_tick, params.seed
    );

    let mut engine = Engine::new(params)?;
    let (fw, fh) = engine.frame_size();

    let start = Instant::now();
    for frame in 0..=ticks {
        if frame > 0 {
            engine.tick();
        }
        if let toruslife::World::Life(sim) = &engine.world {
            debug!("generation {}\n{}", sim.generation(), sim.grid());
        }

        let path = out_dir.join(format!("frame_{frame:04}.png"));
        image::save_buffer(&path, &engine.render(), fw as u32, fh as u32, image::ColorType::Rgba8)
            .with_context(|| format!("failed to save {}", path.display()))?;
        info!(
            "frame {:4}  generation {:5}  population {:5}",
            frame,
            engine.world.generation(),
            engine.world.population()
        );
    }

    info!(
        "Done: {} frames in {:.1} ms, written to {}",
        ticks + 1,
        start.elapsed().as_secs_f64() * 1000.0,
        out_dir.display()
    );
    Ok(())
}
