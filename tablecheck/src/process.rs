//! One capture -> detect -> annotate cycle over a single image.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use image::RgbaImage;

use occupancy_common::provider::{DetectOptions, DetectionProvider};
use occupancy_common::store::SceneStore;
use overlay_common::annotate::{load_base_image, record_label, render_overlay};
use overlay_common::scene;

use crate::Args;

pub async fn run<P>(args: &Args, provider: P, opts: DetectOptions) -> anyhow::Result<()>
where
    P: DetectionProvider,
{
    let (image, source_path) = acquire_image(args)?;
    log::info!("Using {}x{} base image", image.width(), image.height());

    let mut store = SceneStore::new();
    let token = store.set_image(image);

    let started = Instant::now();
    let records = {
        let base = store.image().context("store holds no image")?;
        provider.detect(base, &opts).await?
    };
    log::info!(
        "{} backend returned {} record(s) in {:?}",
        provider.name(),
        records.len(),
        started.elapsed()
    );

    if !store.apply_detections(token, records) {
        anyhow::bail!("detection results no longer match the current image");
    }

    let base = store.image().context("store holds no image")?;
    let annotated = render_overlay(base, store.records());

    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| source_path.with_extension("out.png"));
    annotated
        .save(&out_path)
        .with_context(|| format!("Failed to save annotated image to {out_path:?}"))?;

    let records_path = args
        .records
        .clone()
        .unwrap_or_else(|| source_path.with_extension("records.json"));
    let records_file = std::fs::File::create(&records_path)
        .with_context(|| format!("Failed to create {records_path:?}"))?;
    serde_json::to_writer_pretty(records_file, store.records())?;

    println!("\nTables in {source_path:?}:");
    for record in store.records() {
        println!(
            "  {} @ ({:.0},{:.0}) {:.0}x{:.0}",
            record_label(record),
            record.x,
            record.y,
            record.width,
            record.height
        );
    }
    println!("{}", store.summary());

    log::info!("Occupancy: {}", store.summary());
    log::info!("Annotated image: {out_path:?}");
    log::info!("Detection records: {records_path:?}");

    Ok(())
}

/// Either read the user's image or synthesize the demo scene. The demo
/// scene is written out next to the other artifacts.
fn acquire_image(args: &Args) -> anyhow::Result<(RgbaImage, PathBuf)> {
    if args.demo {
        log::info!(
            "Generating {}x{} demo scene",
            scene::SCENE_WIDTH,
            scene::SCENE_HEIGHT
        );
        let image = scene::demo_scene();
        let path = PathBuf::from("demo.png");
        image
            .save(&path)
            .with_context(|| format!("Failed to save demo scene to {path:?}"))?;
        Ok((image, path))
    } else {
        let path = args
            .input
            .clone()
            .context("pass an input image path or --demo")?;
        let image = load_base_image(&path)?;
        Ok((image, path))
    }
}
