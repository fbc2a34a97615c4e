// File: crates/demo/src/main.rs
// Summary: Demo renders a 2x2 quadrant chart with HBR styling; points optionally loaded from CSV.
// Usage: hbr-style-demo [OUT.png] [PRESET] [POINTS.csv]

use anyhow::{Context, Result};
use hbr_style::{
    clean_text_box, figure_size, palette, set_figure_aesthetics, subplots, Annotation, RcParams,
    RenderOptions, STANDARD_FIGURE_SIZES,
};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// A labelled point placed on the quadrant chart.
struct Point {
    label: String,
    x: f64,
    y: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let out = PathBuf::from(args.next().unwrap_or_else(|| "target/out/hbr_quadrants.png".to_string()));
    let preset = args.next().unwrap_or_else(|| "square_medium".to_string());
    let points = match args.next() {
        Some(raw) => {
            let path = Path::new(&raw);
            load_points_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_points(),
    };

    let size = figure_size(&preset).with_context(|| {
        let known = STANDARD_FIGURE_SIZES.iter().map(|(n, _)| *n).collect::<Vec<_>>().join(", ");
        format!("known presets: {known}")
    })?;
    info!("preset {preset} -> {}x{} in, {} points", size.width, size.height, points.len());

    let mut rc = RcParams::default();
    hbr_style::apply_hbr_style(&mut rc);

    let (mut fig, mut ax) = subplots(size);
    ax.set_xlim(0.0, 10.0);
    ax.set_ylim(0.0, 10.0);
    ax.set_xlabel("Relative market share");
    ax.set_ylabel("Market growth");
    ax.show_ticks = false;

    // quadrants, counter-clockwise from top-right
    ax.add_patch(5.0, 5.0, 10.0, 10.0, palette::QUADRANT1);
    ax.add_patch(0.0, 5.0, 5.0, 10.0, palette::QUADRANT2);
    ax.add_patch(0.0, 0.0, 5.0, 5.0, palette::QUADRANT3);
    ax.add_patch(5.0, 0.0, 10.0, 5.0, palette::QUADRANT4);

    for p in &points {
        if !(0.0..=10.0).contains(&p.x) || !(0.0..=10.0).contains(&p.y) {
            warn!("point '{}' at ({}, {}) lies outside the chart", p.label, p.x, p.y);
        }
        ax.annotate(Annotation {
            text: p.label.clone(),
            x: p.x,
            y: p.y,
            size: 11.0,
            color: palette::TEXT.to_string(),
            bbox: Some(clean_text_box(Some(palette::ACCENT_BLUE))),
        });
    }

    set_figure_aesthetics(&mut fig, &mut ax, Some("Growth-share matrix"), Some("Business units by share and growth"));

    fig.render_to_png(&ax, &rc, &RenderOptions::default(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn sample_points() -> Vec<Point> {
    [("Stars", 7.5, 7.5), ("Question marks", 2.5, 7.5), ("Dogs", 2.5, 2.5), ("Cash cows", 7.5, 2.5)]
        .into_iter()
        .map(|(label, x, y)| Point { label: label.to_string(), x, y })
        .collect()
}

/// Load `label,x,y` rows; header names are matched case-insensitively.
fn load_points_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name"]).context("missing label column")?;
    let i_x = idx(&["x", "share"]).context("missing x column")?;
    let i_y = idx(&["y", "growth"]).context("missing y column")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (rec.get(i_label), num(i_x), num(i_y)) {
            (Some(label), Some(x), Some(y)) => out.push(Point { label: label.trim().to_string(), x, y }),
            _ => warn!("skipping malformed row {}", row + 1),
        }
    }
    if out.is_empty() {
        anyhow::bail!("no points loaded from {}", path.display());
    }
    Ok(out)
}
