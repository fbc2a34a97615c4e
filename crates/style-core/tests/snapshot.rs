// File: crates/style-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic styled figure (no text, no ticks) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use hbr_style::{palette, set_figure_aesthetics, subplots, FigureSize, RcParams, RenderOptions};

/// 400x300 figure; without ticks or text every edge lands on a whole pixel.
fn render_bytes() -> (Vec<u8>, [u32; 4]) {
    let (mut fig, mut ax) = subplots(FigureSize::new(4.0, 3.0));
    ax.set_xlim(0.0, 4.0);
    ax.set_ylim(0.0, 4.0);
    ax.show_ticks = false;
    ax.add_patch(0.0, 0.0, 2.0, 2.0, palette::LIGHT_BLUE);
    ax.add_patch(2.0, 2.0, 4.0, 4.0, palette::ACCENT_BLUE);
    set_figure_aesthetics(&mut fig, &mut ax, Some("Snapshot"), None);

    let rc = RcParams::hbr();
    let plot = fig.axes_rect(&ax, &rc);
    let opts = RenderOptions { draw_text: false };
    let bytes = fig.render_to_png_bytes(&ax, &rc, &opts).expect("render bytes");
    let ltrb = [plot.left, plot.top, plot.right, plot.bottom].map(|v| v.round() as u32);
    (bytes, ltrb)
}

#[test]
fn styled_figure_regions() {
    let (bytes, [l, t, r, b]) = render_bytes();
    // 15px pad on each side; title band keeps the top 4% (12px) clear
    assert_eq!([l, t, r, b], [15, 27, 385, 285]);

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (400, 300));
    let (mx, my) = ((l + r) / 2, (t + b) / 2);
    assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(l + 4, b - 4).0, [0xe6, 0xf1, 0xf5, 255]);
    assert_eq!(img.get_pixel(r - 4, t + 4).0, [0x2e, 0x86, 0xc1, 255]);
    assert_eq!(img.get_pixel(l + 4, t + 4).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(mx - 1, my).0, [0xe6, 0xf1, 0xf5, 255]);
    assert_eq!(img.get_pixel(mx, my - 1).0, [0x2e, 0x86, 0xc1, 255]);
}

#[test]
fn golden_styled_figure() {
    let (bytes, _) = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("styled_figure.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
