// File: crates/style-core/src/ticks.rs
// Summary: Evenly spaced tick positions and compact tick labels.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Most decimals a tick label will carry.
const MAX_DECIMALS: i32 = 6;

/// Fewest decimals at which `step` is a whole number of units, capped at `MAX_DECIMALS`.
fn tick_decimals(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (0..=MAX_DECIMALS)
        .find(|&d| {
            let scaled = step * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(MAX_DECIMALS) as usize
}

/// Shortest label that still distinguishes ticks spaced `step` apart.
/// Trailing zeros are dropped, so a 0.25 step labels as 0, 0.25, 0.5, 0.75, 1.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = tick_decimals(step);
    let s = format!("{value:.decimals$}");
    let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s.as_str() };
    // avoid "-0"
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
