//! SVG bar chart of measurement counts.

use std::fmt::Write;

use unravel_hal::Counts;

use super::escape;

const BAR_WIDTH: usize = 36;
const BAR_GAP: usize = 12;
const PLOT_HEIGHT: f64 = 220.0;
const MARGIN_TOP: usize = 24;
const MARGIN_BOTTOM: usize = 64;

/// Render `counts` as an inline SVG histogram, one bar per outcome in
/// bit-string order. Empty counts render as an empty string.
pub fn histogram(counts: &Counts) -> String {
    let bars = counts.sorted();
    let Some(max) = bars.iter().map(|(_, c)| *c).max().filter(|m| *m > 0) else {
        return String::new();
    };

    let width = bars.len() * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
    let height = MARGIN_TOP + PLOT_HEIGHT as usize + MARGIN_BOTTOM;
    let baseline = MARGIN_TOP as f64 + PLOT_HEIGHT;

    let mut svg = format!(
        "<svg class=\"histogram\" xmlns=\"http://www.w3.org/2000/svg\" \
         viewBox=\"0 0 {width} {height}\" width=\"{width}\" height=\"{height}\" \
         role=\"img\" aria-label=\"Measurement histogram\">"
    );
    let _ = write!(
        svg,
        "<line class=\"axis\" x1=\"0\" y1=\"{baseline}\" x2=\"{width}\" y2=\"{baseline}\"/>"
    );

    for (i, (bits, count)) in bars.iter().enumerate() {
        let x = BAR_GAP + i * (BAR_WIDTH + BAR_GAP);
        let h = PLOT_HEIGHT * (*count as f64) / (max as f64);
        let y = baseline - h;
        let center = x + BAR_WIDTH / 2;
        let label_y = baseline + 12.0;
        let bits = escape(bits);
        let _ = write!(
            svg,
            "<g><title>{bits}: {count}</title>\
             <rect class=\"bar\" x=\"{x}\" y=\"{y:.1}\" width=\"{BAR_WIDTH}\" height=\"{h:.1}\"/>\
             <text class=\"count\" x=\"{center}\" y=\"{:.1}\" text-anchor=\"middle\">{count}</text>\
             <text class=\"outcome\" x=\"{center}\" y=\"{label_y:.1}\" \
             transform=\"rotate(60 {center} {label_y:.1})\">{bits}</text></g>",
            y - 4.0
        );
    }

    svg.push_str("</svg>");
    svg
}
