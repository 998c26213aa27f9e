//! Generated demo page content.

use crate::stage::DemoStage;

const TINTS: [&str; 8] = [
    "#FF7878", "#78FF78", "#7878FF", "#FFFF78", "#FF78FF", "#78FFFF", "#FFB478", "#B478FF",
];

/// Builds a generated page for `index` on the demo stage.
pub fn demo_page(stage: &mut DemoStage, index: usize) -> u32 {
    let tint = TINTS[index % TINTS.len()];
    stage.spawn(format!("Demo page {}", index + 1), tint)
}
