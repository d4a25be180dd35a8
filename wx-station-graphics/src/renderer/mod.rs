//! Dashboard rendering: layout planning and an `embedded-graphics` backend.

mod backend;
pub mod layout;
mod plan;
mod text;

pub use backend::{EgBackend, Palette};
pub use plan::{
    DrawCommand, MAX_COMMANDS, PlanInput, PlanText, RenderPlan, WAITING_NOTICE, build_plan,
    format_range, format_temperature,
};
pub use text::{MonoMetrics, TextMetrics, colon_anchor_x, font_for, split_index, split_lines};

use wx_station_common::RenderBackend;

/// Clears the backend, replays every command in order and flushes.
pub fn execute_plan<B: RenderBackend>(plan: &RenderPlan, backend: &mut B) -> Result<(), B::Error> {
    backend.clear()?;
    for command in plan.commands() {
        match command {
            DrawCommand::Text {
                text,
                origin,
                alignment,
                ink,
                font,
            } => backend.draw_text(text, *origin, *alignment, *ink, *font)?,
            DrawCommand::Glyph { glyph, origin } => backend.draw_glyph(*glyph, *origin)?,
        }
    }
    backend.flush()
}
