//! Mapping von UI-Intents auf mutierende App-Commands.


use super::{AppCommand, AppIntent, AppState};
use crate::core::blade::{MAX_RESOLUTION, MAX_WIDTH};
use crate::shared::options::MAX_COLOR_SEED;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Reglerwerte werden hier auf ihren Bereich geclampt; unveränderte Werte
/// erzeugen keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::SelectHandle { pos }],
        AppIntent::PointerDragged { pos, delta } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::DragHandle { pos, delta }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased | AppIntent::PointerLeft => {
            if state.interaction.is_dragging() {
                vec![AppCommand::ReleaseHandle]
            } else {
                vec![]
            }
        }
        AppIntent::ResolutionChanged { resolution } => {
            let resolution = resolution.min(MAX_RESOLUTION);
            if resolution == state.params.resolution {
                vec![]
            } else {
                vec![AppCommand::SetResolution { resolution }]
            }
        }
        AppIntent::WidthChanged { width } => {
            let width = clamp_or_zero(width, MAX_WIDTH);
            if width == state.params.width {
                vec![]
            } else {
                vec![AppCommand::SetWidth { width }]
            }
        }
        AppIntent::ColorChanged { seed } => {
            let seed = clamp_or_zero(seed, MAX_COLOR_SEED);
            if seed == state.params.color_seed {
                vec![]
            } else {
                vec![AppCommand::SetColorSeed { seed }]
            }
        }
        AppIntent::DisplayToggled { layer, visible } => {
            vec![AppCommand::SetDisplayLayer { layer, visible }]
        }
        AppIntent::ModelRequested => {
            if state.toolbar.modelling {
                vec![]
            } else {
                vec![AppCommand::StartModelling]
            }
        }
        AppIntent::ViewportResized { min, size } => {
            if min == state.view.viewport_min && size == state.view.viewport_size {
                vec![]
            } else {
                vec![AppCommand::SetViewport { min, size }]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

fn clamp_or_zero(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}
