//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Steuerpunkte ===
            AppCommand::SelectHandle { pos } => handlers::interaction::select(state, pos),
            AppCommand::DragHandle { pos, delta } => handlers::interaction::drag(state, pos, delta),
            AppCommand::ReleaseHandle => handlers::interaction::release(state),

            // === Regler & Modellierung ===
            AppCommand::SetResolution { resolution } => {
                handlers::params::set_resolution(state, resolution)
            }
            AppCommand::SetWidth { width } => handlers::params::set_width(state, width),
            AppCommand::SetColorSeed { seed } => handlers::params::set_color_seed(state, seed),
            AppCommand::StartModelling => handlers::params::start_modelling(state),

            // === Anzeige & Viewport ===
            AppCommand::SetDisplayLayer { layer, visible } => {
                handlers::display::set_layer(state, layer, visible)
            }
            AppCommand::SetViewport { min, size } => handlers::view::set_viewport(state, min, size),

            // === Anwendung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
