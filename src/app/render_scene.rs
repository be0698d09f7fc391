//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::Handle;
use crate::shared::{fill_color_from_seed, HandleMarker, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let curve = &state.curve;

    let handles = Handle::ALL
        .iter()
        .map(|&handle| HandleMarker {
            handle,
            position: curve.handle_position(handle),
            selected: state.interaction.selected == Some(handle),
        })
        .collect();

    RenderScene {
        spline: curve.spline_points().to_vec(),
        outline_polygon: curve.outline_polygon(),
        skeleton: curve.skeleton_segments().collect(),
        construction: curve.construction_segments().to_vec(),
        hull: curve.control_hull(),
        handles,
        display: state.display,
        fill_color: fill_color_from_seed(state.params.color_seed),
        camera: state.view.camera,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::Handle;

    #[test]
    fn build_exposes_curve_sequences() {
        let state = AppState::new();
        let scene = build(&state);

        let n = state.curve.params().resolution as usize;
        assert_eq!(scene.spline.len(), n + 2);
        assert_eq!(scene.skeleton.len(), n + 1);
        assert_eq!(scene.construction.len(), n + 1);
        assert_eq!(scene.outline_polygon.len(), 2 * (n + 1) + 1);
        assert_eq!(scene.fill_color, [40, 160, 10]);
    }

    #[test]
    fn build_marks_selected_handle() {
        let mut state = AppState::new();
        state.interaction.selected = Some(Handle::Curvature);

        let scene = build(&state);

        assert_eq!(scene.handles.len(), 2);
        assert!(!scene.handles[0].selected);
        assert!(scene.handles[1].selected);
        assert_eq!(scene.handles[1].position, state.curve.apex());
    }

    #[test]
    fn fill_requires_visible_flag() {
        let mut state = AppState::new();
        assert!(!build(&state).has_fill());

        state.display.fill = true;
        assert!(build(&state).has_fill());
    }
}
