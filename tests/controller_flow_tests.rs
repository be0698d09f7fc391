use glam::Vec2;
use grass_blade_modeler::core::blade::MIN_SEPARATION;
use grass_blade_modeler::{
    AppCommand, AppController, AppIntent, AppState, DisplayLayer, GuideStep, Handle,
};

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_initial_curve_has_three_points_from_base_to_tip() {
    let state = AppState::new();
    let points = state.curve.spline_points();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0], state.curve.base());
    assert_eq!(points[2], state.curve.tip());
}

#[test]
fn test_resolution_change_rebuilds_with_fixed_endpoints() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let base = state.curve.base();
    let tip = state.curve.tip();

    send(
        &mut controller,
        &mut state,
        AppIntent::ResolutionChanged { resolution: 20 },
    );

    assert_eq!(state.curve.spline_points().len(), 22);
    assert_eq!(state.curve.outline_points().len(), 42);
    assert_eq!(state.curve.base(), base);
    assert_eq!(state.curve.tip(), tip);
    assert!(!state.guide.is_pending(GuideStep::Resolution));
}

#[test]
fn test_dragging_tip_onto_base_keeps_geometry_finite() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let base = state.curve.base();
    let tip = state.curve.tip();

    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: tip });
    assert_eq!(state.interaction.selected, Some(Handle::Tip));

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            pos: base,
            delta: base - tip,
        },
    );

    assert!(state.curve.base().distance(state.curve.tip()) >= MIN_SEPARATION * 0.99);
    assert!(state.curve.spline_points().iter().all(|p| p.is_finite()));
    assert!(state.curve.outline_points().iter().all(|p| p.is_finite()));
    assert_eq!(state.curve.spline_points()[0], state.curve.base());
}

#[test]
fn test_drag_sequence_logs_merged_commands_and_release_clears() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let apex = state.curve.apex();

    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: apex });
    for i in 1..=5 {
        let delta = Vec2::new(-2.0, 1.0);
        send(
            &mut controller,
            &mut state,
            AppIntent::PointerDragged {
                pos: apex + delta * i as f32,
                delta,
            },
        );
    }
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.interaction.selected, None);
    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 3);
    assert!(matches!(entries[0], AppCommand::SelectHandle { .. }));
    assert!(matches!(entries[1], AppCommand::DragHandle { .. }));
    assert_eq!(entries[2], AppCommand::ReleaseHandle);
}

#[test]
fn test_pointer_leaving_canvas_releases_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let tip = state.curve.tip();

    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: tip });
    send(&mut controller, &mut state, AppIntent::PointerLeft);

    assert_eq!(state.interaction.selected, None);

    // Weitere Drags ohne erneutes Greifen ändern nichts
    let before = state.curve.tip();
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            pos: tip + Vec2::new(10.0, 0.0),
            delta: Vec2::new(10.0, 0.0),
        },
    );
    assert_eq!(state.curve.tip(), before);
}

#[test]
fn test_press_on_empty_canvas_drags_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.curve.spline_points().to_vec();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(5.0, 5.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            pos: Vec2::new(50.0, 50.0),
            delta: Vec2::new(45.0, 45.0),
        },
    );

    assert_eq!(state.interaction.selected, None);
    assert_eq!(state.curve.spline_points(), before.as_slice());
}

#[test]
fn test_width_only_applies_after_modelling_started() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::WidthChanged { width: 35.0 });
    assert_eq!(state.curve.params().max_width, 20.0);

    send(&mut controller, &mut state, AppIntent::ModelRequested);
    assert_eq!(state.curve.params().max_width, 35.0);
    assert!(state.toolbar.modelling);
    assert!(!state.toolbar.shows_model_button());
    assert!(!state.display.construction);
    assert!(state.display.skeleton);
}

#[test]
fn test_guide_walks_through_modelling_flow() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.guide.current(), GuideStep::Resolution);

    send(&mut controller, &mut state, AppIntent::ResolutionChanged { resolution: 8 });
    assert_eq!(state.guide.current(), GuideStep::Model);

    send(&mut controller, &mut state, AppIntent::ModelRequested);
    assert_eq!(state.guide.current(), GuideStep::Width);

    send(&mut controller, &mut state, AppIntent::WidthChanged { width: 30.0 });
    assert_eq!(state.guide.current(), GuideStep::Fill);

    send(
        &mut controller,
        &mut state,
        AppIntent::DisplayToggled {
            layer: DisplayLayer::Fill,
            visible: true,
        },
    );
    assert_eq!(state.guide.current(), GuideStep::Color);

    send(&mut controller, &mut state, AppIntent::ColorChanged { seed: 55.0 });
    // Model hat das Skelett eingeblendet → kein eigener Skelett-Schritt mehr
    assert!(!state.guide.is_pending(GuideStep::Skeleton));
    assert_eq!(state.guide.current(), GuideStep::Done);

    send(
        &mut controller,
        &mut state,
        AppIntent::DisplayToggled {
            layer: DisplayLayer::Skeleton,
            visible: false,
        },
    );
    assert_eq!(state.guide.current(), GuideStep::Done);

    let scene = controller.build_render_scene(&state);
    assert!(scene.has_fill());
    assert_eq!(scene.fill_color, [28, 135, 7]);
    assert!(scene.skeleton.len() == 9 && !scene.display.skeleton);
}

#[test]
fn test_showing_skeleton_clears_skeleton_hint() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(state.guide.is_pending(GuideStep::Skeleton));

    // Einblenden erledigt den Hinweis
    send(
        &mut controller,
        &mut state,
        AppIntent::DisplayToggled {
            layer: DisplayLayer::Skeleton,
            visible: true,
        },
    );
    assert!(!state.guide.is_pending(GuideStep::Skeleton));

    let mut state = AppState::new();
    send(&mut controller, &mut state, AppIntent::ModelRequested);
    assert!(state.display.skeleton);
    assert!(!state.guide.is_pending(GuideStep::Skeleton));
}

#[test]
fn test_viewport_resize_fits_sketch() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            min: Vec2::new(150.0, 0.0),
            size: Vec2::new(800.0, 800.0),
        },
    );

    assert_eq!(state.view.camera.scale, 2.0);
    let screen = state.view.camera.sketch_to_screen(Vec2::new(400.0, 400.0));
    assert_eq!(screen, Vec2::new(950.0, 800.0));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
