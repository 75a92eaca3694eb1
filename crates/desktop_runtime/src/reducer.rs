//! Window-manager actions and the transition function for desktop state.

use serde::{Deserialize, Serialize};

use crate::model::{
    AppId, DesktopState, DragSession, GeometryPatch, InteractionState, PointerPosition,
    ResizeSession, SnapIntent, SnapSide, Viewport, WindowRecord,
};
use crate::window_manager::{
    cascade_rect, classify_pointer, half_viewport_rect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    SNAP_COMMIT_THRESHOLD, SNAP_PREVIEW_THRESHOLD,
};

/// Actions accepted by [`reduce_desktop`].
///
/// Every operation is a silent no-op when it names an app without an open
/// window; maximized windows ignore drag, resize, and snap, and minimized
/// windows ignore snap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesktopAction {
    /// Open a window for `app_id`, or focus the existing one.
    Launch { app_id: AppId },
    /// Close a window; with `minimize` set, keep the record and hide it.
    Close { app_id: AppId, minimize: bool },
    /// Raise and focus a window, clearing its minimized flag.
    Focus { app_id: AppId },
    /// Merge geometry fields into a window's rect (sizes clamped to minima).
    Move { app_id: AppId, patch: GeometryPatch },
    /// Flip the maximized flag; the rect is left untouched either way.
    ToggleMaximize { app_id: AppId },
    /// Apply a snap intent (preview ghost or hard half-viewport placement).
    Snap { app_id: AppId, intent: SnapIntent },
    /// Begin a title-bar drag.
    BeginDrag {
        app_id: AppId,
        pointer: PointerPosition,
    },
    /// Intermediate drag pointer position; reclassifies the snap preview.
    UpdateDrag { pointer: PointerPosition },
    /// Release a drag: commit a snap near an edge, otherwise apply the total
    /// pointer displacement to the start rect.
    EndDrag { pointer: PointerPosition },
    /// Begin a corner-handle resize.
    BeginResize {
        app_id: AppId,
        pointer: PointerPosition,
    },
    /// Intermediate resize pointer position.
    UpdateResize { pointer: PointerPosition },
    /// Release the active resize.
    EndResize,
    /// Taskbar "show desktop": minimize every open window.
    MinimizeAll,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Record a new display surface size.
    SetViewport { viewport: Viewport },
}

/// Applies a [`DesktopAction`] to the window collection and gesture state.
///
/// This is the authoritative transition engine for window geometry, stacking,
/// and focus; the shell dispatches every pointer and taskbar gesture through
/// it.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) {
    match action {
        DesktopAction::Launch { app_id } => {
            if state.window(app_id).is_some() {
                focus_app(state, app_id);
            } else {
                let rect = cascade_rect(state.viewport, state.windows.len());
                let z = state.max_z() + 1;
                state.windows.push(WindowRecord {
                    app_id,
                    rect,
                    z,
                    minimized: false,
                    maximized: false,
                });
                state.active = Some(app_id);
            }
            state.start_menu_open = false;
        }
        DesktopAction::Close { app_id, minimize } => {
            if minimize {
                let Some(window) = state.window_mut(app_id) else {
                    return;
                };
                window.minimized = true;
                if state.active == Some(app_id) {
                    state.active = None;
                }
            } else {
                let before = state.windows.len();
                state.windows.retain(|w| w.app_id != app_id);
                if state.windows.len() == before {
                    return;
                }
                // No automatic refocus to the next-highest window.
                if state.active == Some(app_id) {
                    state.active = None;
                }
                release_gestures_for(state, interaction, app_id);
            }
        }
        DesktopAction::Focus { app_id } => {
            focus_app(state, app_id);
        }
        DesktopAction::Move { app_id, patch } => {
            let Some(window) = state.window_mut(app_id) else {
                return;
            };
            if window.maximized {
                return;
            }
            if let Some(x) = patch.x {
                window.rect.x = x;
            }
            if let Some(y) = patch.y {
                window.rect.y = y;
            }
            if let Some(w) = patch.w {
                window.rect.w = w.max(MIN_WINDOW_WIDTH);
            }
            if let Some(h) = patch.h {
                window.rect.h = h.max(MIN_WINDOW_HEIGHT);
            }
        }
        DesktopAction::ToggleMaximize { app_id } => {
            if let Some(window) = state.window_mut(app_id) {
                window.maximized = !window.maximized;
            }
        }
        DesktopAction::Snap { app_id, intent } => {
            apply_snap(state, app_id, intent);
        }
        DesktopAction::BeginDrag { app_id, pointer } => {
            let Some(window) = state.window(app_id) else {
                return;
            };
            if window.minimized || window.maximized {
                return;
            }
            let rect_start = window.rect;
            focus_app(state, app_id);
            interaction.dragging = Some(DragSession {
                app_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateDrag { pointer } => {
            let Some(session) = interaction.dragging else {
                return;
            };
            if state.window(session.app_id).is_none() {
                interaction.dragging = None;
                state.snap_preview = None;
                return;
            }
            state.snap_preview =
                classify_pointer(pointer.x, state.viewport, SNAP_PREVIEW_THRESHOLD);
        }
        DesktopAction::EndDrag { pointer } => {
            let Some(session) = interaction.dragging.take() else {
                return;
            };
            state.snap_preview = None;
            let viewport = state.viewport;
            let Some(window) = state.window_mut(session.app_id) else {
                return;
            };
            if window.maximized {
                return;
            }
            match classify_pointer(pointer.x, viewport, SNAP_COMMIT_THRESHOLD) {
                Some(side) => {
                    window.rect = half_viewport_rect(viewport, side);
                }
                None => {
                    let dx = pointer.x - session.pointer_start.x;
                    let dy = pointer.y - session.pointer_start.y;
                    window.rect = session.rect_start.offset(dx, dy);
                }
            }
        }
        DesktopAction::BeginResize { app_id, pointer } => {
            let Some(window) = state.window(app_id) else {
                return;
            };
            if window.minimized || window.maximized {
                return;
            }
            let rect_start = window.rect;
            focus_app(state, app_id);
            interaction.resizing = Some(ResizeSession {
                app_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            let Some(session) = interaction.resizing else {
                return;
            };
            let Some(window) = state.window_mut(session.app_id) else {
                interaction.resizing = None;
                return;
            };
            if window.maximized {
                return;
            }
            let dx = pointer.x - session.pointer_start.x;
            let dy = pointer.y - session.pointer_start.y;
            window.rect.w = (session.rect_start.w + dx).max(MIN_WINDOW_WIDTH);
            window.rect.h = (session.rect_start.h + dy).max(MIN_WINDOW_HEIGHT);
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::MinimizeAll => {
            for window in &mut state.windows {
                window.minimized = true;
            }
            state.active = None;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SetViewport { viewport } => {
            state.viewport = viewport;
        }
    }
}

fn focus_app(state: &mut DesktopState, app_id: AppId) {
    if state.window(app_id).is_none() {
        return;
    }
    let z = state.max_z() + 1;
    if let Some(window) = state.window_mut(app_id) {
        window.z = z;
        window.minimized = false;
    }
    state.active = Some(app_id);
}

fn apply_snap(state: &mut DesktopState, app_id: AppId, intent: SnapIntent) {
    let preview = |state: &mut DesktopState, side: SnapSide| {
        let eligible = state
            .window(app_id)
            .map(|w| !w.maximized && !w.minimized)
            .unwrap_or(false);
        if eligible {
            state.snap_preview = Some(side);
        }
    };
    match intent {
        SnapIntent::PreviewLeft => preview(state, SnapSide::Left),
        SnapIntent::PreviewRight => preview(state, SnapSide::Right),
        SnapIntent::Clear => state.snap_preview = None,
        SnapIntent::Left | SnapIntent::Right => {
            state.snap_preview = None;
            let side = if intent == SnapIntent::Left {
                SnapSide::Left
            } else {
                SnapSide::Right
            };
            let viewport = state.viewport;
            let Some(window) = state.window_mut(app_id) else {
                return;
            };
            // Minimized windows have no on-screen geometry to snap.
            if window.maximized || window.minimized {
                return;
            }
            window.rect = half_viewport_rect(viewport, side);
        }
    }
}

fn release_gestures_for(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    app_id: AppId,
) {
    if interaction.dragging.map(|s| s.app_id) == Some(app_id) {
        interaction.dragging = None;
        state.snap_preview = None;
    }
    if interaction.resizing.map(|s| s.app_id) == Some(app_id) {
        interaction.resizing = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowRect, TASKBAR_HEIGHT};
    use crate::window_manager::CASCADE_STEP;

    fn harness() -> (DesktopState, InteractionState) {
        let state = DesktopState::new(Viewport {
            width: 1000,
            height: 700,
        });
        (state, InteractionState::default())
    }

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) {
        reduce_desktop(state, interaction, action);
    }

    fn launch(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) {
        dispatch(state, interaction, DesktopAction::Launch { app_id });
    }

    #[test]
    fn launch_twice_yields_a_single_focused_window() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        launch(&mut state, &mut interaction, AppId::Terminal);

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.active, Some(AppId::Terminal));
    }

    #[test]
    fn z_order_is_total_and_tracks_the_last_focus() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        launch(&mut state, &mut interaction, AppId::Explorer);
        launch(&mut state, &mut interaction, AppId::Music);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Focus {
                app_id: AppId::Terminal,
            },
        );

        let mut zs: Vec<u32> = state.windows.iter().map(|w| w.z).collect();
        zs.sort_unstable();
        zs.dedup();
        assert_eq!(zs.len(), state.windows.len(), "duplicate z values");

        let terminal_z = state.window(AppId::Terminal).expect("terminal").z;
        assert_eq!(terminal_z, state.max_z());
        assert_eq!(state.active, Some(AppId::Terminal));
    }

    #[test]
    fn launch_cascades_from_the_viewport_center() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        launch(&mut state, &mut interaction, AppId::Explorer);

        let first = state.window(AppId::Terminal).expect("terminal").rect;
        let second = state.window(AppId::Explorer).expect("explorer").rect;
        assert_eq!((first.w, first.h), (800, 500));
        assert_eq!(second.x, first.x + CASCADE_STEP);
        assert_eq!(second.y, first.y + CASCADE_STEP);
    }

    #[test]
    fn minimize_keeps_the_record_and_clears_focus() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Close {
                app_id: AppId::Terminal,
                minimize: true,
            },
        );

        let window = state.window(AppId::Terminal).expect("terminal");
        assert!(window.minimized);
        assert_eq!(state.active, None);
    }

    #[test]
    fn closing_the_focused_window_does_not_refocus_the_next_one() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        launch(&mut state, &mut interaction, AppId::Explorer);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Close {
                app_id: AppId::Explorer,
                minimize: false,
            },
        );

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.active, None);
    }

    #[test]
    fn resize_patches_clamp_to_the_minimum_dimensions() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Move {
                app_id: AppId::Terminal,
                patch: GeometryPatch::size(10, -50),
            },
        );

        let rect = state.window(AppId::Terminal).expect("terminal").rect;
        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.h, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn maximized_windows_ignore_move_and_snap() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        let before = state.window(AppId::Terminal).expect("terminal").rect;
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Terminal,
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Move {
                app_id: AppId::Terminal,
                patch: GeometryPatch::position(0, 0),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Snap {
                app_id: AppId::Terminal,
                intent: SnapIntent::Left,
            },
        );

        let window = state.window(AppId::Terminal).expect("terminal");
        assert!(window.maximized);
        assert_eq!(window.rect, before, "geometry suspended while maximized");

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Terminal,
            },
        );
        let window = state.window(AppId::Terminal).expect("terminal");
        assert!(!window.maximized);
        assert_eq!(window.rect, before, "pre-maximize geometry restored");
    }

    #[test]
    fn hard_snaps_place_exact_half_viewport_rects() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Snap {
                app_id: AppId::Terminal,
                intent: SnapIntent::Left,
            },
        );
        assert_eq!(
            state.window(AppId::Terminal).expect("terminal").rect,
            WindowRect {
                x: 0,
                y: 0,
                w: 500,
                h: 700 - TASKBAR_HEIGHT,
            }
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Snap {
                app_id: AppId::Terminal,
                intent: SnapIntent::Right,
            },
        );
        assert_eq!(state.window(AppId::Terminal).expect("terminal").rect.x, 500);
        assert_eq!(state.snap_preview, None);
    }

    #[test]
    fn preview_intents_touch_only_the_ghost() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        let before = state.window(AppId::Terminal).expect("terminal").rect;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Snap {
                app_id: AppId::Terminal,
                intent: SnapIntent::PreviewLeft,
            },
        );
        assert_eq!(state.snap_preview, Some(SnapSide::Left));
        assert_eq!(state.window(AppId::Terminal).expect("terminal").rect, before);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Snap {
                app_id: AppId::Terminal,
                intent: SnapIntent::PreviewRight,
            },
        );
        assert_eq!(state.snap_preview, Some(SnapSide::Right));
        assert_eq!(state.window(AppId::Terminal).expect("terminal").rect, before);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Snap {
                app_id: AppId::Terminal,
                intent: SnapIntent::Clear,
            },
        );
        assert_eq!(state.snap_preview, None);
        assert_eq!(state.window(AppId::Terminal).expect("terminal").rect, before);
    }

    #[test]
    fn minimized_windows_ignore_previews_and_hard_snaps() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        let before = state.window(AppId::Terminal).expect("terminal").rect;
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Close {
                app_id: AppId::Terminal,
                minimize: true,
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Snap {
                app_id: AppId::Terminal,
                intent: SnapIntent::PreviewLeft,
            },
        );
        assert_eq!(state.snap_preview, None);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Snap {
                app_id: AppId::Terminal,
                intent: SnapIntent::Left,
            },
        );
        let window = state.window(AppId::Terminal).expect("terminal");
        assert!(window.minimized);
        assert_eq!(window.rect, before);
    }

    #[test]
    fn drag_updates_preview_within_the_narrow_band_only() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 400, y: 100 },
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 10, y: 120 },
            },
        );
        assert_eq!(state.snap_preview, Some(SnapSide::Left));

        // 35 px is inside the commit band but outside the preview band.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 35, y: 120 },
            },
        );
        assert_eq!(state.snap_preview, None);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 992, y: 120 },
            },
        );
        assert_eq!(state.snap_preview, Some(SnapSide::Right));
    }

    #[test]
    fn drag_release_away_from_edges_applies_the_total_displacement() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        let start = state.window(AppId::Terminal).expect("terminal").rect;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 400, y: 100 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 500, y: 90 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::EndDrag {
                pointer: PointerPosition { x: 475, y: 160 },
            },
        );

        let rect = state.window(AppId::Terminal).expect("terminal").rect;
        assert_eq!(rect.x, start.x + 75);
        assert_eq!(rect.y, start.y + 60);
        assert_eq!(state.snap_preview, None);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn drag_release_near_an_edge_commits_the_snap() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 400, y: 100 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::EndDrag {
                pointer: PointerPosition { x: 960, y: 100 },
            },
        );

        let rect = state.window(AppId::Terminal).expect("terminal").rect;
        assert_eq!(rect.x, 500);
        assert_eq!(rect.w, 500);
    }

    #[test]
    fn corner_resize_grows_from_the_start_rect_and_clamps() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        let start = state.window(AppId::Terminal).expect("terminal").rect;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 900, y: 650 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 960, y: 600 },
            },
        );

        let rect = state.window(AppId::Terminal).expect("terminal").rect;
        assert_eq!(rect.w, start.w + 60);
        assert_eq!(rect.h, start.h - 50);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 200, y: 100 },
            },
        );
        let rect = state.window(AppId::Terminal).expect("terminal").rect;
        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.h, MIN_WINDOW_HEIGHT);

        dispatch(&mut state, &mut interaction, DesktopAction::EndResize);
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn closing_a_window_releases_its_active_gesture() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 400, y: 100 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 5, y: 100 },
            },
        );
        assert_eq!(state.snap_preview, Some(SnapSide::Left));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Close {
                app_id: AppId::Terminal,
                minimize: false,
            },
        );
        assert_eq!(interaction.dragging, None);
        assert_eq!(state.snap_preview, None);
    }

    #[test]
    fn operations_on_unknown_windows_are_silent_noops() {
        let (mut state, mut interaction) = harness();
        let before = state.clone();

        for action in [
            DesktopAction::Focus {
                app_id: AppId::Browser,
            },
            DesktopAction::Close {
                app_id: AppId::Browser,
                minimize: false,
            },
            DesktopAction::Move {
                app_id: AppId::Browser,
                patch: GeometryPatch::position(0, 0),
            },
            DesktopAction::Snap {
                app_id: AppId::Browser,
                intent: SnapIntent::Left,
            },
            DesktopAction::BeginDrag {
                app_id: AppId::Browser,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        ] {
            dispatch(&mut state, &mut interaction, action);
        }

        assert_eq!(state, before);
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn minimize_all_hides_everything_and_drops_focus() {
        let (mut state, mut interaction) = harness();

        launch(&mut state, &mut interaction, AppId::Terminal);
        launch(&mut state, &mut interaction, AppId::Explorer);
        dispatch(&mut state, &mut interaction, DesktopAction::MinimizeAll);

        assert!(state.windows.iter().all(|w| w.minimized));
        assert_eq!(state.active, None);
        assert_eq!(state.active_window(), None);
    }
}
