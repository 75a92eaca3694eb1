//! Shared window-manager geometry helpers used by the desktop reducer.

use crate::model::{SnapSide, Viewport, WindowRect, TASKBAR_HEIGHT};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Cascade offset between successive launch positions.
pub const CASCADE_STEP: i32 = 30;
/// Pointer threshold (in px) for showing a snap preview during a drag.
pub const SNAP_PREVIEW_THRESHOLD: i32 = 20;
/// Pointer threshold (in px) for committing a snap on drag release.
pub const SNAP_COMMIT_THRESHOLD: i32 = 50;

const LAUNCH_MARGIN: i32 = 20;

/// Spawn rect for the `open_count`-th launch: default size, offset from the
/// viewport center, clamped so the window never starts off-screen.
pub fn cascade_rect(viewport: Viewport, open_count: usize) -> WindowRect {
    use crate::model::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    let offset = open_count as i32 * CASCADE_STEP;
    let x = ((viewport.width - DEFAULT_WINDOW_WIDTH) / 2 + offset)
        .max(LAUNCH_MARGIN)
        .min(viewport.width - DEFAULT_WINDOW_WIDTH - LAUNCH_MARGIN);
    let y = ((viewport.height - DEFAULT_WINDOW_HEIGHT) / 2 + offset)
        .max(LAUNCH_MARGIN)
        .min(viewport.height - DEFAULT_WINDOW_HEIGHT - LAUNCH_MARGIN);
    WindowRect {
        x,
        y,
        w: DEFAULT_WINDOW_WIDTH,
        h: DEFAULT_WINDOW_HEIGHT,
    }
}

/// Classifies a pointer x-coordinate against the viewport edges.
pub fn classify_pointer(x: i32, viewport: Viewport, threshold: i32) -> Option<SnapSide> {
    if x < threshold {
        Some(SnapSide::Left)
    } else if x > viewport.width - threshold {
        Some(SnapSide::Right)
    } else {
        None
    }
}

/// The exact half-viewport rect a committed snap places a window into. The
/// taskbar strip stays reserved.
pub fn half_viewport_rect(viewport: Viewport, side: SnapSide) -> WindowRect {
    let w = viewport.width / 2;
    WindowRect {
        x: match side {
            SnapSide::Left => 0,
            SnapSide::Right => w,
        },
        y: 0,
        w,
        h: viewport.height - TASKBAR_HEIGHT,
    }
}
