use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;
pub const TASKBAR_HEIGHT: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    Terminal,
    Explorer,
    Code,
    Music,
    Browser,
}

impl AppId {
    pub fn title(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Explorer => "Files",
            Self::Code => "Code",
            Self::Music => "Music",
            Self::Browser => "Browser",
        }
    }

    pub fn icon_id(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Explorer => "folder",
            Self::Code => "code",
            Self::Music => "music",
            Self::Browser => "globe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// Partial geometry update merged into a window's rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeometryPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
}

impl GeometryPatch {
    pub fn position(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(w: i32, h: i32) -> Self {
        Self {
            w: Some(w),
            h: Some(h),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapSide {
    Left,
    Right,
}

/// Snap operation requested for a window. Preview intents only touch the
/// transient preview value; `Left`/`Right` commit geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapIntent {
    PreviewLeft,
    PreviewRight,
    Clear,
    Left,
    Right,
}

/// One open application window. At most one record exists per [`AppId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub rect: WindowRect,
    /// Stacking key; strictly ordered and unique across open windows.
    pub z: u32,
    pub minimized: bool,
    /// Geometry is suspended while set; the rect keeps the pre-maximize
    /// values untouched.
    pub maximized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    /// The single focused window, or `None` when all are minimized/closed.
    pub active: Option<AppId>,
    /// Transient drag-snap ghost; cleared on every drag end.
    pub snap_preview: Option<SnapSide>,
    pub viewport: Viewport,
    pub start_menu_open: bool,
}

impl DesktopState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            snap_preview: None,
            viewport,
            start_menu_open: false,
        }
    }

    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn window_mut(&mut self, app_id: AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.app_id == app_id)
    }

    pub fn max_z(&self) -> u32 {
        self.windows.iter().map(|w| w.z).max().unwrap_or(0)
    }

    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.active.and_then(|app_id| self.window(app_id))
    }
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Transient gesture state, scoped to a drag's lifetime and released on
/// pointer-up, pointer-cancel, and window removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}
