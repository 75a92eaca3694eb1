use crate::model::AppId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub launcher_label: &'static str,
    pub desktop_icon_label: &'static str,
    pub show_in_launcher: bool,
    pub show_on_desktop: bool,
}

const APP_REGISTRY: [AppDescriptor; 5] = [
    AppDescriptor {
        app_id: AppId::Terminal,
        launcher_label: "Terminal",
        desktop_icon_label: "Terminal",
        show_in_launcher: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Explorer,
        launcher_label: "Files",
        desktop_icon_label: "Files",
        show_in_launcher: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Code,
        launcher_label: "Code",
        desktop_icon_label: "Code",
        show_in_launcher: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Music,
        launcher_label: "Music",
        desktop_icon_label: "Music",
        show_in_launcher: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Browser,
        launcher_label: "Browser",
        desktop_icon_label: "Browser",
        show_in_launcher: true,
        show_on_desktop: true,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_launcher)
        .collect()
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn app_descriptor(app_id: AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == app_id)
}
