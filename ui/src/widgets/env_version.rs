use depot_business::version_info;
use egui::{Color32, Response, Ui};

/// Displays the build environment and version, `env:info`.
pub fn env_version(ui: &mut Ui) -> Response {
    let display_text = version_info::format_env_version();
    let (env_name, _) = version_info::env_version_info();

    let color = match env_name {
        "stable" => Color32::GREEN,
        "dev" => Color32::from_rgb(200, 200, 200),
        _ => Color32::WHITE,
    };

    ui.colored_label(color, display_text)
}

#[cfg(test)]
mod env_version_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn displays_env_info_format() {
        let harness = Harness::new_ui(|ui| {
            super::env_version(ui);
        });

        let found = harness.query_by_label_contains(":");
        assert!(
            found.is_some(),
            "env_version widget should display format like 'env:info'"
        );
    }
}
