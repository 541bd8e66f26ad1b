#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use depot_business::{AppConfig, Route, RouteState};
use depot_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (run with `RUST_LOG=debug` for command tracing).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    // Optional deep link: `depot-ui /admin/employees?action=create`
    let initial_route = std::env::args().nth(1).and_then(|path| {
        let route = Route::parse(&path);
        if route.is_none() {
            log::warn!("unknown route '{path}', starting at the login page");
        }
        route
    });

    eframe::run_native(
        "Depot Admin",
        native_options,
        Box::new(move |_cc| {
            let mut state = State::new(AppConfig::from_env());
            if let Some(route) = initial_route {
                state.ctx.update::<RouteState>(|r| r.current = route);
            }
            Ok(Box::new(depot_ui::DepotApp::new(state)))
        }),
    )
}
