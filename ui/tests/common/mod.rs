use chrono::Utc;
use depot_business::{DirectoryState, Page, RouteState};
use depot_states::Time;
use depot_ui::state::State;

/// Build a test `State` positioned on `page` with an injected directory.
pub fn state_at(page: Page, directory: DirectoryState) -> State {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = State::test(directory);
    state.ctx.state_mut::<Time>().set(Utc::now());
    state.ctx.update::<RouteState>(|route| route.goto(page));
    state
}
