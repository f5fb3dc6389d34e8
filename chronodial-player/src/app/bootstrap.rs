use chronodial_config::PlayerConfig;
use iced::Task;

use crate::common::messages::DomainMessage;
use crate::state::State;

const DEFAULT_WINDOW_TITLE: &str = "Chronodial";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub player: PlayerConfig,
}

impl AppConfig {
    pub fn new(player: PlayerConfig) -> Self {
        Self { player }
    }

    /// Window title: the timeline title when there is one.
    pub fn window_title(&self) -> String {
        match self.player.title.as_deref() {
            Some(title) => format!("{title} - {DEFAULT_WINDOW_TITLE}"),
            None => DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let state = State::new(&config.player);
    log::info!(
        "[Bootstrap] {} periods from {}",
        state.period_count(),
        config.player.source
    );
    (state, Task::none())
}
