pub mod config_hot_reload;
pub mod game;
pub mod stage;
