pub mod config;

pub use config::{AxisPair, DustConfig, GameConfig, PlayerConfig, StageConfig, WindowConfig};
