pub mod config;
pub mod files;

pub use config::{init_config, load_config, AppConfig};
pub use files::{config_file, default_log_file, ensure_parent_dir};
