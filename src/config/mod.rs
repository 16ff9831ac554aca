pub mod cli;
pub mod settings;

pub use cli::ServiceArgs;
pub use settings::Settings;
