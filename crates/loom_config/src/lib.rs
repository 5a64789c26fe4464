pub mod assembler;
pub mod content;
pub mod loom_config;
pub mod loom_rc;
pub mod loom_rc_loader;
pub mod plugin;
pub mod theme;

pub use assembler::AssembleOptions;
pub use assembler::AssembledConfig;
pub use assembler::ConfigAssembler;
pub use assembler::Hint;
pub use assembler::Mode;
pub use loom_config::LoomConfig;
pub use plugin::PluginNode;
