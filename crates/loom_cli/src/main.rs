mod cmd;

use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use loom_config::ConfigAssembler;
use loom_config::Mode;
use loom_filesystem::os_file_system::OsFileSystem;
use loom_package_manager::NpmPackageManager;

#[derive(Debug, Subcommand)]
pub enum LoomCommandType {
  /// Assemble the configuration and print it as JSON
  Print(cmd::print::PrintCommand),
  /// Report the debug screens plugin activation decision
  Check(cmd::check::CheckCommand),
}

#[derive(Parser, Debug)]
pub struct LoomCommand {
  #[clap(subcommand)]
  pub command: LoomCommandType,
  /// [recognized values: "development" (also when unset), anything else disables the debug screens plugin]
  #[arg(long, env = "LOOM_ENV")]
  pub loom_env: Option<String>,
  /// [possible values: "error", "warn", "info", "debug", "trace"]
  #[arg(long = "rust-log", env = "RUST_LOG")]
  pub _rust_log: Option<String>,
}

fn main() -> anyhow::Result<()> {
  env_logger::init();

  let args = LoomCommand::parse();

  if args.loom_env.is_none() {
    log::debug!("LOOM_ENV is unset, defaulting to development mode");
  }
  let mode = Mode::parse(args.loom_env.as_deref());

  let assembler = ConfigAssembler::new(
    Arc::new(OsFileSystem),
    Arc::new(NpmPackageManager::default()),
  );

  match args.command {
    LoomCommandType::Print(cmd) => cmd::print::main(assembler, mode, cmd),
    LoomCommandType::Check(cmd) => cmd::check::main(assembler, mode, cmd),
  }
}
