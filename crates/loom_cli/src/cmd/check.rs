use std::path::PathBuf;

use clap::Parser;
use loom_config::AssembleOptions;
use loom_config::ConfigAssembler;
use loom_config::Mode;

#[derive(Debug, Parser)]
pub struct CheckCommand {
  /// Directory to assemble from [default: current directory]
  #[arg(long)]
  pub project_root: Option<PathBuf>,
}

pub fn main(assembler: ConfigAssembler, mode: Mode, cmd: CheckCommand) -> anyhow::Result<()> {
  let assembled = assembler.assemble(AssembleOptions {
    mode,
    project_root: cmd.project_root,
  })?;

  for hint in &assembled.hints {
    println!("{hint}");
  }

  for plugin in &assembled.config.plugins {
    println!(
      "{} enabled via {}",
      plugin.package_name,
      plugin.resolve_from.display()
    );
  }

  Ok(())
}
