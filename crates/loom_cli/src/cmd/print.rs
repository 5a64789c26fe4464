use std::path::PathBuf;

use clap::Parser;
use loom_config::AssembleOptions;
use loom_config::ConfigAssembler;
use loom_config::Mode;

#[derive(Debug, Parser)]
pub struct PrintCommand {
  /// Pretty-print the emitted JSON
  #[arg(long)]
  pub pretty: bool,
  /// Directory to assemble from [default: current directory]
  #[arg(long)]
  pub project_root: Option<PathBuf>,
}

pub fn main(assembler: ConfigAssembler, mode: Mode, cmd: PrintCommand) -> anyhow::Result<()> {
  let assembled = assembler.assemble(AssembleOptions {
    mode,
    project_root: cmd.project_root,
  })?;

  for hint in &assembled.hints {
    println!("{hint}");
  }

  let json = if cmd.pretty {
    serde_json::to_string_pretty(&assembled.config)?
  } else {
    serde_json::to_string(&assembled.config)?
  };
  println!("{json}");

  Ok(())
}
