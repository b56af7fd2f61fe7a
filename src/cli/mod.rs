// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All work is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `init-config` — writes a default config for an architecture
//   2. `describe`    — builds the configured model and probes it
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DescribeArgs, InitConfigArgs};

#[derive(Parser, Debug)]
#[command(
    name = "emotion-id",
    version,
    about = "Build and inspect frame-level emotion classifiers (MLP, linear, GRU, WaveNet)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::InitConfig(args) => run_init_config(args),
            Commands::Describe(args)   => run_describe(args),
        }
    }
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    use crate::application::init_config_use_case::InitConfigUseCase;

    let out = args.out.clone();
    let config = InitConfigUseCase::new(args.into()).execute()?;
    println!("Wrote {} config to {}", config.kind(), out);
    Ok(())
}

fn run_describe(args: DescribeArgs) -> Result<()> {
    use crate::application::describe_use_case::DescribeUseCase;

    let summary = DescribeUseCase::new(args.config, args.batch_size, args.frames).execute()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::architecture::ArchitectureKind;

    #[test]
    fn test_parses_init_config() {
        let cli = Cli::try_parse_from([
            "emotion-id", "init-config", "--arch", "gru", "--input-dim", "13", "--num-layers", "3",
        ])
        .unwrap();

        match cli.command {
            Commands::InitConfig(args) => {
                assert_eq!(args.arch, ArchitectureKind::Recurrent);
                assert_eq!(args.input_dim, 13);
                assert_eq!(args.classes, 4);
                assert_eq!(args.num_layers, Some(3));
                assert_eq!(args.hidden_size, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_architecture() {
        let result = Cli::try_parse_from(["emotion-id", "init-config", "--arch", "lstm"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_defaults() {
        let cli = Cli::try_parse_from(["emotion-id", "describe", "--json"]).unwrap();
        match cli.command {
            Commands::Describe(args) => {
                assert_eq!(args.config, "model_config.json");
                assert_eq!(args.batch_size, 2);
                assert_eq!(args.frames, 100);
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_init_then_describe() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("linear.json").display().to_string();

        Cli::try_parse_from(["emotion-id", "init-config", "--arch", "linear", "--out", path.as_str()])
            .unwrap()
            .run()
            .unwrap();
        Cli::try_parse_from(["emotion-id", "describe", "--config", path.as_str(), "--frames", "8"])
            .unwrap()
            .run()
            .unwrap();
    }
}
