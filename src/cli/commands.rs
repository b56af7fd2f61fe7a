// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `init-config` and `describe`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::init_config_use_case::InitConfigRequest;
use crate::domain::architecture::ArchitectureKind;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default model config for one architecture
    InitConfig(InitConfigArgs),

    /// Build the model described by a config and probe it with random input
    Describe(DescribeArgs),
}

/// All arguments for the `init-config` command.
#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Architecture: mlp, linear, recurrent or wavenet
    #[arg(long)]
    pub arch: ArchitectureKind,

    /// Features per input frame (e.g. number of filterbank bins)
    #[arg(long, default_value_t = 40)]
    pub input_dim: usize,

    /// Number of emotion classes to score
    #[arg(long, default_value_t = 4)]
    pub classes: usize,

    /// Where to write the JSON config
    #[arg(long, default_value = "model_config.json")]
    pub out: String,

    /// Hidden width override (mlp, recurrent, wavenet)
    #[arg(long)]
    pub hidden_size: Option<usize>,

    /// Layer count override (mlp, recurrent)
    #[arg(long)]
    pub num_layers: Option<usize>,
}

/// Convert CLI args into the application-layer request.
/// The application layer never sees clap types.
impl From<InitConfigArgs> for InitConfigRequest {
    fn from(a: InitConfigArgs) -> Self {
        InitConfigRequest {
            architecture: a.arch,
            input_dim:    a.input_dim,
            classes:      a.classes,
            output_path:  a.out,
            hidden_size:  a.hidden_size,
            num_layers:   a.num_layers,
        }
    }
}

/// All arguments for the `describe` command
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// JSON config written by `init-config` (or by hand)
    #[arg(long, default_value = "model_config.json")]
    pub config: String,

    /// Sequences in the random probe batch
    #[arg(long, default_value_t = 2)]
    pub batch_size: usize,

    /// Frames per sequence in the probe batch
    #[arg(long, default_value_t = 100)]
    pub frames: usize,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
