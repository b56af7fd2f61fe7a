// ============================================================
// Layer 3 — Architecture Kinds
// ============================================================
// The four classifier families this crate can build.
// Plain enum so the CLI and the config files can name an
// architecture without pulling in any Burn types.

use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchitectureKind {
    /// Normalisation + stacked fully connected layers
    Mlp,
    /// Normalisation + one fully connected layer
    Linear,
    /// Normalisation + stacked GRUs with carried hidden state
    Recurrent,
    /// Normalisation + dilated residual convolution stack
    #[serde(rename = "wavenet")]
    WaveNet,
}

impl ArchitectureKind {
    pub const ALL: [ArchitectureKind; 4] = [
        ArchitectureKind::Mlp,
        ArchitectureKind::Linear,
        ArchitectureKind::Recurrent,
        ArchitectureKind::WaveNet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mlp       => "mlp",
            Self::Linear    => "linear",
            Self::Recurrent => "recurrent",
            Self::WaveNet   => "wavenet",
        }
    }
}

impl fmt::Display for ArchitectureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArchitectureKind {
    type Err = String;

    /// Case-insensitive; `gru` and `wave_net` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mlp"                  => Ok(Self::Mlp),
            "linear"               => Ok(Self::Linear),
            "recurrent" | "gru"    => Ok(Self::Recurrent),
            "wavenet" | "wave_net" => Ok(Self::WaveNet),
            other => Err(format!(
                "unknown architecture '{other}' (expected one of: mlp, linear, recurrent, wavenet)"
            )),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for kind in ArchitectureKind::ALL {
            assert_eq!(kind.name().parse::<ArchitectureKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serialised_name_matches_display() {
        for kind in ArchitectureKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.name(), "{kind:?}");

            let back: ArchitectureKind = serde_json::from_value(json).unwrap();
            assert_eq!(back, kind);
        }
        assert_eq!(serde_json::to_value(ArchitectureKind::WaveNet).unwrap(), "wavenet");
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!("GRU".parse::<ArchitectureKind>().unwrap(), ArchitectureKind::Recurrent);
        assert_eq!(" WaveNet ".parse::<ArchitectureKind>().unwrap(), ArchitectureKind::WaveNet);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "transformer".parse::<ArchitectureKind>().unwrap_err();
        assert!(err.contains("transformer"));
    }
}
