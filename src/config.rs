use std::path::PathBuf;

use clap::Parser;

use crate::registry::ShapeKind;

const DEFAULT_LOG_FILTER: &str = "info,spotify_shapes=debug";

/// Validate captured Spotify Web API payloads against their typed shapes.
#[derive(Debug, Clone, Parser)]
#[command(name = "shape-check", version)]
pub struct Config {
    /// Shape every file is expected to match
    #[arg(value_enum)]
    pub shape: ShapeKind,

    /// JSON sample files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report invariant violations without failing
    #[arg(long, env = "SHAPE_CHECK_LENIENT")]
    pub lenient: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "SHAPE_CHECK_JSON_LOGS")]
    pub json_logs: bool,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, env = "SHAPE_CHECK_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}
