use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// GPX elevation profile viewer with per-segment grade coloring
pub struct Settings {
    /// Path to the GPX file to plot
    #[clap(value_hint = clap::ValueHint::FilePath)]
    pub gpx_file: PathBuf,
}
