use clap::Parser;
use std::path::PathBuf;

use crate::types::{Duration, SequenceOptions, TimingMode};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Tab-separated track list; stdin when omitted.
    #[arg(value_name = "TRACK_LIST")]
    pub(crate) track_list: Option<PathBuf>,
    /// Column of the track name.
    #[arg(long, default_value_t = 1)]
    pub(crate) name_index: usize,
    /// Column of the track time.
    #[arg(long, default_value_t = 3)]
    pub(crate) time_index: usize,
    /// Column of a per-track performer; overrides --performer per row.
    #[arg(long)]
    pub(crate) performer_index: Option<usize>,
    /// Album performer, also the fallback for tracks without one.
    #[arg(long)]
    pub(crate) performer: String,
    /// Whether times are per-track lengths or absolute start positions.
    #[arg(long, value_enum, default_value_t = TimingMode::Cumulative)]
    pub(crate) mode: TimingMode,
    /// Start offset of the first track (cumulative mode).
    #[arg(long, default_value_t = 0)]
    pub(crate) start_seconds: u64,
    /// Offset of the dummy track (timestamp mode).
    #[arg(long, default_value_t = 0)]
    pub(crate) end_seconds: u64,
    /// Do not append the terminal dummy track.
    #[arg(long)]
    pub(crate) no_dummy: bool,
    /// Disc TITLE header line.
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// REM header attributes, e.g. --rem "GENRE Pop".
    #[arg(long, value_name = "ATTRIBUTE")]
    pub(crate) rem: Vec<String>,
    /// Audio file the sheet refers to; only its name feeds the FILE line.
    #[arg(long, value_name = "FILE")]
    pub(crate) audio_file: PathBuf,
    /// Destination; stdout when omitted.
    #[arg(long, value_name = "FILE")]
    pub(crate) output_file: Option<PathBuf>,
    /// Track list text encoding (autodetected when omitted).
    #[arg(long, value_name = "ENCODING")]
    pub(crate) encoding: Option<String>,
    /// Overwrite an existing output file without asking.
    #[arg(short = 'y', long)]
    pub(crate) yes: bool,
}

impl Args {
    pub(crate) fn sequence_options(&self) -> SequenceOptions {
        SequenceOptions {
            name_index: self.name_index,
            time_index: self.time_index,
            performer_index: self.performer_index,
            default_performer: self.performer.clone(),
            mode: self.mode,
            start_offset: Duration::from_secs(self.start_seconds),
            end_offset: Duration::from_secs(self.end_seconds),
            include_dummy: !self.no_dummy,
        }
    }
}
