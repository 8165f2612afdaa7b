use clap::ValueEnum;
use std::fmt;
use std::ops::{Add, AddAssign};

/// Whole seconds into the disc. CUE INDEX lines have frame resolution, but
/// track lists only carry seconds, so the frame field is always written 00.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Duration {
    secs: u64,
}

impl Duration {
    pub(crate) fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    pub(crate) fn total_seconds(self) -> u64 {
        self.secs
    }
}

// Offsets saturate at u64::MAX rather than wrap.
impl Add for Duration {
    type Output = Duration;

    fn add(self, other: Duration) -> Duration {
        Duration {
            secs: self.secs.saturating_add(other.secs),
        }
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, other: Duration) {
        self.secs = self.secs.saturating_add(other.secs);
    }
}

/// What the time column of the track list means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TimingMode {
    /// Each time is the track's own length; start offsets accumulate.
    Cumulative,
    /// Each time is already the track's absolute start position.
    Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) offset: Duration,
    pub(crate) name: String,
    pub(crate) performer: String,
}

pub(crate) struct SequenceOptions {
    pub(crate) name_index: usize,
    pub(crate) time_index: usize,
    pub(crate) performer_index: Option<usize>,
    pub(crate) default_performer: String,
    pub(crate) mode: TimingMode,
    pub(crate) start_offset: Duration,
    pub(crate) end_offset: Duration,
    pub(crate) include_dummy: bool,
}

/// Why a row was skipped. A bad row never aborts the conversion; each one is
/// collected with its line number so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RowError {
    IncompleteRow { fields: usize, required: usize },
    MalformedTime { text: String },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::IncompleteRow { fields, required } => {
                write!(f, "not enough fields ({} of {} required)", fields, required)
            }
            RowError::MalformedTime { text } => {
                write!(f, "unparseable time {:?}", text)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowDiagnostic {
    pub(crate) line: usize,
    pub(crate) error: RowError,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}
