use crate::time::parse_time;
use crate::types::{RowDiagnostic, RowError, SequenceOptions, TimingMode, Track};

/// Splitting tools need one track past the last real one to know where the
/// last real track ends.
pub(crate) const DUMMY_TRACK_NAME: &str = "Dummy track";

/// Turns raw tab-split rows into an ordered track sequence.
///
/// Rows are processed in input order. Rows with too few fields or an
/// unparseable time are skipped and recorded as diagnostics (1-based line
/// numbers); the remaining rows still convert. When `include_dummy` is set a
/// terminal dummy track is appended after all rows.
pub(crate) fn sequence_tracks(
    rows: impl IntoIterator<Item = Vec<String>>,
    options: &SequenceOptions,
) -> (Vec<Track>, Vec<RowDiagnostic>) {
    let required = options
        .name_index
        .max(options.time_index)
        .max(options.performer_index.unwrap_or(0))
        + 1;

    let mut tracks = Vec::new();
    let mut diagnostics = Vec::new();
    let mut accumulated = options.start_offset;

    for (index, row) in rows.into_iter().enumerate() {
        let line = index + 1;
        if row.len() < required {
            diagnostics.push(RowDiagnostic {
                line,
                error: RowError::IncompleteRow {
                    fields: row.len(),
                    required,
                },
            });
            continue;
        }

        let duration = match parse_time(&row[options.time_index]) {
            Ok(duration) => duration,
            Err(error) => {
                diagnostics.push(RowDiagnostic { line, error });
                continue;
            }
        };

        let name = row[options.name_index].clone();
        let performer = match options.performer_index {
            Some(index) => row[index].clone(),
            None => options.default_performer.clone(),
        };

        let offset = match options.mode {
            TimingMode::Cumulative => accumulated,
            TimingMode::Timestamp => duration,
        };
        accumulated += duration;

        tracks.push(Track {
            offset,
            name,
            performer,
        });
    }

    if options.include_dummy {
        let offset = match options.mode {
            TimingMode::Cumulative => accumulated,
            TimingMode::Timestamp => options.end_offset,
        };
        tracks.push(Track {
            offset,
            name: DUMMY_TRACK_NAME.to_string(),
            performer: options.default_performer.clone(),
        });
    }

    (tracks, diagnostics)
}
