use crate::types::Track;

/// Renders every track as a CUE TRACK block, numbered from zero in input
/// order. Each block depends only on its own index and track, so the
/// iterator can be re-created from the same slice at will.
pub(crate) fn render_blocks(tracks: &[Track]) -> impl Iterator<Item = String> + '_ {
    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| render_block(index, track))
}

/// One TRACK block, without a trailing newline. The PERFORMER line is left
/// out when the performer string is empty.
pub(crate) fn render_block(index: usize, track: &Track) -> String {
    let total_seconds = track.offset.total_seconds();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    let mut block = format!("  TRACK {:02} AUDIO\n    TITLE {}\n", index, track.name);
    if !track.performer.is_empty() {
        block.push_str(&format!("    PERFORMER {}\n", track.performer));
    }
    block.push_str(&format!("    INDEX 01 {:02}:{:02}:00", minutes, seconds));
    block
}
