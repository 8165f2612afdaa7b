use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn converts_generated_track_list_to_cue_sheet() {
    let dir = unique_test_dir("generated-tracklist-convert");
    fs::create_dir_all(&dir).expect("failed to create test directory");

    // Only the audio file's name matters; its contents are never read.
    fs::write(dir.join("album.mp3"), b"").expect("failed to write audio file");
    fs::write(
        dir.join("album.tsv"),
        "1.\tIntro\tx\t0:30\n2.\tSong\tx\t2:00\n",
    )
    .expect("failed to write track list");

    let output = Command::new(env!("CARGO_BIN_EXE_tracklist-to-cue"))
        .current_dir(&dir)
        .arg("--performer")
        .arg("Band")
        .arg("--title")
        .arg("Album")
        .arg("--audio-file")
        .arg("album.mp3")
        .arg("--output-file")
        .arg("album.cue")
        .arg("album.tsv")
        .output()
        .expect("failed to run tracklist-to-cue");

    assert!(
        output.status.success(),
        "convert command failed\nstatus: {:?}\nstdout:\n{}\nstderr:\n{}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let sheet = fs::read_to_string(dir.join("album.cue")).expect("failed to read cue sheet");
    let expected = "\
PERFORMER Band
TITLE Album
FILE \"album.mp3\" MP3
  TRACK 00 AUDIO
    TITLE Intro
    PERFORMER Band
    INDEX 01 00:00:00
  TRACK 01 AUDIO
    TITLE Song
    PERFORMER Band
    INDEX 01 00:30:00
  TRACK 02 AUDIO
    TITLE Dummy track
    PERFORMER Band
    INDEX 01 02:30:00
";
    assert_eq!(sheet, expected);

    fs::remove_dir_all(&dir).expect("failed to remove test directory");
}

#[test]
fn converts_timestamp_track_list_from_stdin() {
    let dir = unique_test_dir("timestamp-stdin-convert");
    fs::create_dir_all(&dir).expect("failed to create test directory");

    fs::write(dir.join("mix.wav"), b"").expect("failed to write audio file");

    let mut child = Command::new(env!("CARGO_BIN_EXE_tracklist-to-cue"))
        .current_dir(&dir)
        .arg("--performer")
        .arg("DJ")
        .arg("--mode")
        .arg("timestamp")
        .arg("--end-seconds")
        .arg("3600")
        .arg("--name-index")
        .arg("0")
        .arg("--time-index")
        .arg("1")
        .arg("--audio-file")
        .arg("mix.wav")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tracklist-to-cue");

    child
        .stdin
        .take()
        .expect("missing child stdin")
        .write_all(b"Opener\t0:00\nbroken row\nCloser\t59:30\n")
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to run tracklist-to-cue");
    assert!(
        output.status.success(),
        "convert command failed\nstatus: {:?}\nstderr:\n{}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let sheet = String::from_utf8_lossy(&output.stdout);
    let expected = "\
PERFORMER DJ
FILE \"mix.wav\" WAV
  TRACK 00 AUDIO
    TITLE Opener
    PERFORMER DJ
    INDEX 01 00:00:00
  TRACK 01 AUDIO
    TITLE Closer
    PERFORMER DJ
    INDEX 01 59:30:00
  TRACK 02 AUDIO
    TITLE Dummy track
    PERFORMER DJ
    INDEX 01 60:00:00
";
    assert_eq!(sheet, expected);

    // The malformed middle row is reported, not fatal.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr was:\n{}", stderr);

    fs::remove_dir_all(&dir).expect("failed to remove test directory");
}

fn unique_test_dir(label: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "tracklist-to-cue-{}-{}-{}",
        label,
        std::process::id(),
        stamp
    ))
}
