fn main() {
    if let Err(err) = tracklist_to_cue::run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
