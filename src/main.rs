//! Input monitor: opens a window and logs what the legacy driver sees.

use std::path::Path;

use legacy_input::{options::Options, Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("Loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("Failed to load options '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
