//! craftlog main entrypoint.

use craftlog::run;
use craftlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
