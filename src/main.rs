//! barshift main entrypoint.

use barshift::run;
use barshift::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
