//! sprite-preview - Command-line tool that renders the sprite atlas preview

use std::process::ExitCode;

use farm_sprites::cli;

fn main() -> ExitCode {
    cli::run()
}
