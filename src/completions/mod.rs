//! Shell completion support for postdeck
//!
//! Completions are static: subcommands, flags, config subcommands and the
//! shells accepted by `postdeck completions`.

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate a static completion script for `shell` into `buf`
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
/// * `buf` - Where the script is written
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}
