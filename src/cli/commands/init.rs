use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and, unless running in test mode,
/// a default configuration file. An existing file is kept as is.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let existed = Config::config_file().exists();
    let path = Config::init_all(cli.test)?;

    info("Initializing hrcal…");

    if existed {
        info(format!("Config file already present: {}", path.display()));
    } else if cli.test {
        info("Test mode: configuration file not written");
    } else {
        success(format!("Config file: {}", path.display()));
    }

    success("hrcal initialization completed!");
    Ok(())
}
