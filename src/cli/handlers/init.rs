use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::cli::commands::InitArgs;
use crate::io::config_io::CONFIG_FILE;
use crate::io::lock::FileLock;
use crate::io::store::{FileStore, KvStore};
use crate::model::config::Config;
use crate::model::seed::{seed_boards, seed_pins};
use crate::ops::boards::board_repository;
use crate::ops::catalog::pin_repository;
use crate::ops::session::Session;

pub(crate) const CONFIG_TEMPLATE: &str = r##"# moodboard settings. Every value below is the default; edit freely.

[display]
# tags shown per pin in `mb list` and `mb boards`
tag_limit = 3
# width of the title column in listings
title_width = 40

[lock]
# how long write commands wait for another `mb` process to finish
timeout_ms = 5000
"##;

pub fn cmd_init(data_dir: &Path, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = data_dir.join(CONFIG_FILE);
    if config_path.exists() && !args.force {
        return Err(format!(
            "moodboard already initialized in {} (use --force to reset)",
            data_dir.display()
        )
        .into());
    }

    let store = Rc::new(FileStore::open(data_dir)?);
    let _lock = FileLock::acquire_configured(data_dir, &Config::default().lock)?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let store: Rc<dyn KvStore> = store;
    if args.force {
        pin_repository(store.clone()).save(&seed_pins());
        board_repository(store).save(&seed_boards());
    } else {
        // Keep whatever is already there; materialize the defaults otherwise
        Session::open(store).persist();
    }

    println!("initialized moodboard in {}", data_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }
}
