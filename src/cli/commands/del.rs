use crate::cli::commands::{cancelled, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntriesLogic;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let prompt = format!("Delete entry #{}? This action is irreversible.", id);
        if !*yes && !ask_confirmation(&prompt) {
            cancelled();
            return Ok(());
        }

        let mut pool = open_pool(cfg)?;
        EntriesLogic::delete(&mut pool, id)?;
        success(format!("Entry #{} has been deleted.", id));
    }

    Ok(())
}
