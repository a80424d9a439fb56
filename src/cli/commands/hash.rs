use crate::cli::parser::Commands;
use crate::core::auth;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::HashPassword { password, cost } = cmd {
        let hash = auth::hash_password(password, *cost)?;
        println!("{hash}");
        info("Put this value in `app_pass_hash` (rworkhours config --edit).");
    }
    Ok(())
}
