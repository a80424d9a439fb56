use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::models::iso_week::MonthKey;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        data,
        file,
        month,
        force,
    } = cmd
    {
        let month = month
            .as_deref()
            .map(str::parse::<MonthKey>)
            .transpose()?;

        let mut pool = open_pool(cfg)?;
        ExportLogic::export(&mut pool, *data, *format, file, month, *force)?;
    }
    Ok(())
}
