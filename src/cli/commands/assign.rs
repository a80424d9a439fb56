use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projects::ProjectsLogic;
use crate::errors::AppResult;
use crate::models::iso_week::MonthKey;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assign {
        company,
        project,
        month,
        workers,
    } = cmd
    {
        let month: MonthKey = month.parse()?;
        let mut pool = open_pool(cfg)?;

        ProjectsLogic::assign(&mut pool, company, project, month, workers)?;

        if workers.is_empty() {
            success(format!(
                "{}/{} assigned to {}.",
                company.trim(),
                project.trim(),
                month
            ));
        } else {
            success(format!(
                "{}/{} assigned to {} for {}.",
                company.trim(),
                project.trim(),
                month,
                workers.join(", ")
            ));
        }
    }
    Ok(())
}
