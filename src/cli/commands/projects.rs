use crate::cli::commands::{cancelled, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projects::ProjectsLogic;
use crate::errors::AppResult;
use crate::models::iso_week::MonthKey;
use crate::ui::messages::{ask_confirmation, info, success};
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Projects {
        month,
        delete,
        company,
        project,
        yes,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;

        if *delete {
            let company = company.as_deref().unwrap_or_default();
            let project = project.as_deref().unwrap_or_default();

            let prompt = format!(
                "Delete project {}/{} and ALL its logged hours? This action is irreversible.",
                company, project
            );
            if !*yes && !ask_confirmation(&prompt) {
                cancelled();
                return Ok(());
            }

            let removed = ProjectsLogic::delete(&mut pool, company, project)?;
            success(format!(
                "Project {}/{} deleted ({} entries removed).",
                company, project, removed
            ));
            return Ok(());
        }

        let month = month.as_deref().map(str::parse::<MonthKey>).transpose()?;
        let projects = ProjectsLogic::list(&mut pool, month)?;
        if projects.is_empty() {
            info("No projects found.");
            return Ok(());
        }

        let mut table = Table::new(["ID", "COMPANY", "PROJECT", "MONTHS", "WORKERS"]);
        for p in &projects {
            let workers = if p.workers.is_empty() {
                format!("{GREY}(everyone){RESET}")
            } else {
                p.workers.join(", ")
            };
            table.add_row(vec![
                p.id.to_string(),
                p.company.clone(),
                p.name.clone(),
                p.months.join(", "),
                workers,
            ]);
        }
        println!("{}", table.render());
    }
    Ok(())
}
