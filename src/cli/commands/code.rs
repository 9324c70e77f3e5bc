use crate::cli::parser::{CodeCommands, Commands};
use crate::config::Config;
use crate::core::calendar::assign_colors;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Code { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let user_id = store::ensure_user(&pool.conn, &cfg.user)?;

    match action {
        CodeCommands::Add {
            project,
            task,
            description,
            inactive,
        } => {
            let project = project.trim();
            let task = task.trim();
            let description = description.trim();

            if project.is_empty() {
                return Err(AppError::MissingValue("Project number"));
            }
            if task.is_empty() {
                return Err(AppError::MissingValue("Task number"));
            }
            if description.is_empty() {
                return Err(AppError::MissingValue("Description"));
            }
            if store::charge_code_exists(&pool.conn, user_id, project, task)? {
                return Err(AppError::DuplicateChargeCode(format!(
                    "{}-{}",
                    project, task
                )));
            }

            let id = store::insert_charge_code(
                &pool.conn,
                user_id,
                project,
                task,
                description,
                !*inactive,
            )?;
            success(format!("Charge code #{} added: {}-{}.", id, project, task));
        }

        CodeCommands::List { all } => {
            let codes = store::list_charge_codes(&pool.conn, user_id)?;
            // colors come from the full sorted list, so hiding inactive
            // codes does not reshuffle the active ones
            let colors = assign_colors(&codes);

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("CHARGE CODE"),
                Column::left("STATUS"),
            ]);

            for code in codes.iter().filter(|c| *all || c.is_active) {
                let tag = colors.get(&code.id).copied().unwrap_or(RESET);
                table.add_row(vec![
                    code.id.to_string(),
                    format!("{}{}{}", tag, code.label(), RESET),
                    if code.is_active {
                        "active".to_string()
                    } else {
                        format!("{}inactive{}", GREY, RESET)
                    },
                ]);
            }

            print!("{}", table.render());
        }

        CodeCommands::Toggle { id, off } => {
            let changed = store::set_charge_code_active(&pool.conn, user_id, *id, !*off)?;
            if changed == 0 {
                return Err(AppError::ChargeCodeNotFound(*id));
            }
            success(format!(
                "Charge code #{} {}.",
                id,
                if *off { "deactivated" } else { "activated" }
            ));
        }
    }

    Ok(())
}
