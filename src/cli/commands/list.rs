use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Activity;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { details, search } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let activities = ListLogic::list(&mut pool, &cfg.storage_key, search.as_deref())?;

        if activities.is_empty() {
            if search.is_some() {
                println!("No activities match the search.");
            } else {
                println!("No activities recorded.");
            }
            return Ok(());
        }

        println!("📋 Recorded activities:\n");

        if *details {
            for a in &activities {
                super::show::print_activity(a, cfg);
                println!();
            }
        } else {
            print!("{}", build_table(&activities).render(&cfg.separator_char));
        }

        println!("\nTotal: {}", activities.len());
    }
    Ok(())
}

fn build_table(activities: &[Activity]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 16),
        Column::new("NAME", 32),
        Column::new("OWNER", 24),
        Column::new("DATE", 16),
        Column::new("PART.", 5),
    ]);

    for a in activities {
        table.add_row(vec![
            a.id.to_string(),
            a.name.clone(),
            a.owner.clone(),
            a.date.clone(),
            a.participants.len().to_string(),
        ]);
    }

    table
}
