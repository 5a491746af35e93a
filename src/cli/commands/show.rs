use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Activity;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, separator_line};

const WRAP_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let activity = ListLogic::show(&mut pool, &cfg.storage_key, *id)?;
        print_activity(&activity, cfg);
    }
    Ok(())
}

/// Detail view shared by `show` and `list --details`.
pub(crate) fn print_activity(a: &Activity, cfg: &Config) {
    header(format!("{} (#{})", a.name, a.id));
    println!("{} {}", bold("Owner:"), a.owner);
    println!("{} {}", bold("Date:"), a.date);
    println!("{}", bold("Description:"));
    for line in textwrap::wrap(&a.description, WRAP_WIDTH) {
        println!("  {}", line);
    }

    println!("{}", separator_line(&cfg.separator_char, WRAP_WIDTH));
    println!("{} ({})", bold("Participants"), a.participants.len());
    for (i, p) in a.participants.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, p.name, p.email);
    }
}
