use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");

        let op_w = entries
            .iter()
            .map(|(_, _, op, _)| op.len())
            .max()
            .unwrap_or(10);

        for (id, date, operation, message) in entries {
            println!(
                "{:>4}: {}{}{} | {}{:<op_w$}{} => {}",
                id,
                GREY,
                date,
                RESET,
                CYAN,
                operation,
                RESET,
                message,
                op_w = op_w
            );
        }
    }

    Ok(())
}
