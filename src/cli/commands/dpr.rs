use crate::cli::parser::{Commands, DprCommands};
use crate::config::Config;
use crate::core::dpr::DprLog;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::store::LocalRecordStore;
use crate::ui::messages::success;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Dpr { action } = cmd else {
        return Ok(());
    };

    match action {
        DprCommands::Add {
            description,
            remarks,
            photo,
        } => {
            let store = LocalRecordStore::open(&cfg.database)?;
            let mut log = DprLog::new(store);

            let entry = log.append(description, remarks, photo.clone())?;

            if let Err(e) = ttlog(
                log.store_mut().conn(),
                "dpr_add",
                &entry.id,
                &entry.work_description,
            ) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }

            success(format!(
                "Progress report {} recorded at {}",
                entry.id,
                entry.created_str()
            ));
            Ok(())
        }

        DprCommands::List => {
            let store = LocalRecordStore::open(&cfg.database)?;
            let log = DprLog::new(store);
            let entries = log.list_all()?;

            if entries.is_empty() {
                println!("No progress reports recorded yet.");
                return Ok(());
            }

            let mut table = Table::new(&["CREATED", "DESCRIPTION", "REMARKS", "PHOTO"]);

            for e in &entries {
                table.add_row(vec![
                    e.created_str(),
                    truncate(&e.work_description, 40),
                    truncate(&e.remarks, 24),
                    e.photo_ref.clone().unwrap_or_else(|| "--".to_string()),
                ]);
            }

            println!("{}", table.render());
            println!("{} report(s) total.", entries.len());
            Ok(())
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
