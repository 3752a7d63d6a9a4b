use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) STORED KEYS
    //
    let keys: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    println!("{}• Stored keys:{} {}{}{}", CYAN, RESET, GREEN, keys, RESET);

    //
    // 3) DPR ENTRIES
    //
    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM list_entries", [], |row| row.get(0))?;
    println!(
        "{}• List entries:{} {}{}{}",
        CYAN, RESET, GREEN, entries, RESET
    );

    //
    // 4) AUDIT ROWS
    //
    let audit: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit rows:{} {}", CYAN, RESET, audit);

    println!();
    Ok(())
}
