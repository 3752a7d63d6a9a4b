use predicates::str::contains;

mod common;
use common::{init_test_db, punch_in_at, setup_test_db, slg};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    slg()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_punch_in_and_status() {
    let db_path = setup_test_db("punch_in_status");
    init_test_db(&db_path);

    slg()
        .args([
            "--db", &db_path, "in", "--photo", "gate.jpg", "--lat", "12.91", "--lon", "77.61",
        ])
        .assert()
        .success()
        .stdout(contains("Punched in at"));

    slg()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("punched in"))
        .stdout(contains("12.91000, 77.61000"));
}

#[test]
fn test_double_punch_in_fails() {
    let db_path = setup_test_db("double_in");
    init_test_db(&db_path);
    punch_in_at(&db_path, "12.91", "77.61");

    slg()
        .args([
            "--db", &db_path, "in", "--photo", "p2.jpg", "--lat", "12.91", "--lon", "77.61",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid transition"));
}

#[test]
fn test_punch_out_before_in_fails() {
    let db_path = setup_test_db("out_before_in");
    init_test_db(&db_path);

    slg()
        .args(["--db", &db_path, "out", "--lat", "12.92", "--lon", "77.60"])
        .assert()
        .failure()
        .stderr(contains("punch-out requires a punch-in first"));
}

#[test]
fn test_full_day_flow() {
    let db_path = setup_test_db("full_day");
    init_test_db(&db_path);
    punch_in_at(&db_path, "12.91", "77.61");

    slg()
        .args(["--db", &db_path, "out", "--lat", "12.92", "--lon", "77.60"])
        .assert()
        .success()
        .stdout(contains("Punched out at"))
        .stdout(contains("Worked today"));

    slg()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("punched out"))
        .stdout(contains("12.92000, 77.60000"));

    // Terminal for the day: another punch-out must fail.
    slg()
        .args(["--db", &db_path, "out", "--lat", "12.92", "--lon", "77.60"])
        .assert()
        .failure()
        .stderr(contains("already punched out"));
}

#[test]
fn test_punch_in_without_any_fix_fails() {
    let db_path = setup_test_db("no_fix");
    init_test_db(&db_path);

    // No --lat/--lon and nothing cached yet: the punch must be refused.
    slg()
        .args(["--db", &db_path, "in", "--photo", "p1.jpg"])
        .assert()
        .failure()
        .stderr(contains("No location fix available"));

    // State unchanged: a retry with coordinates succeeds.
    slg()
        .args([
            "--db", &db_path, "in", "--photo", "p1.jpg", "--lat", "12.91", "--lon", "77.61",
        ])
        .assert()
        .success();
}

#[test]
fn test_punch_out_falls_back_to_cached_fix() {
    let db_path = setup_test_db("cached_fix");
    init_test_db(&db_path);
    punch_in_at(&db_path, "12.91", "77.61");

    // No fresh coordinates: the fix cached at punch-in is used instead.
    slg()
        .args(["--db", &db_path, "out"])
        .assert()
        .success()
        .stdout(contains("Punched out at"))
        .stdout(contains("12.91000, 77.61000"));
}

#[test]
fn test_coordinates_out_of_range_rejected() {
    let db_path = setup_test_db("bad_coords");
    init_test_db(&db_path);

    slg()
        .args([
            "--db", &db_path, "in", "--photo", "p1.jpg", "--lat", "95.0", "--lon", "77.61",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinate"));
}

#[test]
fn test_dpr_add_and_list() {
    let db_path = setup_test_db("dpr_add_list");
    init_test_db(&db_path);

    slg()
        .args(["--db", &db_path, "dpr", "add", "Poured foundation slab"])
        .assert()
        .success()
        .stdout(contains("Progress report"));

    slg()
        .args([
            "--db",
            &db_path,
            "dpr",
            "add",
            "Erected column formwork",
            "--remarks",
            "east wing",
            "--photo",
            "col.jpg",
        ])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "dpr", "list"])
        .assert()
        .success()
        .stdout(contains("Poured foundation slab"))
        .stdout(contains("Erected column formwork"))
        .stdout(contains("east wing"))
        .stdout(contains("2 report(s) total"));
}

#[test]
fn test_dpr_blank_description_rejected() {
    let db_path = setup_test_db("dpr_blank");
    init_test_db(&db_path);

    slg()
        .args(["--db", &db_path, "dpr", "add", "   "])
        .assert()
        .failure()
        .stderr(contains("Work description must not be empty"));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_test_db(&db_path);
    punch_in_at(&db_path, "12.91", "77.61");

    slg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("punch_in"));
}

#[test]
fn test_dpr_list_renders_table_headers() {
    let db_path = setup_test_db("dpr_table");
    init_test_db(&db_path);

    slg()
        .args(["--db", &db_path, "dpr", "add", "Backfilled trench"])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "dpr", "list"])
        .assert()
        .success()
        .stdout(contains("CREATED"))
        .stdout(contains("DESCRIPTION"))
        .stdout(contains("REMARKS"))
        .stdout(contains("PHOTO"));
}

#[test]
fn test_config_print_shows_active_settings() {
    let db_path = setup_test_db("config_print");
    init_test_db(&db_path);

    slg()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("location_enabled"))
        .stdout(contains("location_wait_secs"));
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("db_info");
    init_test_db(&db_path);

    slg()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Stored keys"))
        .stdout(contains("List entries"));
}
