//! Update command integration tests

mod common;

use common::TestCatalog;
use predicates::prelude::*;

#[test]
fn test_update_replaces_only_outdated_scripts() {
    let mut catalog = TestCatalog::new();
    catalog.add_script("old", "", "1.0.37");
    catalog.add_script("same", "", "1.2.0");
    catalog.add_script("ahead", "", "1.0.37");
    catalog.install_locally("old", "1.0.19");
    catalog.install_locally("same", "1.2");
    catalog.install_locally("ahead", "2.0.6");

    catalog
        .scriptdock_cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.19 -> 1.0.37"))
        .stdout(predicate::str::contains("Updated 1 script(s)"));

    assert!(catalog.read_file("prod/scripts/old").contains("Version: 1.0.37"));
    assert!(catalog.read_file("prod/scripts/same").contains("Version: 1.2\n"));
    assert!(catalog.read_file("prod/scripts/ahead").contains("Version: 2.0.6"));
}

#[test]
fn test_update_dry_run_changes_nothing() {
    let mut catalog = TestCatalog::new();
    catalog.add_script("old", "", "2.0.0");
    catalog.install_locally("old", "1.0.0");

    catalog
        .scriptdock_cmd()
        .args(["update", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN] Would update 1 script(s)"));

    assert!(catalog.read_file("prod/scripts/old").contains("Version: 1.0.0"));
}

#[test]
fn test_update_skips_unparsable_and_unknown() {
    let mut catalog = TestCatalog::new();
    catalog.add_script("known", "", "2.0.0");
    catalog.write_file("prod/scripts/known", "#!/bin/sh\necho no version\n");
    catalog.install_locally("orphan", "1.0.0");

    catalog
        .scriptdock_cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("no parsable Version: marker in the local copy of 'known'"))
        .stdout(predicate::str::contains("no longer in the catalog"));

    assert_eq!(
        catalog.read_file("prod/scripts/known"),
        "#!/bin/sh\necho no version\n"
    );
}

#[test]
fn test_update_refreshes_outdated_entrypoint() {
    let catalog = TestCatalog::new();
    catalog.write_entrypoint("99.0.0");
    catalog.write_file("prod/scripts/scriptdock", "#!/bin/sh\n# Version: 0.0.1\n");

    catalog
        .scriptdock_cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.1 -> 99.0.0"));

    let entrypoint = catalog.read_file("prod/scripts/scriptdock");
    assert!(entrypoint.contains("Version: 99.0.0"));
    assert!(entrypoint.contains(&format!("ROOT={}", catalog.prod_root().display())));
}

#[test]
fn test_update_with_nothing_installed() {
    let catalog = TestCatalog::new();

    catalog
        .scriptdock_cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("No scripts installed."));
}
