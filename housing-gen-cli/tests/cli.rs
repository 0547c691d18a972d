use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::process::Command;

const OUTPUT: &str = "madrid_housing_1000.csv";
const DISTRICTS: [&str; 10] = [
    "Chamberí",
    "Salamanca",
    "Arganzuela",
    "Moncloa-Aravaca",
    "Retiro",
    "Centro",
    "Chamartín",
    "Tetuán",
    "Fuencarral-El Pardo",
    "Carabanchel",
];

fn run_in(dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_housing-gen-cli"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn check_rows(path: &Path) -> Vec<Vec<String>> {
    let contents = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1001);
    assert_eq!(lines[0], "Price,Year_of_Building,Square_Meters,District");

    let districts: HashSet<&str> = DISTRICTS.into_iter().collect();
    let mut rows = vec![];
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4, "{line}");
        let price: u32 = fields[0].parse().unwrap();
        let year: u16 = fields[1].parse().unwrap();
        let area: u16 = fields[2].parse().unwrap();
        assert!((200_000..=800_000).contains(&price), "{line}");
        assert!((1900..=2020).contains(&year), "{line}");
        assert!((50..=200).contains(&area), "{line}");
        assert!(districts.contains(fields[3]), "{line}");
        rows.push(fields.into_iter().map(str::to_owned).collect());
    }
    rows
}

#[test]
fn test_run_in_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "CSV file 'madrid_housing_1000.csv' with 1,000 rows has been created.\n"
    );

    let path = dir.path().join(OUTPUT);
    assert!(path.exists());
    check_rows(&path);
}

#[test]
fn test_two_runs_structurally_equal() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    assert!(run_in(first_dir.path()).status.success());
    assert!(run_in(second_dir.path()).status.success());

    let first = check_rows(&first_dir.path().join(OUTPUT));
    let second = check_rows(&second_dir.path().join(OUTPUT));
    assert_eq!(first.len(), second.len());
}

#[test]
fn test_csv_reader_agrees() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_in(dir.path()).status.success());

    let mut reader = csv::Reader::from_path(dir.path().join(OUTPUT)).unwrap();
    let mut count = 0;
    for record in reader.records() {
        assert_eq!(record.unwrap().len(), 4);
        count += 1;
    }
    assert_eq!(count, 1000);
}

#[cfg(unix)]
#[test]
fn test_unwritable_dir_fails() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();
    // root ignores directory permissions
    if fs::write(dir.path().join("write_check"), "").is_ok() {
        return;
    }

    let output = run_in(dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join(OUTPUT).exists());
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_output_path_is_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(OUTPUT)).unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    assert!(dir.path().join(OUTPUT).is_dir());
}

#[test]
fn test_rejects_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_housing-gen-cli"))
        .current_dir(dir.path())
        .arg("unexpected")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!dir.path().join(OUTPUT).exists());
}
