//! Cargo xtask for fibbench project tooling
//!
//! Run with: cargo xtask <command>

use std::process::Command;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match command {
        "regen" => regen(),
        "test" => run_tests(),
        "help" | _ => show_help(),
    }
}

fn regen() {
    // Regenerate the committed fixtures through the gen-fixtures binary
    let status = Command::new("cargo")
        .args(&["run", "--bin", "gen-fixtures", "--", "tests/fixtures"])
        .status()
        .expect("Failed to run fixture generator");

    if status.code() == Some(0) {
        println!("[OK] Fixtures regenerated!");
    } else {
        println!("Error: fixture generation exit status = {:?}", status.code());
        std::process::exit(1);
    }
}

fn run_tests() {
    regen();

    let status = Command::new("cargo")
        .args(&["test"])
        .status()
        .expect("Failed to run cargo test");

    if status.code() != Some(0) {
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn show_help() {
    println!(
        r#"fibbench xtask commands:

    cargo xtask regen    - Regenerate tests/fixtures from the library
    cargo xtask test     - Regenerate fixtures, then run the test suite
    cargo xtask help     - Show this help message

Fixture Workflow:
    The integration tests compare the library against the committed
    fixtures. After changing the generator, run 'cargo xtask regen'
    and commit the updated files; 'cargo xtask test' does both steps.
"#
    );
}
