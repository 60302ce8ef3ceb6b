//! Snapshot tests for rendered trees
//!
//! These tests compare rendered output against golden files in tests/fixtures/.
//! To regenerate fixtures after a deliberate layout change, run the tests with
//! UPDATE_FIXTURES=1

use std::fs;
use std::path::Path;
use treeprint::{render_notation, DigitWidth, RenderConfig};

const DEMO: &str = "80(44(11(10,12),16),7(,15(1,4)))";

/// Compare rendered output to a fixture file
fn assert_fixture(name: &str, input: &str, config: RenderConfig) {
    let output = render_notation(input, config).expect("render should succeed");
    let fixture_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.txt", name));

    if std::env::var("UPDATE_FIXTURES").is_ok() {
        fs::write(&fixture_path, &output).expect("failed to write fixture");
        println!("Updated fixture: {}", fixture_path.display());
        return;
    }

    let expected = fs::read_to_string(&fixture_path).unwrap_or_else(|_| {
        panic!(
            "Fixture not found: {}\nRun with UPDATE_FIXTURES=1 to create it.\n\nActual output:\n{}",
            fixture_path.display(),
            output
        )
    });

    if output != expected {
        panic!(
            "Snapshot mismatch for '{}'!\n\n=== Expected ===\n{}\n=== Actual ===\n{}\nRun with UPDATE_FIXTURES=1 to update.",
            name, expected, output
        );
    }
}

fn config(digit_width: DigitWidth, max_levels: usize) -> RenderConfig {
    RenderConfig::new(digit_width, max_levels)
}

#[test]
fn test_demo() {
    assert_fixture("demo", DEMO, RenderConfig::default());
}

#[test]
fn test_demo_three_digits() {
    assert_fixture("demo_three_digits", DEMO, config(DigitWidth::Three, 6));
}

#[test]
fn test_demo_four_digits() {
    assert_fixture("demo_four_digits", DEMO, config(DigitWidth::Four, 6));
}

#[test]
fn test_demo_at_ceiling() {
    // Height 4 with a ceiling of 4 triggers the one-level compaction
    assert_fixture("demo_at_ceiling", DEMO, config(DigitWidth::Two, 4));
}

#[test]
fn test_perfect_five() {
    assert_fixture(
        "perfect_five",
        "16(8(4(2(1,3),6(5,7)),12(10(9,11),14(13,15))),\
         24(20(18(17,19),22(21,23)),28(26(25,27),30(29,31))))",
        RenderConfig::default(),
    );
}

#[test]
fn test_full_height_spine() {
    assert_fixture(
        "full_height_spine",
        "60(50(40(30(20(10)))),70)",
        RenderConfig::default(),
    );
}

#[test]
fn test_wide_keys() {
    assert_fixture(
        "wide_keys",
        "1000(5(42,999),9999(,7))",
        config(DigitWidth::Four, 6),
    );
}

#[test]
fn test_zigzag() {
    assert_fixture("zigzag", "10(,90(20(,80)))", RenderConfig::default());
}
