//! Integration tests for module generation through the public library API.
//!
//! Fixtures under `tests/fixtures/genspec/` mirror a family of proof specs
//! sharing one template and one hierarchical spec document.

use std::path::PathBuf;

use genspec::config::{Document, ParseOptions};
use genspec::constants::BASE_SECTION;
use genspec::generate::generate;
use genspec::resolve::resolve;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/genspec")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}

fn load(name: &str) -> Document {
    Document::load(&fixture(name), ParseOptions::default()).unwrap()
}

// ---------------------------------------------------------------------------
// fixture family
// ---------------------------------------------------------------------------

#[test]
fn renders_transfer_success() {
    let out = generate(
        &read_fixture("template.k"),
        &load("spec.ini"),
        &load("pgm.ini"),
        "transfer-success",
    );
    assert_eq!(out, read_fixture("transfer-success.expected"));
}

#[test]
fn renders_transfer_failure() {
    let out = generate(
        &read_fixture("template.k"),
        &load("spec.ini"),
        &load("pgm.ini"),
        "transfer-failure",
    );
    assert_eq!(out, read_fixture("transfer-failure.expected"));
}

#[test]
fn resolves_fixture_chain() {
    let spec = load("spec.ini");
    let resolved = resolve(&spec, "transfer-failure");
    assert_eq!(resolved["gas"], "2000");
    assert_eq!(resolved["code"], "#transfer(FROM, TO, VALUE)");
    assert_eq!(
        resolved["requires"],
        "true\nandBool VALUE >=Int 0\nandBool VALUE >Int BAL_FROM"
    );
    assert!(!resolved.contains_key("+requires"));
}

#[test]
fn unknown_module_gets_base_values() {
    let spec = load("spec.ini");
    assert_eq!(resolve(&spec, "nonexistent-leaf"), resolve(&spec, ""));

    let out = generate("{MODULE}: {CODE} / {GAS}", &spec, &Document::new(), "nonexistent-leaf");
    assert_eq!(out, "NONEXISTENT-LEAF: #execute / 100000");
}

#[test]
fn raw_program_document_keeps_references() {
    let program = Document::load(&fixture("pgm.ini"), ParseOptions::raw()).unwrap();
    let out = generate("{BANNER}", &Document::new(), &program, "x");
    assert_eq!(out, "%(tool)s %(version)s");
}

// ---------------------------------------------------------------------------
// documented examples
// ---------------------------------------------------------------------------

#[test]
fn greeting_example() {
    let mut spec = Document::new();
    spec.insert(BASE_SECTION, "greeting", "Hi")
        .insert("a", "+greeting", " there")
        .insert("a-b", "name", "Bob");

    let resolved = resolve(&spec, "a-b");
    let pairs: Vec<_> = resolved.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(pairs, vec![("greeting", "Hi there"), ("name", "Bob")]);

    let out = generate("{GREETING}, {NAME}!", &spec, &Document::new(), "a-b");
    assert_eq!(out, "Hi there, Bob!");
}

#[test]
fn module_key_example() {
    let out = generate("{MODULE}", &Document::new(), &Document::new(), "widget");
    assert_eq!(out, "WIDGET");
}

#[test]
fn program_values_reach_placeholders_introduced_by_spec_values() {
    let spec: Document = "[DEFAULT]\nheader = {TOOL} check of {MODULE}\n".parse().unwrap();
    let program: Document = "[DEFAULT]\ntool = kprove\n".parse().unwrap();
    let out = generate("{HEADER}\n{UNKNOWN}\n", &spec, &program, "erc20-approve");
    assert_eq!(out, "kprove check of ERC20-APPROVE\n{UNKNOWN}\n");
}

#[test]
fn parsed_document_round_trips_through_resolve() {
    let text = "\
[DEFAULT]
flags = -O1

[build]
+flags = -g

[build-release]
flags = -O3
+flags = -flto
";
    let spec: Document = text.parse().unwrap();
    assert_eq!(resolve(&spec, "build")["flags"], "-O1-g");
    assert_eq!(resolve(&spec, "build-release")["flags"], "-O3-flto");
    assert_eq!(resolve(&spec, "build-debug")["flags"], "-O1-g");
}
