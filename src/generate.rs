//! Per-module text generation.
//!
//! Ties the resolver and the substitutor together: the module's resolved
//! spec mapping goes first, then the synthetic `module` key, then the
//! program document's Base Section.

use crate::config::Document;
use crate::constants::MODULE_KEY;
use crate::resolve::{self, FlattenedMapping};
use crate::template;

/// The single-entry mapping exposing `{MODULE}` to templates.
pub fn module_mapping(name: &str) -> FlattenedMapping {
    FlattenedMapping::from([(MODULE_KEY.to_string(), name.to_uppercase())])
}

/// Render `template` for module `name`.
pub fn generate(template: &str, spec: &Document, program: &Document, name: &str) -> String {
    let resolved = resolve::resolve(spec, name);
    let module = module_mapping(name);
    let program = program.base();

    let text = template::render(template, [&resolved, &module, &program]);

    let leftover = template::unresolved_placeholders(&text);
    if !leftover.is_empty() {
        tracing::debug!(module = name, ?leftover, "placeholders left unsubstituted");
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASE_SECTION;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_hierarchical_values() {
        let mut spec = Document::new();
        spec.insert(BASE_SECTION, "greeting", "Hi")
            .insert("a", "+greeting", " there")
            .insert("a-b", "name", "Bob");
        let out = generate("{GREETING}, {NAME}!", &spec, &Document::new(), "a-b");
        assert_eq!(out, "Hi there, Bob!");
    }

    #[test]
    fn module_key_is_uppercased_name() {
        let out = generate("{MODULE}", &Document::new(), &Document::new(), "widget");
        assert_eq!(out, "WIDGET");
    }

    #[test]
    fn module_mapping_keeps_dashes() {
        assert_eq!(module_mapping("x-y")[MODULE_KEY], "X-Y");
    }

    #[test]
    fn spec_module_key_wins_over_synthetic_one() {
        let mut spec = Document::new();
        spec.insert(BASE_SECTION, "module", "custom");
        let out = generate("{MODULE}", &spec, &Document::new(), "widget");
        assert_eq!(out, "custom");
    }

    #[test]
    fn program_values_fill_remaining_placeholders() {
        let mut spec = Document::new();
        spec.insert(BASE_SECTION, "title", "{TOOL} for {MODULE}");
        let mut program = Document::new();
        program.insert(BASE_SECTION, "tool", "  kompile  ");
        let out = generate("{TITLE}", &spec, &program, "imp");
        assert_eq!(out, "kompile for IMP");
    }

    #[test]
    fn program_document_ignores_hierarchy_and_appends() {
        let mut program = Document::new();
        program
            .insert(BASE_SECTION, "k", "base")
            .insert(BASE_SECTION, "+k", "tail")
            .insert("mod", "k", "section");
        let out = generate("{K} {+K}", &Document::new(), &program, "mod");
        assert_eq!(out, "base tail");
    }
}
