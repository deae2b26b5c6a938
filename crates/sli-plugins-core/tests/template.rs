// crates/sli-plugins-core/tests/template.rs
// ============================================================================
// Module: Query Template Renderer Tests
// Description: Substitution, literal escapes, and renderer failure modes.
// Purpose: Ensure rendering is plain interpolation with an intact window
//          token.
// ============================================================================

//! Validates template rendering against substitution records.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use sli_plugins_core::QueryTemplate;
use sli_plugins_core::RenderError;
use sli_plugins_core::SubstitutionRecord;
use sli_plugins_core::WINDOW_PLACEHOLDER;

fn record(pairs: &[(&str, &str)]) -> SubstitutionRecord {
    let mut record = SubstitutionRecord::new();
    for (variable, value) in pairs {
        record.set(*variable, *value);
    }
    record
}

// ============================================================================
// SECTION: Substitution
// ============================================================================

/// Verifies variables substitute verbatim with flexible inner spacing.
#[test]
fn render_substitutes_variables_verbatim() {
    let template = QueryTemplate::new("rate({{ metric_name }}{job=~\"{{job}}\"})");
    let rendered =
        template.render(&record(&[("metric_name", "up"), ("job", "api.*")])).unwrap();
    assert_eq!(rendered, "rate(up{job=~\"api.*\"})");
}

/// Verifies values are not re-scanned for substitution points.
#[test]
fn render_does_not_expand_values_recursively() {
    let template = QueryTemplate::new("{{ value }}");
    let rendered = template.render(&record(&[("value", "{{ other }}"), ("other", "x")])).unwrap();
    assert_eq!(rendered, "{{ other }}");
}

// ============================================================================
// SECTION: Literal Escapes
// ============================================================================

/// Verifies the quoted form emits its text without substitution.
#[test]
fn render_emits_quoted_literal() {
    let template = QueryTemplate::new(r#"sum(rate(up[{{ "{{ .window }}" }}]))"#);
    let rendered = template.render(&SubstitutionRecord::new()).unwrap();
    assert_eq!(rendered, "sum(rate(up[{{ .window }}]))");
    assert!(rendered.contains(WINDOW_PLACEHOLDER));
}

/// Verifies literals and variables compose in one template.
#[test]
fn render_mixes_literals_and_variables() {
    let template =
        QueryTemplate::new(r#"rate({{ metric_name }}[{{ "{{ .window }}" }}]) > {{ threshold }}"#);
    let rendered =
        template.render(&record(&[("metric_name", "up"), ("threshold", "0.50")])).unwrap();
    assert_eq!(rendered, "rate(up[{{ .window }}]) > 0.50");
}

// ============================================================================
// SECTION: Failure Modes
// ============================================================================

/// Verifies an undeclared variable is a render error, not empty output.
#[test]
fn render_rejects_undeclared_variable() {
    let template = QueryTemplate::new("rate({{ metric_name }})");
    let err = template.render(&SubstitutionRecord::new()).unwrap_err();
    assert_eq!(
        err,
        RenderError::UnresolvedVariable {
            variable: "metric_name".to_string(),
        }
    );
}

/// Verifies unterminated placeholders fail instead of passing through.
#[test]
fn render_rejects_unterminated_placeholders() {
    let sources = [
        "rate({{ metric_name",
        "rate({{ \"literal",
        "rate({{ \"literal\" ",
        "{{",
    ];
    for source in sources {
        let err = QueryTemplate::new(source).render(&record(&[("metric_name", "up")]));
        assert_eq!(err, Err(RenderError::UnterminatedPlaceholder), "source: {source}");
    }
}

/// Verifies text without substitution points passes through untouched.
#[test]
fn render_passes_plain_text_through() {
    let sources = ["", "sum(rate(up[5m]))", "closers }} without openers", "{ single braces }"];
    for source in sources {
        let rendered = QueryTemplate::new(source).render(&SubstitutionRecord::new()).unwrap();
        assert_eq!(rendered, source);
    }
}
