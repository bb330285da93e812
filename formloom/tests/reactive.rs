use formloom::field::FieldBuilder;
use formloom::field::Operator;
use formloom::layout::Section;
use formloom::reactive::ReactiveAdapter;
use formloom::Field;
use formloom::Form;
use formloom::Node;
use pretty_assertions::assert_eq;

fn form() -> Form {
    Form::make().schema([
        Node::from(
            Field::radio("type")
                .options([("personal", "Personal"), ("business", "Business")])
                .default("personal"),
        ),
        Section::make("Company")
            .children([
                Node::from(Field::text("company").show_when("type", Operator::StrictEq, "business")),
                Node::from(Field::number("employees").hide_when("type", Operator::Ne, "business").min(1)),
            ])
            .into(),
    ])
}

#[test]
fn test_state_descriptor() {
    let form = form();
    let value = ReactiveAdapter::make(&form).state().to_value().unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "form": {"type": "personal", "company": null, "employees": null},
            "errors": {"type": null, "company": null, "employees": null},
            "loading": false,
            "submitted": false,
            "show_company": {
                "kind": "expression",
                "source": "function() { return this.form.type === \"business\"; }"
            },
            "show_employees": {
                "kind": "expression",
                "source": "function() { return !(this.form.type != \"business\"); }"
            }
        })
    );
}

#[test]
fn test_x_data_keeps_functions_bare() {
    let form = form();
    let literal = ReactiveAdapter::make(&form)
        .handler("submit", "async function() { this.loading = true; }")
        .watch("type", "(value) => { this.errors.type = null; }")
        .to_x_data()
        .unwrap();
    assert!(literal.contains(r#""submit": async function() { this.loading = true; },"#));
    assert!(literal.contains(
        r#""init": function() { $watch('form.type', (value) => { this.errors.type = null; }); }"#
    ));
    assert!(!literal.contains("\"kind\""));
}

#[test]
fn test_directive_matches_client_predicate() {
    let form = form();
    let company = form.field("company").unwrap();
    assert_eq!(
        company.core().directives["x-show"],
        r#"form.type === "business""#
    );
}

#[test]
fn test_script_contains_rules() {
    let form = form();
    let script = ReactiveAdapter::make(&form).to_script().unwrap();
    assert!(script.contains("\"employees\": [\n        \"numeric\",\n        \"min:1\"\n    ]"));
    assert!(script.contains("function formloom() {"));
}
