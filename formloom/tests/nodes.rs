use formloom::field::FieldBuilder;
use formloom::field::FieldKind;
use formloom::field::Operator;
use formloom::layout::Row;
use formloom::layout::Section;
use formloom::layout::Tab;
use formloom::layout::Tabs;
use formloom::Error;
use formloom::Field;
use formloom::Node;
use formloom::Value;
use pretty_assertions::assert_eq;
use serde_json::json;

fn tree() -> Node {
    Tabs::make()
        .tab(
            "general",
            Tab::new(
                "General",
                [
                    Node::from(Field::text("name").label("Name").required(true).max_length(80)),
                    Node::from(Row::make([
                        Node::from(Field::money("price").currency("KES").decimals(0)),
                        Node::from(Field::select("status").options([("draft", "Draft"), ("live", "Live")])),
                    ])),
                ],
            ),
        )
        .tab(
            "extra",
            Tab::new(
                "Extra",
                [Section::make("Shipping")
                    .collapsible(true)
                    .children([Field::text("courier").show_when("status", Operator::Eq, "live")])],
            ),
        )
        .into()
}

#[test]
fn test_fields_flatten_across_tabs() {
    let node = tree();
    let names: Vec<&str> = node.fields().iter().map(|field| field.name()).collect();
    assert_eq!(names, ["name", "price", "status", "courier"]);

    let layout = node.as_layout().unwrap();
    assert_eq!(layout.children().len(), 3);
}

#[test]
fn test_projection_round_trip() {
    let node = tree();
    let projection = node.to_value().unwrap();
    assert_eq!(projection["type"], "tabs");
    assert_eq!(projection["defaultTab"], "general");

    let price = &projection["tabs"]["general"]["fields"][1]["fields"][0];
    assert_eq!(price["type"], "money");
    assert_eq!(price["currency"], "KES");
    assert_eq!(price["decimals"], 0);
    assert_eq!(price["attrs"]["step"], "1");

    let rebuilt = Node::from_value(projection).unwrap();
    assert_eq!(rebuilt, node);
}

#[test]
fn test_serde_matches_projection() {
    let node = tree();
    let text = serde_json::to_string(&node).unwrap();
    let parsed: Node = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, node);
}

#[test]
fn test_unknown_type_reads_as_text() {
    let node = Node::from_value(json!({"type": "colour", "name": "tint", "default": "red"})).unwrap();
    let field = node.as_field().unwrap();
    assert_eq!(field.kind(), &FieldKind::Text);
    assert_eq!(field.default_value(), &Value::from("red"));
}

#[test]
fn test_missing_name_is_an_error() {
    let err = Node::from_value(json!({"type": "email"})).unwrap_err();
    assert!(matches!(err, Error::MissingName));

    let err = Node::from_value(json!(["not", "a", "node"])).unwrap_err();
    assert!(matches!(err, Error::InvalidProjection(_)));
}
