use std::sync::Arc;

use formloom::field::FieldBuilder;
use formloom::layout::Grid;
use formloom::layout::Html;
use formloom::layout::Row;
use formloom::layout::Section;
use formloom::layout::Tab;
use formloom::layout::Tabs;
use formloom::render::FieldContext;
use formloom::render::Renderer;
use formloom::render::TailwindConfig;
use formloom::render::TailwindRenderer;
use formloom::Field;
use formloom::Form;
use formloom::Node;
use formloom::Value;

struct Plain;

impl Renderer for Plain {
    fn render_field(&self, field: &Field, ctx: FieldContext<'_>) -> String {
        format!("<{}:{}>", field.name(), ctx.value)
    }
}

#[test]
fn test_select_empty_option_leads() {
    let form = Form::make().schema([Field::select("plan")
        .empty_option("-- Pick --")
        .multiple(false)
        .options([("basic", "Basic"), ("pro", "Pro")])]);
    let html = form.render();
    let options: Vec<&str> = html.split("<option").skip(1).collect();
    assert_eq!(options.len(), 3);
    assert!(options[0].starts_with(r#" value="">-- Pick --</option>"#));
}

#[test]
fn test_money_symbol_ignores_value() {
    for value in [Value::Null, Value::from(0), Value::from(99.5)] {
        let form = Form::make()
            .schema([Field::money("price").currency("RWF")])
            .values([("price", value)]);
        assert!(form.render().contains(">FRw</span>"));
    }
}

#[test]
fn test_default_fills_unbound_value() {
    let form = Form::make().schema([Field::text("city").default("Kigali")]);
    assert!(form.render().contains(r#"value="Kigali""#));

    let form = form.values([("city", "Nairobi")]);
    let html = form.render();
    assert!(html.contains(r#"value="Nairobi""#));
    assert!(!html.contains("Kigali"));
}

#[test]
fn test_errors_reach_nested_fields() {
    let form = Form::make()
        .schema([Section::make("Contact").children([Row::make([
            Field::email("email").hint("Work address"),
            Field::email("backup"),
        ])])])
        .errors([("email", "Please enter a valid email address.")]);
    let html = form.render();
    assert!(html.contains(r#"<p class="text-red-500 text-xs mt-1">Please enter a valid email address.</p>"#));
    assert!(!html.contains("Work address"));
}

#[test]
fn test_custom_renderer_degrades_layouts_to_divs() {
    let form = Form::make()
        .schema([
            Node::from(Grid::make().schema([Field::text("a"), Field::text("b")])),
            Node::from(Html::make("<hr>")),
        ])
        .values([("a", "1")])
        .renderer(Arc::new(Plain));
    assert_eq!(form.render(), "<div><a:1><b:></div><hr>");
}

#[test]
fn test_tabs_render_one_panel_per_tab() {
    let tabs = Tabs::make()
        .tab("general", Tab::new("General", [Field::text("name")]))
        .tab("pricing", Tab::new("Pricing", [Field::money("price")]).icon("fas fa-tag"))
        .tab("general", Tab::new("Basics", [Field::text("title")]));
    let html = Form::make().schema([tabs]).render();

    let general = html.find("Basics</button>").unwrap();
    let pricing = html.find("Pricing</button>").unwrap();
    assert!(general < pricing);
    assert!(!html.contains(r#"name="name""#));
    assert_eq!(html.matches(r#"class="pt-4""#).count(), 2);
    assert!(html.contains(r#"<i class="fas fa-tag mr-2"></i>"#));
}

#[test]
fn test_collapsible_section() {
    let section = Section::make("Advanced")
        .icon("fas fa-cog")
        .description("Rarely needed")
        .collapsed(true)
        .children([Field::text("notes")]);
    let html = Form::make().schema([section]).render();
    assert!(html.contains(r#"x-data="{ open: false }""#));
    assert!(html.contains(r#"@click="open = !open""#));
    assert!(html.contains(r#"<div x-show="open" x-collapse>"#));
    assert!(html.contains("Rarely needed</p>"));
}

#[test]
fn test_configured_classes() {
    let renderer = TailwindRenderer::with_config(
        TailwindConfig::new()
            .input_class("form-input")
            .wrapper_class("field")
            .required_indicator("!"),
    );
    let form = Form::make()
        .schema([Field::text("name").label("Name").required(true)])
        .renderer(Arc::new(renderer));
    let html = form.render();
    assert!(html.starts_with(r#"<div class="field">"#));
    assert!(html.contains(r#"class="form-input""#));
    assert!(html.contains("Name!</label>"));
}

#[test]
fn test_radio_and_checkbox_have_inline_labels() {
    let form = Form::make()
        .schema([
            Node::from(Field::radio("size").label("Size").options([("s", "Small"), ("m", "Medium")]).inline(true)),
            Node::from(Field::checkbox("terms").label("I agree").checked(true)),
        ])
        .values([("size", "m")]);
    let html = form.render();
    assert!(!html.contains("<label for="));
    assert!(html.contains(r#"id="size_m" value="m" checked"#));
    assert!(html.contains(r#"name="terms" id="terms" value="1" checked"#));
}

#[test]
fn test_multiple_select_marks_every_selected_value() {
    let form = Form::make()
        .schema([Field::select("tags")
            .multiple(true)
            .options([("a", "A"), ("b", "B"), ("c", "C")])])
        .values([("tags", vec!["a", "c"])]);
    let html = form.render();
    assert!(html.contains(r#"name="tags[]""#));
    assert_eq!(html.matches(" selected>").count(), 2);
}
