//! Tailwind-flavoured standard renderer.

use super::Attributes;
use super::FieldContext;
use super::RenderContext;
use super::Renderer;
use super::currency_symbol;
use super::escape_html;
use super::join_classes;
use super::js_string;
use crate::field::CheckboxAttrs;
use crate::field::Field;
use crate::field::FieldKind;
use crate::field::MoneyAttrs;
use crate::field::RadioAttrs;
use crate::field::SelectAttrs;
use crate::field::TextareaAttrs;
use crate::field::ToggleAttrs;
use crate::layout::Column;
use crate::layout::Grid;
use crate::layout::Layout;
use crate::layout::Row;
use crate::layout::Section;
use crate::layout::Tabs;
use crate::node::Node;
use crate::value::Value;

const ADORNMENT_CLASS: &str = "absolute top-1/2 -translate-y-1/2 text-gray-500 dark:text-gray-400";
const CHOICE_CLASS: &str =
    "border-gray-300 dark:border-gray-600 text-blue-600 focus:ring-blue-500 dark:bg-gray-700";
const TOGGLE_TRACK_CLASS: &str = "w-11 h-6 bg-gray-200 rounded-full peer dark:bg-gray-700 \
    peer-checked:after:translate-x-full peer-checked:after:border-white \
    after:content-[''] after:absolute after:top-0.5 after:left-[2px] \
    after:bg-white after:border-gray-300 after:border after:rounded-full \
    after:h-5 after:w-5 after:transition-all peer-checked:bg-blue-600";

/// Class names and fragments used by [`TailwindRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailwindConfig {
    /// Classes of text-like controls, selects and textareas.
    pub input_class: String,
    pub label_class: String,
    /// Added to the label of required fields.
    pub label_required_class: String,
    /// Markup appended to the label of required fields, emitted as is.
    pub required_indicator: String,
    pub error_class: String,
    pub hint_class: String,
    /// Classes of the element wrapping each field.
    pub wrapper_class: String,
    pub section_class: String,
    pub tabs_class: String,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            input_class: "input w-full".to_string(),
            label_class: "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1".to_string(),
            label_required_class: String::new(),
            required_indicator: r#"<span class="text-red-500 ml-1">*</span>"#.to_string(),
            error_class: "text-red-500 text-xs mt-1".to_string(),
            hint_class: "text-gray-500 dark:text-gray-400 text-xs mt-1".to_string(),
            wrapper_class: "mb-4".to_string(),
            section_class: "bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 \
                            dark:border-gray-700 p-6 mb-6"
                .to_string(),
            tabs_class: "mb-6".to_string(),
        }
    }
}

impl TailwindConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_class(mut self, class: impl Into<String>) -> Self {
        self.input_class = class.into();
        self
    }

    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = class.into();
        self
    }

    pub fn label_required_class(mut self, class: impl Into<String>) -> Self {
        self.label_required_class = class.into();
        self
    }

    pub fn required_indicator(mut self, markup: impl Into<String>) -> Self {
        self.required_indicator = markup.into();
        self
    }

    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    pub fn hint_class(mut self, class: impl Into<String>) -> Self {
        self.hint_class = class.into();
        self
    }

    pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = class.into();
        self
    }

    pub fn section_class(mut self, class: impl Into<String>) -> Self {
        self.section_class = class.into();
        self
    }

    pub fn tabs_class(mut self, class: impl Into<String>) -> Self {
        self.tabs_class = class.into();
        self
    }
}

/// The standard renderer: Tailwind utility classes and Alpine.js bindings.
#[derive(Debug, Clone, Default)]
pub struct TailwindRenderer {
    config: TailwindConfig,
}

impl TailwindRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TailwindConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TailwindConfig {
        &self.config
    }

    fn wrapper_classes(&self, field: &Field) -> String {
        if matches!(field.kind(), FieldKind::Hidden) {
            return "hidden".to_string();
        }
        let own = field.core().wrapper_class.iter().map(String::as_str);
        join_classes(std::iter::once(self.config.wrapper_class.as_str()).chain(own))
    }

    fn render_label(&self, field: &Field, label: &str) -> String {
        let core = field.core();
        let required_class = if core.required {
            self.config.label_required_class.as_str()
        } else {
            ""
        };
        let class = join_classes(
            [self.config.label_class.as_str(), required_class]
                .into_iter()
                .chain(core.label_class.iter().map(String::as_str)),
        );
        let indicator = if core.required {
            self.config.required_indicator.as_str()
        } else {
            ""
        };
        format!(
            r#"<label for="{}" class="{}">{}{indicator}</label>"#,
            escape_html(field.name()),
            escape_html(&class),
            escape_html(label)
        )
    }

    /// Attributes shared by text-like controls: identity, classes, value,
    /// state markers, extra attributes and directives.
    fn control_attributes(&self, field: &Field, value: &Value, extra_class: &str) -> Attributes {
        let core = field.core();
        let mut attrs = Attributes::new();
        attrs.set("type", field.kind().input_type());
        attrs.set("name", field.name());
        attrs.set("id", field.name());
        attrs.set(
            "class",
            join_classes(
                [self.config.input_class.as_str(), extra_class]
                    .into_iter()
                    .chain(core.class.iter().map(String::as_str)),
            ),
        );

        let text = value.to_text();
        if !text.is_empty() {
            attrs.set("value", text);
        }
        if let Some(placeholder) = &core.placeholder {
            attrs.set("placeholder", placeholder.as_str());
        }
        attrs.flag_if("required", core.required);
        attrs.flag_if("disabled", core.disabled);
        attrs.flag_if("readonly", core.readonly);
        if !core.style.is_empty() {
            attrs.set("style", core.style.join("; "));
        }

        extend_extra(&mut attrs, field);
        extend_directives(&mut attrs, field);
        attrs
    }

    fn render_input(&self, field: &Field, value: &Value) -> String {
        let core = field.core();
        let mut padding = Vec::new();
        if core.attrs.contains_key("data-prefix") {
            padding.push("pl-8");
        }
        if core.attrs.contains_key("data-suffix") {
            padding.push("pr-8");
        }
        let attrs = self.control_attributes(field, value, &padding.join(" "));
        format!("<input {attrs}>")
    }

    fn render_money(&self, field: &Field, attrs: &MoneyAttrs, value: &Value) -> String {
        let mut control = self.control_attributes(field, value, "pl-8");
        if control.get("step").is_none() {
            control.set("step", "0.01");
        }
        format!(
            r#"<span class="left-3 {ADORNMENT_CLASS} text-sm">{}</span><input {control}>"#,
            escape_html(currency_symbol(&attrs.currency))
        )
    }

    fn render_select(&self, field: &Field, attrs: &SelectAttrs, value: &Value) -> String {
        let core = field.core();
        let mut control = Attributes::new();
        if attrs.multiple {
            control.set("name", format!("{}[]", field.name()));
        } else {
            control.set("name", field.name());
        }
        control.set("id", field.name());
        control.set(
            "class",
            join_classes(
                std::iter::once(self.config.input_class.as_str())
                    .chain(core.class.iter().map(String::as_str)),
            ),
        );
        control.flag_if("required", core.required);
        control.flag_if("disabled", core.disabled);
        control.flag_if("multiple", attrs.multiple);
        extend_extra(&mut control, field);
        extend_directives(&mut control, field);

        let mut html = format!("<select {control}>");
        if let Some(empty) = attrs.empty_option.as_deref().filter(|_| !attrs.multiple) {
            html.push_str(&format!(r#"<option value="">{}</option>"#, escape_html(empty)));
        }
        for (key, label) in &attrs.options {
            let selected = if is_selected(value, key) { " selected" } else { "" };
            html.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape_html(key),
                escape_html(label)
            ));
        }
        html.push_str("</select>");
        html
    }

    fn render_textarea(&self, field: &Field, attrs: &TextareaAttrs, value: &Value) -> String {
        let core = field.core();
        let mut control = Attributes::new();
        control.set("name", field.name());
        control.set("id", field.name());
        control.set(
            "class",
            join_classes(
                std::iter::once(self.config.input_class.as_str())
                    .chain(core.class.iter().map(String::as_str)),
            ),
        );
        control.set("rows", attrs.rows.to_string());
        if let Some(cols) = attrs.cols {
            control.set("cols", cols.to_string());
        }
        if let Some(placeholder) = &core.placeholder {
            control.set("placeholder", placeholder.as_str());
        }
        control.flag_if("required", core.required);
        control.flag_if("disabled", core.disabled);
        control.flag_if("readonly", core.readonly);
        extend_extra(&mut control, field);
        extend_directives(&mut control, field);

        format!("<textarea {control}>{}</textarea>", escape_html(&value.to_text()))
    }

    fn render_checkbox(&self, field: &Field, attrs: &CheckboxAttrs, value: &Value) -> String {
        let checked = value.is_truthy() && !value.matches_text(&attrs.unchecked_value.to_text());
        let mut control = Attributes::new();
        control.set("type", "checkbox");
        control.set("name", field.name());
        control.set("id", field.name());
        control.set("value", attrs.checked_value.to_text());
        control.flag_if("checked", checked);
        control.set("class", format!("rounded {CHOICE_CLASS}"));
        control.flag_if("required", field.core().required);
        control.flag_if("disabled", field.core().disabled);
        extend_directives(&mut control, field);

        let mut html = format!(r#"<label class="inline-flex items-center cursor-pointer"><input {control}>"#);
        if let Some(label) = field.label() {
            html.push_str(&format!(
                r#"<span class="ml-2 text-sm text-gray-700 dark:text-gray-300">{}</span>"#,
                escape_html(label)
            ));
        }
        html.push_str("</label>");
        html
    }

    fn render_toggle(&self, field: &Field, attrs: &ToggleAttrs, value: &Value) -> String {
        let checked = value.is_truthy() && *value != attrs.off_value;
        let mut control = Attributes::new();
        control.set("type", "checkbox");
        control.set("name", field.name());
        control.set("id", field.name());
        control.set("value", attrs.on_value.to_text());
        control.flag_if("checked", checked);
        control.set("class", "sr-only peer");
        if let Some(on) = &attrs.on_label {
            control.set("data-on-label", on.as_str());
        }
        if let Some(off) = &attrs.off_label {
            control.set("data-off-label", off.as_str());
        }
        control.flag_if("disabled", field.core().disabled);
        extend_directives(&mut control, field);

        let mut html = format!(
            r#"<label class="relative inline-flex items-center cursor-pointer"><input {control}><div class="{TOGGLE_TRACK_CLASS}"></div>"#
        );
        if let Some(label) = field.label() {
            html.push_str(&format!(
                r#"<span class="ml-3 text-sm text-gray-700 dark:text-gray-300">{}</span>"#,
                escape_html(label)
            ));
        }
        html.push_str("</label>");
        html
    }

    fn render_radio(&self, field: &Field, attrs: &RadioAttrs, value: &Value) -> String {
        let container = if attrs.show_as_grid {
            format!("grid grid-cols-{} gap-2", attrs.grid_cols)
        } else if attrs.inline {
            "flex flex-wrap gap-4".to_string()
        } else {
            "space-y-2".to_string()
        };

        let mut html = format!(r#"<div class="{container}">"#);
        for (key, label) in &attrs.options {
            let mut control = Attributes::new();
            control.set("type", "radio");
            control.set("name", field.name());
            control.set("id", format!("{}_{key}", field.name()));
            control.set("value", key.as_str());
            control.flag_if("checked", value.matches_text(key));
            control.set("class", format!("rounded-full {CHOICE_CLASS}"));
            control.flag_if("required", field.core().required);
            control.flag_if("disabled", field.core().disabled);
            extend_directives(&mut control, field);

            html.push_str(&format!(
                r#"<label class="inline-flex items-center cursor-pointer"><input {control}><span class="ml-2 text-sm text-gray-700 dark:text-gray-300">{}</span></label>"#,
                escape_html(label)
            ));
        }
        html.push_str("</div>");
        html
    }

    fn render_hidden(&self, field: &Field, value: &Value) -> String {
        let mut control = Attributes::new();
        control.set("type", "hidden");
        control.set("name", field.name());
        control.set("value", value.to_text());
        extend_directives(&mut control, field);
        format!("<input {control}>")
    }

    fn render_children(&self, children: &[Node], ctx: &RenderContext<'_>) -> String {
        self.render_nodes(children, ctx)
    }

    fn render_row(&self, row: &Row, ctx: &RenderContext<'_>) -> String {
        let columns = format!("md:grid-cols-{}", row.column_count());
        let class = join_classes(
            ["grid", "grid-cols-1", columns.as_str(), row.gap.as_str()]
                .into_iter()
                .chain(row.classes.iter().map(String::as_str)),
        );
        format!(
            r#"<div class="{}">{}</div>"#,
            escape_html(&class),
            self.render_children(&row.children, ctx)
        )
    }

    fn render_column(&self, column: &Column, ctx: &RenderContext<'_>) -> String {
        let span = if column.span > 1 {
            format!("md:col-span-{}", column.span)
        } else {
            String::new()
        };
        let class = join_classes(
            std::iter::once(span.as_str()).chain(column.classes.iter().map(String::as_str)),
        );
        let children = self.render_children(&column.children, ctx);
        if class.is_empty() {
            format!("<div>{children}</div>")
        } else {
            format!(r#"<div class="{}">{children}</div>"#, escape_html(&class))
        }
    }

    fn render_grid(&self, grid: &Grid, ctx: &RenderContext<'_>) -> String {
        format!(
            r#"<div class="grid grid-cols-1 md:grid-cols-{} gap-{}">{}</div>"#,
            grid.columns,
            escape_html(&grid.gap),
            self.render_children(&grid.children, ctx)
        )
    }

    fn render_section(&self, section: &Section, ctx: &RenderContext<'_>) -> String {
        let class = join_classes(
            std::iter::once(self.config.section_class.as_str())
                .chain(section.classes.iter().map(String::as_str)),
        );
        let mut html = format!(r#"<div class="{}""#, escape_html(&class));
        if section.collapsible {
            let open = if section.collapsed { "false" } else { "true" };
            html.push_str(&format!(r#" x-data="{{ open: {open} }}""#));
        }
        html.push('>');

        if let Some(title) = &section.title {
            if section.collapsible {
                html.push_str(r#"<div class="cursor-pointer" @click="open = !open">"#);
            } else {
                html.push_str("<div>");
            }
            html.push_str(r#"<div class="flex items-center justify-between mb-4"><div class="flex items-center gap-2">"#);
            if let Some(icon) = &section.icon {
                html.push_str(&format!(
                    r#"<i class="{} text-gray-500 dark:text-gray-400"></i>"#,
                    escape_html(icon)
                ));
            }
            html.push_str(&format!(
                r#"<h3 class="text-lg font-semibold text-gray-900 dark:text-white">{}</h3></div>"#,
                escape_html(title)
            ));
            if section.collapsible {
                html.push_str(
                    r#"<i class="fas fa-chevron-down text-gray-400 transition-transform" :class="{ 'rotate-180': open }"></i>"#,
                );
            }
            html.push_str("</div>");
            html.push_str(&self.render_description(section));
            html.push_str("</div>");
        } else {
            html.push_str(&self.render_description(section));
        }

        let children = self.render_children(&section.children, ctx);
        if section.collapsible {
            html.push_str(&format!(r#"<div x-show="open" x-collapse>{children}</div>"#));
        } else {
            html.push_str(&children);
        }
        html.push_str("</div>");
        html
    }

    fn render_description(&self, section: &Section) -> String {
        section
            .description
            .as_deref()
            .map(|description| {
                format!(
                    r#"<p class="text-sm text-gray-500 dark:text-gray-400 mb-4">{}</p>"#,
                    escape_html(description)
                )
            })
            .unwrap_or_default()
    }

    fn render_tabs(&self, tabs: &Tabs, ctx: &RenderContext<'_>) -> String {
        let class = join_classes(
            std::iter::once(self.config.tabs_class.as_str())
                .chain(tabs.classes.iter().map(String::as_str)),
        );
        let state = format!("{{ activeTab: {} }}", js_string(&tabs.default_tab));
        let mut html = format!(
            r#"<div class="{}" x-data="{}">"#,
            escape_html(&class),
            escape_html(&state)
        );

        html.push_str(r#"<div class="border-b border-gray-200 dark:border-gray-700"><nav class="flex space-x-4" aria-label="Tabs">"#);
        for (key, tab) in &tabs.tabs {
            let key = js_string(key);
            let click = format!("activeTab = {key}");
            let active = format!(
                "{{ 'border-blue-500 text-blue-600 dark:text-blue-400': activeTab === {key}, \
                 'border-transparent text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-gray-300': activeTab !== {key} }}"
            );
            html.push_str(&format!(
                r#"<button type="button" @click="{}" :class="{}" class="whitespace-nowrap py-3 px-1 border-b-2 font-medium text-sm transition-colors">"#,
                escape_html(&click),
                escape_html(&active)
            ));
            if let Some(icon) = &tab.icon {
                html.push_str(&format!(r#"<i class="{} mr-2"></i>"#, escape_html(icon)));
            }
            html.push_str(&escape_html(&tab.label));
            html.push_str("</button>");
        }
        html.push_str("</nav></div>");

        for (key, tab) in &tabs.tabs {
            let visible = format!("activeTab === {}", js_string(key));
            html.push_str(&format!(
                r#"<div x-show="{}" class="pt-4">{}</div>"#,
                escape_html(&visible),
                self.render_children(&tab.children, ctx)
            ));
        }
        html.push_str("</div>");
        html
    }
}

impl Renderer for TailwindRenderer {
    fn render_field(&self, field: &Field, ctx: FieldContext<'_>) -> String {
        let core = field.core();
        let kind = field.kind();
        let hidden = matches!(kind, FieldKind::Hidden);
        let value = ctx.value;

        let mut html = format!(r#"<div class="{}">"#, escape_html(&self.wrapper_classes(field)));

        if let Some(label) = field.label().filter(|_| !kind.has_inline_label()) {
            html.push_str(&self.render_label(field, label));
        }

        if !hidden {
            html.push_str(r#"<div class="relative">"#);
        }
        if let Some(prefix) = core.attrs.get("data-prefix") {
            html.push_str(&format!(
                r#"<span class="left-3 {ADORNMENT_CLASS}">{}</span>"#,
                escape_html(&prefix.to_text())
            ));
        }

        let control = match kind {
            FieldKind::Select(attrs) => self.render_select(field, attrs, value),
            FieldKind::Textarea(attrs) => self.render_textarea(field, attrs, value),
            FieldKind::Checkbox(attrs) => self.render_checkbox(field, attrs, value),
            FieldKind::Toggle(attrs) => self.render_toggle(field, attrs, value),
            FieldKind::Money(attrs) => self.render_money(field, attrs, value),
            FieldKind::Radio(attrs) => self.render_radio(field, attrs, value),
            FieldKind::Hidden => self.render_hidden(field, value),
            FieldKind::Text
            | FieldKind::Email
            | FieldKind::Password(_)
            | FieldKind::Number(_)
            | FieldKind::Date(_)
            | FieldKind::DateTime(_) => self.render_input(field, value),
        };
        html.push_str(&control);

        if let Some(suffix) = core.attrs.get("data-suffix") {
            html.push_str(&format!(
                r#"<span class="right-3 {ADORNMENT_CLASS}">{}</span>"#,
                escape_html(&suffix.to_text())
            ));
        }
        if !hidden {
            html.push_str("</div>");
        }

        if let Some(error) = ctx.error {
            html.push_str(&format!(
                r#"<p class="{}">{}</p>"#,
                escape_html(&self.config.error_class),
                escape_html(error)
            ));
        } else if let Some(hint) = field.hint() {
            html.push_str(&format!(
                r#"<p class="{}">{}</p>"#,
                escape_html(&self.config.hint_class),
                escape_html(hint)
            ));
        }

        html.push_str("</div>");
        html
    }

    fn render_layout(&self, layout: &Layout, ctx: &RenderContext<'_>) -> String {
        log::trace!("[render] layout '{}'", layout.type_name());
        match layout {
            Layout::Row(row) => self.render_row(row, ctx),
            Layout::Column(column) => self.render_column(column, ctx),
            Layout::Grid(grid) => self.render_grid(grid, ctx),
            Layout::Section(section) => self.render_section(section, ctx),
            Layout::Tabs(tabs) => self.render_tabs(tabs, ctx),
            Layout::Html(html) => html.content.clone(),
        }
    }
}

/// Extra control attributes, minus the adornments rendered around the control.
fn extend_extra(attrs: &mut Attributes, field: &Field) {
    for (name, value) in &field.core().attrs {
        if name != "data-prefix" && name != "data-suffix" {
            attrs.set_value(name.as_str(), value);
        }
    }
}

fn extend_directives(attrs: &mut Attributes, field: &Field) {
    for (name, expression) in &field.core().directives {
        attrs.set(name.as_str(), expression.as_str());
    }
}

/// Scalar values match one option key; lists match each of their items.
fn is_selected(value: &Value, key: &str) -> bool {
    match value {
        Value::List(items) => items.iter().any(|item| item.matches_text(key)),
        other => other.matches_text(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldBuilder;
    use crate::render::FieldErrors;
    use crate::value::DataBag;

    fn render(field: impl Into<Field>, value: Value, error: Option<&str>) -> String {
        let field = field.into();
        TailwindRenderer::new().render_field(&field, FieldContext::new(&value, error))
    }

    #[test]
    fn test_select_empty_option_first() {
        let html = render(
            Field::select("status")
                .empty_option("-- Pick --")
                .multiple(false)
                .options([("a", "A"), ("b", "B")]),
            Value::Null,
            None,
        );
        let first = html.find("<option").unwrap();
        assert!(html[first..].starts_with(r#"<option value="">-- Pick --</option>"#));
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_multiple_select_has_no_empty_option() {
        let html = render(
            Field::select("tags").multiple(true).options([("a", "A"), ("b", "B")]),
            Value::from(vec!["b"]),
            None,
        );
        assert!(html.contains(r#"name="tags[]""#));
        assert!(!html.contains("-- Select --"));
        assert!(html.contains(r#"<option value="b" selected>B</option>"#));
        assert!(html.contains(r#"<option value="a">A</option>"#));
    }

    #[test]
    fn test_money_symbol_prefix() {
        let html = render(Field::money("price").currency("RWF"), Value::from(1500), None);
        assert!(html.contains(">FRw</span><input"));
        assert!(html.contains(r#"value="1500""#));

        let html = render(Field::money("price").currency("XOF"), Value::Null, None);
        assert!(html.contains(">XOF</span>"));
    }

    #[test]
    fn test_error_replaces_hint() {
        let field = Field::text("name").hint("Your full name");
        let html = render(field.clone(), Value::Null, Some("Too short"));
        assert!(html.contains("Too short"));
        assert!(!html.contains("Your full name"));

        let html = render(field, Value::Null, None);
        assert!(html.contains("Your full name"));
    }

    #[test]
    fn test_labels_and_markers() {
        let html = render(
            Field::email("email").label("Email").required(true).readonly(true),
            Value::Null,
            None,
        );
        assert!(html.contains(r#"<label for="email""#));
        assert!(html.contains(r#"<span class="text-red-500 ml-1">*</span></label>"#));
        assert!(html.contains(r#"type="email" name="email" id="email""#));
        assert!(html.contains(" required"));
        assert!(html.contains(" readonly"));
        assert!(!html.contains(" disabled"));

        let html = render(Field::checkbox("terms").label("Accept"), Value::Null, None);
        assert!(!html.contains("<label for="));
        assert!(html.contains("Accept</span>"));
    }

    #[test]
    fn test_text_is_escaped_once() {
        let html = render(
            Field::text("q").label("Q & A"),
            Value::from("<b>\"hi\"</b>"),
            Some("Bad & worse"),
        );
        assert!(html.contains("Q &amp; A</label>"));
        assert!(html.contains(r#"value="&lt;b&gt;&quot;hi&quot;&lt;/b&gt;""#));
        assert!(html.contains("Bad &amp; worse"));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn test_hidden_field() {
        let html = render(Field::hidden("id"), Value::from(42), None);
        assert_eq!(html, r#"<div class="hidden"><input type="hidden" name="id" value="42"></div>"#);
    }

    #[test]
    fn test_prefix_and_suffix() {
        let html = render(Field::text("weight").prefix("~").suffix("kg"), Value::Null, None);
        assert!(html.contains(r#"class="input w-full pl-8 pr-8""#));
        assert!(html.contains(">kg</span>"));
        assert!(!html.contains("data-suffix"));
    }

    #[test]
    fn test_tabs_panels_are_gated() {
        let tabs = Tabs::make()
            .tab("general", crate::layout::Tab::new("General", [Field::text("name")]))
            .tab("pricing", crate::layout::Tab::new("Pricing", [Field::money("price")]));
        let values = DataBag::new();
        let errors = FieldErrors::new();
        let html = TailwindRenderer::new()
            .render_layout(&tabs.into(), &RenderContext::new(&values, &errors));

        assert!(html.contains(r#"x-data="{ activeTab: &#039;general&#039; }""#));
        assert!(html.contains(r#"<div x-show="activeTab === &#039;pricing&#039;" class="pt-4">"#));
        assert_eq!(html.matches("<div x-show=").count(), 2);
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_row_columns_follow_children() {
        let row = Row::make([Field::text("a"), Field::text("b")]);
        let values = DataBag::new();
        let errors = FieldErrors::new();
        let html = TailwindRenderer::new()
            .render_layout(&row.into(), &RenderContext::new(&values, &errors));
        assert!(html.starts_with(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-4">"#));
    }
}
