//! Product Form Example
//!
//! Builds a product schema, validates a submission against it and prints
//! the rendered form followed by its Alpine.js component script.
//!
//! Logs go to `product_form.log`.

use std::fs::File;

use formloom::prelude::*;
use formloom::reactive::x_error;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

// ============================================================================
// Schema
// ============================================================================

struct ProductSchema;

impl Schema for ProductSchema {
    fn fields() -> Vec<Node> {
        vec![
            Section::make("Product")
                .icon("fas fa-box")
                .description("What you sell and how it is identified")
                .children([
                    Node::from(Row::make([
                        Node::from(
                            Field::text("name")
                                .label("Name")
                                .required(true)
                                .max_length(255)
                                .placeholder("Enter product name")
                                .show_in_table(true)
                                .sortable(true)
                                .searchable(true),
                        ),
                        Node::from(
                            Field::text("sku")
                                .label("SKU")
                                .max_length(50)
                                .placeholder("SKU-001")
                                .show_in_table(true)
                                .searchable(true),
                        ),
                    ])),
                    Node::from(
                        Field::textarea("description")
                            .label("Description")
                            .rows(3)
                            .placeholder("Product description"),
                    ),
                    Node::from(
                        Field::select("category_id")
                            .label("Category")
                            .empty_option("-- Select Category --")
                            .options([("1", "Hardware"), ("2", "Groceries")])
                            .show_in_table(true),
                    ),
                ])
                .into(),
            Section::make("Pricing")
                .collapsible(true)
                .children([Row::make([
                    Node::from(
                        Field::money("cost_price")
                            .label("Cost price")
                            .currency("RWF")
                            .min(0)
                            .show_in_table(true)
                            .table_align("right"),
                    ),
                    Node::from(
                        Field::money("selling_price")
                            .label("Selling price")
                            .currency("RWF")
                            .required(true)
                            .min(0)
                            .show_in_table(true)
                            .table_align("right"),
                    ),
                    Node::from(
                        Field::number("min_stock_level")
                            .label("Minimum stock")
                            .min(0)
                            .default(0)
                            .hint("Alert when stock falls below this level"),
                    ),
                ])])
                .into(),
            Field::toggle("is_active")
                .label("Active")
                .default(true)
                .show_in_table(true)
                .into(),
            Field::hidden("organization_id").into(),
        ]
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("product_form.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let submission = [
        ("name", Value::from("Hammer")),
        ("selling_price", Value::from("-5")),
        ("min_stock_level", Value::from(3)),
    ];

    let form = ProductSchema::form().action("/products");
    let validator = form.validator(submission.clone());

    let form = form
        .values(submission)
        .errors(validator.first_errors());

    println!("{}", form.render_with_form());
    println!();
    println!("{}", ReactiveAdapter::make(&form).to_script()?);
    println!();
    println!("<p {}></p>", x_error("selling_price"));

    let columns: Vec<&str> = form.table_fields().iter().map(|field| field.name()).collect();
    println!("table columns: {}", columns.join(", "));

    Ok(())
}
