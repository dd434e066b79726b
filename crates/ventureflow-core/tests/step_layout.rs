use insta::assert_snapshot;
use ventureflow_core::{render_step, RenderedItem};
use ventureflow_domain::{Catalog, FieldValue, ListingData};

const STEPS: usize = 3;

fn describe_steps(category: &str, subcategory: &str, values: &ListingData) -> String {
    let catalog = Catalog::builtin();
    let sub = catalog
        .subcategory(category, subcategory)
        .expect("subcategory exists");
    let mut lines = Vec::new();
    for step in 1..=STEPS {
        for item in render_step(sub, step, STEPS, values).expect("render step") {
            match item {
                RenderedItem::GroupLabel { label, .. } => {
                    lines.push(format!("step {step}: # {label}"));
                }
                RenderedItem::Field(rendered) => {
                    let required = if rendered.field.required { ", required" } else { "" };
                    lines.push(format!(
                        "step {step}: {} ({}{required})",
                        rendered.field.id, rendered.field.field_type
                    ));
                }
            }
        }
    }
    lines.join("\n")
}

#[test]
fn hotel_steps_with_two_room_types() {
    let mut values = ListingData::new();
    values.insert("roomTypes".into(), FieldValue::list(["Suite", "Single"]));
    assert_snapshot!(
        "hotel_steps_with_two_room_types",
        describe_steps("accommodation", "hotels", &values)
    );
}

#[test]
fn villa_steps_without_selections() {
    let rendered = describe_steps("accommodation", "villas", &ListingData::new());
    let first_step: Vec<&str> = rendered
        .lines()
        .filter(|line| line.starts_with("step 1:"))
        .collect();
    assert_eq!(
        first_step,
        vec![
            "step 1: name (text, required)",
            "step 1: location (map, required)",
            "step 1: numberOfBeds (number, required)",
        ]
    );
}
