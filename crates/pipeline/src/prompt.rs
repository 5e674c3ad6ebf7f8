//! Prompt construction — renders a schema, query, and optional preferences
//! into one instruction string.
//!
//! Pure functions: same inputs always produce the same prompt. The schema
//! block is derived from the field tables in `wayfinder_core::schema`, so
//! prompts and validation can never drift apart.

use wayfinder_core::context::UserContext;
use wayfinder_core::schema::{FieldType, SchemaKind};

/// Build the prompt for a main completion request.
///
/// Renders, in order: the persona line for `kind`; the preference block
/// when a context is given; the fenced schema block; the JSON-only
/// instruction; the query text.
pub fn build_prompt(kind: SchemaKind, query: &str, context: Option<&UserContext>) -> String {
    compose(kind, None, query, context)
}

/// Build the prompt for the budget-realism pre-check.
pub fn build_budget_check_prompt(query: &str) -> String {
    compose(
        SchemaKind::Budget,
        Some("Evaluate whether the travel budget implied by the query is realistic."),
        query,
        None,
    )
}

fn compose(
    kind: SchemaKind,
    extra_instruction: Option<&str>,
    query: &str,
    context: Option<&UserContext>,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(kind.persona());
    prompt.push('\n');
    if let Some(instruction) = extra_instruction {
        prompt.push_str(instruction);
        prompt.push('\n');
    }
    prompt.push('\n');

    if let Some(ctx) = context {
        prompt.push_str(&render_context(ctx));
        prompt.push('\n');
    }

    prompt.push_str("```json\n");
    prompt.push_str(&schema_block(kind));
    prompt.push_str("\n```\n\n");

    prompt.push_str(
        "Respond ONLY with a JSON object matching this schema. No markdown, no explanation.\n\n",
    );

    prompt.push_str("User query:\n");
    prompt.push_str(query.trim());

    prompt
}

/// Render the kind's field table as a JSON Schema object.
fn schema_block(kind: SchemaKind) -> String {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for field in kind.fields() {
        let mut prop = serde_json::Map::new();
        prop.insert("type".into(), field.ty.json_name().into());
        match field.ty {
            FieldType::TextList => {
                prop.insert("items".into(), serde_json::json!({ "type": "string" }));
            }
            FieldType::Number { min: Some(min) } => {
                prop.insert("minimum".into(), serde_json::json!(min));
            }
            FieldType::Integer { min: Some(min) } => {
                prop.insert("minimum".into(), serde_json::json!(min));
            }
            _ => {}
        }
        prop.insert("description".into(), field.description.into());
        properties.insert(field.name.into(), serde_json::Value::Object(prop));

        if field.required {
            required.push(field.name);
        }
    }

    let schema = serde_json::json!({
        "title": kind.name(),
        "type": "object",
        "properties": properties,
        "required": required,
    });

    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| schema.to_string())
}

fn render_context(ctx: &UserContext) -> String {
    format!(
        "User preferences:\n\
         - Preferred airlines: {}\n\
         - Required hotel amenities: {}\n\
         - Budget level: {}\n\
         - Session start: {}\n",
        join_or_none(&ctx.preferred_airlines),
        join_or_none(&ctx.hotel_amenities),
        ctx.budget_level,
        ctx.session_start.to_rfc3339(),
    )
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".into()
    } else {
        items.join(", ")
    }
}
