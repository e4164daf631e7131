use forerunner::StructSchema;
use forerunner::openai::{ResponseFormat, ToolSpec};
use serde::Serialize;

/// Minimal request body, enough to show where the payloads go.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    response_format: ResponseFormat,
    tools: Vec<ToolSpec>,
}

/// # Strict schemas for OpenAI structured outputs
///
/// Strict mode marks every declared field as required and disallows extra
/// properties, which is what OpenAI's `strict: true` structured outputs
/// demand. The same schema is shown as a `response_format` and as a
/// function-calling tool.
///
/// ```bash
/// cargo run -p forerunner --example openai_format
/// ```
fn main() -> anyhow::Result<()> {
    let extraction = StructSchema::define("contact_card", Some("Contact details found in the text"), |card| {
        card.string("full_name");
        card.email("email").nullable(true);
        card.array("phones").object_items(|phone| {
            phone.enumeration("kind", ["mobile", "work", "home"]);
            phone.string("number").pattern(r"^\+?[0-9 ]+$");
            phone.strict();
        });
        card.strict();
    });

    let lookup = StructSchema::define("lookup_company", Some("Find a company by name"), |args| {
        args.string("name");
        args.strict();
    });

    let request = ChatRequest {
        model: "gpt-4o-mini",
        response_format: ResponseFormat::json_schema(&extraction)?,
        tools: vec![ToolSpec::try_from(&lookup)?],
    };

    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
