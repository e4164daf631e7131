use forerunner::{PrimitiveType, StructSchema};

/// # Define a schema and print it
///
/// Builds the classic *User* schema, prints it as JSON and as YAML. The YAML
/// output goes through `serde`, showing that a defined schema serializes to
/// exactly the same document as `to_json`.
///
/// ```bash
/// cargo run -p forerunner --example define_user
/// ```
fn main() -> anyhow::Result<()> {
    let schema = StructSchema::define("User", Some("A user object with personal information"), |user| {
        user.string("name")
            .description("The name of the user")
            .min_length(1)
            .max_length(100)
            .required();
        user.int("age").description("The age of the user").min(0).max(150);
        user.boolean("is_active")
            .description("Is the user active?")
            .default_value(true);
        user.array("tags")
            .description("Tags associated with the user")
            .items(PrimitiveType::String)
            .min_items(0)
            .max_items(10);
        user.object("address", |address| {
            address.string("street").description("Street name").required();
            address.string("city").description("City name").required();
            address.string("zip").description("ZIP code").required();
        })
        .description("The address of the user");
    });

    println!("{}", schema.to_json()?);
    println!("---");
    println!("{}", serde_yaml::to_string(&schema)?);

    Ok(())
}
