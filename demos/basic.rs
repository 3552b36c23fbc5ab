use json_schema_to_types::{SchemaConverter, SchemaNode, Target, generate};

fn main() {
    // Example 1: Simple object
    let schema1 = r#"{
        "title": "Person Record",
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "age": { "type": "integer" },
            "email": { "type": "string" }
        }
    }"#;

    println!("=== Example 1: Simple Object (rust) ===");
    println!("{}", generate(schema1, Target::Rust).unwrap());

    // Example 2: Array root
    let schema2 = r#"{
        "title": "Todo List",
        "type": "array",
        "items": {
            "type": "object",
            "title": "Todo",
            "properties": {
                "id": { "type": "integer" },
                "title": { "type": "string" },
                "done": { "type": "boolean" }
            }
        }
    }"#;

    println!("=== Example 2: Array (java) ===");
    println!("{}", generate(schema2, Target::Java).unwrap());

    // Example 3: Complex nested object
    let schema3 = r#"{
        "title": "Settings",
        "type": "object",
        "properties": {
            "config": {
                "type": "object",
                "properties": {
                    "theme": { "type": "string" },
                    "notifications": {
                        "type": "object",
                        "properties": {
                            "email": { "type": "boolean" },
                            "push": { "type": "boolean" }
                        }
                    }
                }
            }
        }
    }"#;

    println!("=== Example 3: Complex Nested Object (luau) ===");
    println!("{}", generate(schema3, Target::Luau).unwrap());

    // Example 4: Inspecting the declaration list
    let schema = SchemaNode::from_json(schema3).unwrap();
    let generation = SchemaConverter::new().convert(&schema).unwrap();

    println!("=== Example 4: Declaration order ===");
    for declaration in &generation.declarations {
        println!("{} ({} fields)", declaration.name, declaration.fields.len());
    }
}
