use targeting_snippets::{AttributeSchema, FormatOptions, SdkLanguage};

pub fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/attribute-schema.json".to_owned());
    let json = std::fs::read_to_string(&path).unwrap();
    let schema = AttributeSchema::from_json(&json).unwrap();

    let mut options = FormatOptions::new();
    if let Ok(salt) = std::env::var("SECURE_ATTRIBUTE_SALT") {
        options.hash_secure_attributes(salt);
    }
    if let Ok(version) = std::env::var("SDK_VERSION") {
        options.version(version);
    }
    let renderer = options.to_renderer();

    for language in SdkLanguage::ALL {
        let Some(snippet) = renderer.render(Some(&schema), language) else {
            println!("== {language}: no snippet\n");
            continue;
        };

        println!("== {language}");
        for note in &snippet.notes {
            println!("{note}");
        }
        if let Some(block) = &snippet.code {
            println!("```{}\n{}\n```", block.language, block.code);
        }
        println!();
    }
}
