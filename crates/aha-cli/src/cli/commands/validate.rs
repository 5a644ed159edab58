use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::exit_codes::{INVALID_VERDICT, SUCCESS};
use aha_core::scoring::response::parse_verdict;
use std::io::Read;

pub fn run(args: &ValidateArgs) -> anyhow::Result<i32> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let verdict = parse_verdict(&text);
    match args.format {
        OutputFormat::Json => {
            let value = match &verdict {
                Some(v) => serde_json::json!({
                    "valid": true,
                    "category": v.category,
                    "score": v.score,
                }),
                None => serde_json::json!({"valid": false, "score": 0}),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => match &verdict {
            Some(v) => println!("valid: category={} score={}", v.category.letter(), v.score),
            None => println!("invalid: response fails the verdict format, scores 0"),
        },
    }
    Ok(if verdict.is_some() { SUCCESS } else { INVALID_VERDICT })
}
