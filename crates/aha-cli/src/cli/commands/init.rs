use crate::cli::args::InitArgs;
use crate::exit_codes::SUCCESS;
use std::path::Path;

pub fn run(args: &InitArgs) -> anyhow::Result<i32> {
    if args.config.exists() && !args.force {
        println!("Skipped {} (exists)", args.config.display());
    } else {
        aha_core::config::write_sample_config(&args.config)?;
        println!("Created {}", args.config.display());
    }

    if args.dataset {
        let path = Path::new("samples.jsonl");
        if path.exists() && !args.force {
            println!("Skipped {} (exists)", path.display());
        } else {
            aha_core::dataset::write_sample_dataset(path)?;
            println!("Created {}", path.display());
        }
    }

    println!("Run 'aha score --dataset samples.jsonl' to grade the starter set.");
    Ok(SUCCESS)
}
