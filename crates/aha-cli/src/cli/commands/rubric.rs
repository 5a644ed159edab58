use crate::exit_codes::SUCCESS;

pub fn run() -> anyhow::Result<i32> {
    println!("{}", aha_core::rubric::GRADING_INSTRUCTIONS);
    Ok(SUCCESS)
}
