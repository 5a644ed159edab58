use crate::cli::args::{Cli, Command};
use crate::exit_codes::SUCCESS;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Score(args) => super::score::run(args).await,
        Command::Validate(args) => super::validate::run(&args),
        Command::Rubric => super::rubric::run(),
        Command::Init(args) => super::init::run(&args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
