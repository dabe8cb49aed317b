/// HolidayDuino globe-count setter
use holiday_cli::{args::GlobesArgs, commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    holiday_cli::logging::init();

    let args: GlobesArgs = holiday_cli::args::parse_or_exit();

    let mut stdout = std::io::stdout().lock();
    let result = commands::globes::execute(args, &mut stdout);
    ExitCode::from(holiday_cli::report(result, &mut stdout))
}
