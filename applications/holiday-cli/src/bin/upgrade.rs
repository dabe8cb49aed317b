/// HolidayDuino upgrade checker
use holiday_cli::{args::UpgradeArgs, commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    holiday_cli::logging::init();

    let args: UpgradeArgs = holiday_cli::args::parse_or_exit();

    let mut stdout = std::io::stdout().lock();
    let result = commands::upgrade::execute(args, &mut stdout);
    ExitCode::from(holiday_cli::report(result, &mut stdout))
}
