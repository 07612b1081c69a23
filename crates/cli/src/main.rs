use std::process::ExitCode;

fn main() -> ExitCode {
    subscripter_cli::run()
}
