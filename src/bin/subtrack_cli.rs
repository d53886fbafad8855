use std::process::ExitCode;

fn main() -> ExitCode {
    subtrack::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(subtrack::cli::run(&args) as u8)
}
