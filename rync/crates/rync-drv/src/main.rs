use std::process::ExitCode;

fn main() -> ExitCode {
    match rync_drv::run(std::env::args().skip(1)) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("error: {}", err);
            if err.is_usage_error() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
