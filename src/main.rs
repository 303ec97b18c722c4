use std::process::ExitCode;

fn main() -> ExitCode {
    match circular_buffer::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(circular_buffer::errors::get_exit_code(&e))
        }
    }
}
