//! Error handling and exit codes.

use std::process::ExitCode;

use fibdemo_core::calculator::FibError;
use fibdemo_core::constants::exit_codes;

/// Map a demonstration error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::NegativeIndex(_) | FibError::IndexOutOfRange(_) | FibError::UnknownMethod(_) => {
            exit_codes::ERROR_INVALID_INPUT
        }
    }
}

/// Convert an exit code constant into a process `ExitCode`.
pub fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
