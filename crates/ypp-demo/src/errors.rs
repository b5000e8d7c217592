//! Error handling and exit codes.

use ypp_cli::CheckFailure;
use ypp_math::exit_codes;
use ypp_math::MathError;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &MathError) -> i32 {
    match err {
        MathError::NegativeIndex(_)
        | MathError::Overflow(_)
        | MathError::RecursionLimit { .. }
        | MathError::InvalidDimension { .. }
        | MathError::NoValidResults => exit_codes::ERROR_GENERIC,
        MathError::Config(_) => exit_codes::ERROR_CONFIG,
        MathError::Mismatch(_) => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for the outcome of a whole run.
pub fn exit_code(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => exit_code_for(err),
    }
}

/// Map any application error to its exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(math) = err.downcast_ref::<MathError>() {
        handle_error(math)
    } else if err.downcast_ref::<CheckFailure>().is_some() {
        exit_codes::ERROR_CHECK_FAILED
    } else {
        exit_codes::ERROR_GENERIC
    }
}
