//! Method selection logic.

use std::sync::Arc;

use fibdemo_core::calculator::{FibError, FibMethod};
use fibdemo_core::registry::MethodFactory;

/// Get the methods to run for a `--method` selection.
///
/// `"all"` returns every registered method in the factory's order.
pub fn get_methods_to_run(
    selection: &str,
    factory: &dyn MethodFactory,
) -> Result<Vec<Arc<dyn FibMethod>>, FibError> {
    match selection {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
