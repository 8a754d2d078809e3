//! Method factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{FibError, FibMethod};
use crate::golden::GoldenRatio;
use crate::recursive::NaiveRecursion;

/// Factory trait for creating methods.
pub trait MethodFactory: Send + Sync {
    /// Get or create a method by name.
    fn get(&self, name: &str) -> Result<Arc<dyn FibMethod>, FibError>;

    /// List all available method names, in presentation order.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn FibMethod>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_method(name: &str) -> Result<Arc<dyn FibMethod>, FibError> {
        match name {
            "golden" | "binet" => Ok(Arc::new(GoldenRatio::new())),
            "recursive" | "naive" => Ok(Arc::new(NaiveRecursion::new())),
            _ => Err(FibError::UnknownMethod(name.to_string())),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn FibMethod>, FibError> {
        if let Some(method) = self.cache.read().get(name) {
            return Ok(Arc::clone(method));
        }

        let method = Self::create_method(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&method));
        Ok(method)
    }

    fn available(&self) -> Vec<&str> {
        vec!["golden", "recursive"]
    }
}
