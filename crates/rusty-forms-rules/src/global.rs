// File: src/global.rs
// Purpose: Process-wide validator for callers that don't carry their own registry

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::engine::{FieldError, FormValidator};
use crate::form::Form;
use crate::registry::RuleRegistry;

static GLOBAL_VALIDATOR: Lazy<RwLock<FormValidator>> = Lazy::new(|| RwLock::new(FormValidator::default()));

// Guards are only held for a clone or a single insert, never while predicates
// or caller closures run. A panic during an insert (e.g. a replaced predicate
// panicking on drop) poisons the lock, but the map is still consistent.
fn read() -> RwLockReadGuard<'static, FormValidator> {
    GLOBAL_VALIDATOR.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, FormValidator> {
    GLOBAL_VALIDATOR.write().unwrap_or_else(PoisonError::into_inner)
}

/// Validate with the process-wide registry (built-ins plus anything registered).
///
/// Runs on a copy of the registry, so predicates may register rules; those
/// take effect from the next call.
pub fn validate_form<F: Form + ?Sized>(form: &F) -> Vec<String> {
    snapshot().validate_form(form)
}

pub fn validate_form_detailed<F: Form + ?Sized>(form: &F) -> Vec<FieldError> {
    snapshot().validate_form_detailed(form)
}

/// Register (or replace) a rule in the process-wide registry
pub fn register_validator<F>(name: impl Into<String>, predicate: F, message: impl Into<String>)
where
    F: Fn(&str, &str) -> bool + Send + Sync + 'static,
{
    write().register_validator(name, predicate, message);
}

/// Read access to a copy of the process-wide registry
pub fn with_registry<R>(f: impl FnOnce(&RuleRegistry) -> R) -> R {
    let validator = snapshot();
    f(validator.registry())
}

/// Copy of the process-wide validator, for isolated use
pub fn snapshot() -> FormValidator {
    read().clone()
}
