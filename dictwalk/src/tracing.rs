//! Adapters for `tracing`.
//!
//! - [`TracingMaskedExt`] logs a masked copy of a value as a display string.
//! - [`LoggedMap`](crate::LoggedMap) emits a `DEBUG` event for every access it
//!   records.
//!
//! # Example
//!
//! ```ignore
//! use dictwalk::{TargetKeys, tracing::TracingMaskedExt};
//!
//! tracing::info!(payload = %payload.tracing_masked(&TargetKeys::pii()));
//! ```

use ::tracing::field::{DisplayValue, display};

use crate::{
    logged::Access,
    transform::{TargetKeys, mask_values},
    value::{Map, Value},
};

/// Extension trait for logging masked values as display strings.
pub trait TracingMaskedExt {
    /// Masks `self` under `targets` and wraps the result for `tracing`.
    fn tracing_masked(&self, targets: &TargetKeys) -> DisplayValue<String>;
}

impl TracingMaskedExt for Value {
    fn tracing_masked(&self, targets: &TargetKeys) -> DisplayValue<String> {
        display(mask_values(self, targets).to_string())
    }
}

impl TracingMaskedExt for Map {
    fn tracing_masked(&self, targets: &TargetKeys) -> DisplayValue<String> {
        display(mask_values(&Value::Map(self.clone()), targets).to_string())
    }
}

pub(crate) fn emit_access(access: &Access) {
    ::tracing::debug!(
        op = ?access.op,
        key = %access.key,
        value = access.value.as_deref().unwrap_or("<missing>"),
        location = %access.location,
        "logged map access"
    );
}
