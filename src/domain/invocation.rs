use crate::error::PaymentError;
use serde::Serialize;

/// A logical service and method known to the sidecar's routing table.
///
/// Both names are interpolated into the invocation URL path, so they are
/// restricted to a single path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationTarget {
    service: String,
    method: String,
}

impl InvocationTarget {
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Result<Self, PaymentError> {
        let service = service.into();
        let method = method.into();
        validate_segment("service", &service)?;
        validate_segment("method", &method)?;
        Ok(Self { service, method })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

fn validate_segment(kind: &str, segment: &str) -> Result<(), PaymentError> {
    if segment.trim().is_empty() {
        return Err(PaymentError::ValidationError(format!(
            "Target {kind} name must not be empty"
        )));
    }
    if segment.contains(['/', '?', '#']) {
        return Err(PaymentError::ValidationError(format!(
            "Target {kind} name '{segment}' must be a single path segment"
        )));
    }
    Ok(())
}

/// The raw reply the sidecar returned for an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidecarResponse {
    pub status: u16,
    pub body: String,
}

impl SidecarResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
