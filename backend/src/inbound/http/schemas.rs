//! OpenAPI schema definitions for types that do not derive `ToSchema`.
//!
//! The domain error and the pagination metadata stay framework-agnostic, so
//! their schemas are mirrored here in the inbound adapter layer.

use utoipa::ToSchema;

/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Storage is temporarily unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// API error response payload.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "start must not be after end")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "6f1f6a2e-9c1b-4a55-8d3e-0c9a3f1b2c4d")]
    trace_id: Option<String>,
    /// Field and code of a validation failure.
    #[schema(example = json!({"field": "start", "code": "start_after_end"}))]
    details: Option<serde_json::Value>,
}

/// Page metadata of a collection response.
#[derive(ToSchema)]
#[schema(as = PageMetadata, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageMetadataSchema {
    /// Requested page size.
    #[schema(example = 20)]
    size: u32,
    /// Number of events in the collection.
    #[schema(example = 50)]
    total_elements: u64,
    /// Number of pages at this size.
    #[schema(example = 3)]
    total_pages: u64,
    /// Zero-based page index.
    #[schema(example = 0)]
    number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        for code in [
            "invalid_request",
            "not_found",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[rstest]
    fn error_schema_uses_wire_field_names() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }

    #[rstest]
    fn page_metadata_schema_is_camel_case() {
        let schema_json = schema_to_json::<PageMetadataSchema>();
        assert!(schema_json.contains("totalElements"));
        assert!(schema_json.contains("totalPages"));
    }
}
