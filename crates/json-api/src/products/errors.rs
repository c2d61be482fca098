//! Product Errors

use tracing::error;

use market_app::domain::products::ProductsServiceError;

use crate::responses::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound(_) => ApiError::not_found("Product not found"),
        ProductsServiceError::RequiredField(field) => {
            ApiError::bad_request(format!("Field required: {field}"))
        }
        ProductsServiceError::QualityField(field) => {
            ApiError::bad_request(format!("Invalid field: {field}"))
        }
        ProductsServiceError::IdsExhausted => {
            error!("no product ids left to assign");

            ApiError::internal_server_error()
        }
        ProductsServiceError::Storage(source) => {
            error!("product storage failed: {source}");

            ApiError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use market_app::storage::StorageError;
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn not_found_maps_to_404_whatever_the_tag() {
        assert_eq!(
            into_api_error(ProductsServiceError::NotFound("price")),
            ApiError::not_found("Product not found")
        );
    }

    #[test]
    fn validation_failures_name_the_field() {
        assert_eq!(
            into_api_error(ProductsServiceError::RequiredField("name")),
            ApiError::bad_request("Field required: name")
        );
        assert_eq!(
            into_api_error(ProductsServiceError::QualityField("code_value")),
            ApiError::bad_request("Invalid field: code_value")
        );
    }

    #[test]
    fn storage_failures_are_internal_errors() {
        let error = into_api_error(ProductsServiceError::Storage(StorageError::Io(
            io::Error::other("disk full"),
        )));

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn exhausted_ids_are_internal_errors() {
        assert_eq!(
            into_api_error(ProductsServiceError::IdsExhausted),
            ApiError::internal_server_error()
        );
    }
}
