//! Order quantity query parsing helpers.

use salvo::oapi::extract::QueryParam;

use crate::errors::ApiError;

pub(crate) trait QuantityExt {
    fn into_quantity(self, max: u64) -> Result<u64, ApiError>;
}

impl QuantityExt for QueryParam<String, false> {
    fn into_quantity(self, max: u64) -> Result<u64, ApiError> {
        parse_quantity(self.into_inner().as_deref(), max)
    }
}

fn parse_quantity(raw: Option<&str>, max: u64) -> Result<u64, ApiError> {
    let raw = raw
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::bad_request("missing query param 'x'"))?;

    let value = raw
        .parse::<i64>()
        .map_err(|_err| ApiError::bad_request("'x' must be an integer"))?;

    let quantity =
        u64::try_from(value).map_err(|_err| ApiError::bad_request("'x' must be >= 0"))?;

    if quantity > max {
        return Err(ApiError::bad_request("'x' is too large"));
    }

    Ok(quantity)
}
