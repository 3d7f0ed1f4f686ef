//! Request validation: pure logic, no database access.
//!
//! Each check returns the first violated rule. Rules run in a fixed order so
//! the reported message is deterministic for a given request:
//!
//! 1. name, 2. year, 3. brand, 4. fuel type, 5. engine reference, 6. price
//!
//! Engine requests are checked on displacement, cylinders, then range.

use chrono::Datelike;

use crate::models::{CarRequest, Engine, EngineRequest, FuelType};

/// The first year a production car existed.
pub const MIN_CAR_YEAR: i32 = 1886;

/// A violated domain rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("year is required")]
    YearRequired,

    #[error("year must be a valid number")]
    YearNotNumeric,

    #[error("year must be between 1886 and the current year")]
    YearOutOfRange,

    #[error("brand is required")]
    BrandRequired,

    #[error("fuel type must be one of: Petrol, Diesel, Electric, Hybrid")]
    InvalidFuelType,

    #[error("engine id is required")]
    EngineIdRequired,

    #[error("displacement must be greater than 0")]
    DisplacementNotPositive,

    #[error("number of cylinders must be greater than 0")]
    CylindersNotPositive,

    #[error("car range must be greater than 0")]
    CarRangeNotPositive,

    #[error("price must be greater than 0")]
    PriceNotPositive,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Validate an engine create/update request.
pub fn validate_engine_request(input: &EngineRequest) -> Result<(), ValidationError> {
    validate_engine_figures(input.displacement, input.no_of_cylinders, input.car_range)
}

fn validate_engine_figures(
    displacement: i64,
    no_of_cylinders: i64,
    car_range: i64,
) -> Result<(), ValidationError> {
    if displacement <= 0 {
        return Err(ValidationError::DisplacementNotPositive);
    }
    if no_of_cylinders <= 0 {
        return Err(ValidationError::CylindersNotPositive);
    }
    if car_range <= 0 {
        return Err(ValidationError::CarRangeNotPositive);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Car
// ---------------------------------------------------------------------------

/// Validate a car create/update request against the current UTC year.
pub fn validate_car_request(input: &CarRequest) -> Result<(), ValidationError> {
    validate_car_request_at(input, chrono::Utc::now().year())
}

/// Validate a car create/update request with an explicit upper bound for the
/// model year.
pub fn validate_car_request_at(
    input: &CarRequest,
    current_year: i32,
) -> Result<(), ValidationError> {
    validate_name(&input.name)?;
    validate_year(&input.year, current_year)?;
    validate_brand(&input.brand)?;
    validate_fuel_type(&input.fuel_type)?;
    validate_engine_reference(&input.engine)?;
    validate_price(input.price)
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

fn validate_year(year: &str, current_year: i32) -> Result<(), ValidationError> {
    if year.is_empty() {
        return Err(ValidationError::YearRequired);
    }
    let year: i32 = year.parse().map_err(|_| ValidationError::YearNotNumeric)?;
    if !(MIN_CAR_YEAR..=current_year).contains(&year) {
        return Err(ValidationError::YearOutOfRange);
    }
    Ok(())
}

fn validate_brand(brand: &str) -> Result<(), ValidationError> {
    if brand.is_empty() {
        return Err(ValidationError::BrandRequired);
    }
    Ok(())
}

fn validate_fuel_type(fuel_type: &str) -> Result<(), ValidationError> {
    fuel_type.parse::<FuelType>().map(|_| ())
}

fn validate_engine_reference(engine: &Engine) -> Result<(), ValidationError> {
    if engine.engine_id.is_nil() {
        return Err(ValidationError::EngineIdRequired);
    }
    validate_engine_figures(
        engine.displacement,
        engine.no_of_cylinders,
        engine.car_range,
    )
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::PriceNotPositive);
    }
    Ok(())
}
