use std::ops::RangeInclusive;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::district::District;
use crate::error::GenError;

pub const PRICE_RANGE: RangeInclusive<u32> = 200_000..=800_000;
pub const YEAR_OF_BUILDING_RANGE: RangeInclusive<u16> = 1900..=2020;
pub const SQUARE_METERS_RANGE: RangeInclusive<u16> = 50..=200;

/// Column names, in output order
pub const HEADER: [&str; 4] = ["Price", "Year_of_Building", "Square_Meters", "District"];

/// One synthetic row of the housing dataset.
/// Every field is drawn independently, see the [`Distribution`] impl below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HousingRecord {
    #[serde(rename = "Price")]
    pub price: u32,
    #[serde(rename = "Year_of_Building")]
    pub year_of_building: u16,
    #[serde(rename = "Square_Meters")]
    pub square_meters: u16,
    #[serde(rename = "District")]
    pub district: District,
}

impl HousingRecord {
    #[must_use]
    pub fn new(price: u32, year_of_building: u16, square_meters: u16, district: District) -> Self {
        HousingRecord {
            price,
            year_of_building,
            square_meters,
            district,
        }
    }

    /// # Errors
    /// Errors with [`GenError::OutOfRange`] naming the first numeric field outside its domain
    pub fn validate(&self) -> Result<(), GenError> {
        check_range(HEADER[0], self.price, &PRICE_RANGE)?;
        check_range(HEADER[1], self.year_of_building, &YEAR_OF_BUILDING_RANGE)?;
        check_range(HEADER[2], self.square_meters, &SQUARE_METERS_RANGE)
    }
}

fn check_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), GenError>
where
    T: PartialOrd + Into<i64>,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(GenError::OutOfRange {
            field,
            value: value.into(),
        })
    }
}

impl Distribution<HousingRecord> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> HousingRecord {
        HousingRecord {
            price: rng.gen_range(PRICE_RANGE),
            year_of_building: rng.gen_range(YEAR_OF_BUILDING_RANGE),
            square_meters: rng.gen_range(SQUARE_METERS_RANGE),
            district: rng.gen(),
        }
    }
}
