use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// The Madrid districts a [`HousingRecord`](crate::record::HousingRecord) can belong to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum District {
    #[serde(rename = "Chamberí")]
    Chamberi,
    Salamanca,
    Arganzuela,
    #[serde(rename = "Moncloa-Aravaca")]
    MoncloaAravaca,
    Retiro,
    Centro,
    #[serde(rename = "Chamartín")]
    Chamartin,
    #[serde(rename = "Tetuán")]
    Tetuan,
    #[serde(rename = "Fuencarral-El Pardo")]
    FuencarralElPardo,
    Carabanchel,
}

impl District {
    /// Every district, in the fixed order used for sampling
    pub const ALL: [District; 10] = [
        District::Chamberi,
        District::Salamanca,
        District::Arganzuela,
        District::MoncloaAravaca,
        District::Retiro,
        District::Centro,
        District::Chamartin,
        District::Tetuan,
        District::FuencarralElPardo,
        District::Carabanchel,
    ];

    /// Name as written to the CSV output
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            District::Chamberi => "Chamberí",
            District::Salamanca => "Salamanca",
            District::Arganzuela => "Arganzuela",
            District::MoncloaAravaca => "Moncloa-Aravaca",
            District::Retiro => "Retiro",
            District::Centro => "Centro",
            District::Chamartin => "Chamartín",
            District::Tetuan => "Tetuán",
            District::FuencarralElPardo => "Fuencarral-El Pardo",
            District::Carabanchel => "Carabanchel",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for District {
    type Err = GenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        District::ALL
            .into_iter()
            .find(|district| district.name() == s)
            .ok_or_else(|| GenError::UnknownDistrict(s.to_owned()))
    }
}

impl Distribution<District> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> District {
        District::ALL[rng.gen_range(0..District::ALL.len())]
    }
}
