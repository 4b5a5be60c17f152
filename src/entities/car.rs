//! Car records and the raw form input they are built from

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::ValidationError;
use crate::value_enum;

/// Listings older than this are rejected as typos
pub const MIN_YEAR: i32 = 1900;

value_enum!(
    /// Gearbox kind.
    Transmission, "transmission", {
        Manual => "manual",
        Automatic => "automatic",
        Robot => "robot",
    }
);

value_enum!(
    /// Body style.
    ///
    /// Canonical set: the union of the styles the original detail view and
    /// edit form each recognized, so every previously valid record parses.
    BodyType, "bodyType", {
        Sedan => "sedan",
        Liftback => "liftback",
        Hatchback => "hatchback",
        Truck => "truck",
        Suv => "suv",
        Coupe => "coupe",
        Wagon => "wagon",
    }
);

value_enum!(
    /// How the engine is fueled.
    EngineType, "engineType", {
        Petrol => "petrol",
        Diesel => "diesel",
        Electric => "electric",
    }
);

value_enum!(
    /// Which axle is driven.
    DriveType, "driveType", {
        Front => "front",
        Rear => "rear",
        All => "all",
    }
);

/// A vehicle listing in the catalog.
///
/// `id` and `created_at` are assigned by the store at creation and never
/// change afterwards; every other field is replaceable through an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Opaque unique identifier, immutable
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub engine_type: EngineType,
    pub drive_type: DriveType,
    pub horsepower: u32,
    /// 0-100 km/h time in seconds
    pub acceleration: f64,
    /// Displacement in liters; 0 for electric drivetrains
    pub engine_volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Build a new car from raw form input, assigning a fresh id and the
    /// current timestamp. Fails with `ValidationError` on the first field
    /// constraint the input breaks.
    pub fn new(input: &CarInput) -> Result<Self, ValidationError> {
        Ok(input.validated()?.into_car(Uuid::new_v4(), Utc::now()))
    }

    /// Replace every mutable field from raw form input, keeping `id` and
    /// `created_at` from `self`.
    pub fn with_input(&self, input: &CarInput) -> Result<Self, ValidationError> {
        Ok(input.validated()?.into_car(self.id, self.created_at))
    }
}

impl Entity for Car {
    fn resource_name() -> &'static str {
        "car"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Raw car form payload as supplied by an input widget.
///
/// Enum-valued fields arrive as plain strings and numbers arrive unchecked;
/// nothing here is trusted until [`CarInput::validated`] has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub transmission: String,
    pub body_type: String,
    pub engine_type: String,
    pub drive_type: String,
    pub horsepower: i64,
    pub acceleration: f64,
    pub engine_volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fully checked car attributes, ready to combine with an identity
pub(crate) struct CarAttrs {
    brand: String,
    model: String,
    year: i32,
    transmission: Transmission,
    body_type: BodyType,
    engine_type: EngineType,
    drive_type: DriveType,
    horsepower: u32,
    acceleration: f64,
    engine_volume: f64,
    image_url: Option<String>,
    description: Option<String>,
}

impl CarAttrs {
    pub(crate) fn into_car(self, id: Uuid, created_at: DateTime<Utc>) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            year: self.year,
            transmission: self.transmission,
            body_type: self.body_type,
            engine_type: self.engine_type,
            drive_type: self.drive_type,
            horsepower: self.horsepower,
            acceleration: self.acceleration,
            engine_volume: self.engine_volume,
            image_url: self.image_url,
            description: self.description,
            created_at,
        }
    }
}

impl CarInput {
    /// Check every field constraint and parse the enum-valued strings.
    ///
    /// Returns on the first violation; the caller applies nothing on error,
    /// so a rejected input never partially mutates a record.
    pub(crate) fn validated(&self) -> Result<CarAttrs, ValidationError> {
        let brand = required_text("brand", &self.brand)?;
        let model = required_text("model", &self.model)?;

        let max_year = Utc::now().year() + 1;
        if self.year < MIN_YEAR || self.year > max_year {
            return Err(ValidationError::new(
                "year",
                format!("must be between {} and {}", MIN_YEAR, max_year),
            ));
        }

        let horsepower = u32::try_from(self.horsepower)
            .map_err(|_| ValidationError::new("horsepower", "must be a non-negative integer"))?;
        let acceleration = non_negative("acceleration", self.acceleration)?;
        let engine_volume = non_negative("engineVolume", self.engine_volume)?;

        let image_url = match self.image_url.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(url) if is_http_url(url) => Some(url.to_string()),
            Some(_) => {
                return Err(ValidationError::new(
                    "imageUrl",
                    "must be an http(s) URL",
                ));
            }
        };

        Ok(CarAttrs {
            brand,
            model,
            year: self.year,
            transmission: self.transmission.parse()?,
            body_type: self.body_type.parse()?,
            engine_type: self.engine_type.parse()?,
            drive_type: self.drive_type.parse()?,
            horsepower,
            acceleration,
            engine_volume,
            image_url,
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        })
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new(field, "must not be empty"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    // NaN and infinities are rejected along with negatives
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::new(field, "must be a non-negative number"))
    }
}

fn is_http_url(url: &str) -> bool {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
    regex.is_match(url)
}

/// Known-good input shared by unit tests across the crate
#[cfg(test)]
pub(crate) fn sample_input() -> CarInput {
    CarInput {
        brand: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: 2022,
        transmission: "automatic".to_string(),
        body_type: "sedan".to_string(),
        engine_type: "petrol".to_string(),
        drive_type: "front".to_string(),
        horsepower: 249,
        acceleration: 7.8,
        engine_volume: 3.5,
        image_url: None,
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_parse_accepts_every_wire_value() {
        for value in BodyType::VALUES {
            let parsed: BodyType = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
        assert_eq!("in".parse::<DriveType>().unwrap_err().field, "driveType");
    }

    #[test]
    fn enum_serde_matches_from_str() {
        let json = serde_json::to_string(&BodyType::Suv).unwrap();
        assert_eq!(json, "\"suv\"");
        let back: BodyType = serde_json::from_str("\"liftback\"").unwrap();
        assert_eq!(back, BodyType::Liftback);
    }

    #[test]
    fn new_car_gets_identity_and_timestamp() {
        let before = Utc::now();
        let car = Car::new(&sample_input()).unwrap();
        assert_eq!(car.brand, "Toyota");
        assert_eq!(car.transmission, Transmission::Automatic);
        assert!(car.created_at >= before && car.created_at <= Utc::now());

        let other = Car::new(&sample_input()).unwrap();
        assert_ne!(car.id, other.id);
    }

    #[test]
    fn with_input_preserves_identity() {
        let car = Car::new(&sample_input()).unwrap();
        let mut input = sample_input();
        input.model = "Corolla".to_string();
        input.horsepower = 122;

        let updated = car.with_input(&input).unwrap();
        assert_eq!(updated.id, car.id);
        assert_eq!(updated.created_at, car.created_at);
        assert_eq!(updated.model, "Corolla");
        assert_eq!(updated.horsepower, 122);
    }

    #[test]
    fn rejects_blank_brand() {
        let mut input = sample_input();
        input.brand = "   ".to_string();
        let err = Car::new(&input).unwrap_err();
        assert_eq!(err.field, "brand");
    }

    #[test]
    fn rejects_year_out_of_range() {
        let mut input = sample_input();
        input.year = 1899;
        assert_eq!(Car::new(&input).unwrap_err().field, "year");

        input.year = Utc::now().year() + 2;
        assert_eq!(Car::new(&input).unwrap_err().field, "year");

        // Next year's models are already listed
        input.year = Utc::now().year() + 1;
        assert!(Car::new(&input).is_ok());
    }

    #[test]
    fn rejects_negative_numbers() {
        let mut input = sample_input();
        input.horsepower = -1;
        assert_eq!(Car::new(&input).unwrap_err().field, "horsepower");

        let mut input = sample_input();
        input.acceleration = -0.1;
        assert_eq!(Car::new(&input).unwrap_err().field, "acceleration");

        let mut input = sample_input();
        input.engine_volume = f64::NAN;
        assert_eq!(Car::new(&input).unwrap_err().field, "engineVolume");
    }

    #[test]
    fn zero_engine_volume_is_valid_for_electric() {
        let mut input = sample_input();
        input.engine_type = "electric".to_string();
        input.engine_volume = 0.0;
        let car = Car::new(&input).unwrap();
        assert_eq!(car.engine_type, EngineType::Electric);
        assert_eq!(car.engine_volume, 0.0);
    }

    #[test]
    fn image_url_must_look_like_http() {
        let mut input = sample_input();
        input.image_url = Some("not a url".to_string());
        assert_eq!(Car::new(&input).unwrap_err().field, "imageUrl");

        input.image_url = Some("https://cdn.example.com/camry.jpg".to_string());
        let car = Car::new(&input).unwrap();
        assert_eq!(
            car.image_url.as_deref(),
            Some("https://cdn.example.com/camry.jpg")
        );

        // Blank means "no image", not an error
        input.image_url = Some("".to_string());
        assert_eq!(Car::new(&input).unwrap().image_url, None);
    }

    #[test]
    fn record_serializes_camel_case() {
        let car = Car::new(&sample_input()).unwrap();
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["bodyType"], "sedan");
        assert_eq!(json["engineVolume"], 3.5);
        assert!(json.get("image_url").is_none());
    }
}
