use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InputError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TireCompound {
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
    /// Anything else the form sent. Applies no compound rule.
    Other(String),
}

impl TireCompound {
    pub fn parse(s: &str) -> Self {
        match s {
            "Soft" => TireCompound::Soft,
            "Medium" => TireCompound::Medium,
            "Hard" => TireCompound::Hard,
            "Intermediate" => TireCompound::Intermediate,
            "Wet" => TireCompound::Wet,
            other => TireCompound::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TireCompound::Soft => "Soft",
            TireCompound::Medium => "Medium",
            TireCompound::Hard => "Hard",
            TireCompound::Intermediate => "Intermediate",
            TireCompound::Wet => "Wet",
            TireCompound::Other(s) => s,
        }
    }
}

impl fmt::Display for TireCompound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TireCompound {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TireCompound {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TireCompound::parse(&s))
    }
}

/// Parsed conditions for one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionInput {
    /// km/h
    pub straight_line_speed: f64,
    pub tire_compound: TireCompound,
    /// °C
    pub air_temperature: f64,
    /// mm
    pub rainfall: f64,
    /// degrees, [0, 360)
    pub wind_direction: f64,
    pub wind_speed: f64,
}

impl ConditionInput {
    /// Rejects non-finite numbers before they reach the rule table.
    pub fn ensure_finite(&self) -> Result<(), InputError> {
        let fields = [
            ("st_speed", self.straight_line_speed),
            ("air_temperature", self.air_temperature),
            ("rainfall", self.rainfall),
            ("wind_direction", self.wind_direction),
            ("wind_speed", self.wind_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        Ok(())
    }
}

/// A form value as it arrives on the wire: usually text, sometimes a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<f64> for FormValue {
    fn from(v: f64) -> Self {
        FormValue::Number(v)
    }
}

/// The input boundary record, one field per form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st_speed: Option<FormValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound: Option<FormValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_temperature: Option<FormValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<FormValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<FormValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<FormValue>,
}

impl RawConditions {
    pub fn from_text(
        st_speed: &str,
        compound: &str,
        air_temperature: &str,
        rainfall: &str,
        wind_direction: &str,
        wind_speed: &str,
    ) -> Self {
        Self {
            st_speed: Some(st_speed.into()),
            compound: Some(compound.into()),
            air_temperature: Some(air_temperature.into()),
            rainfall: Some(rainfall.into()),
            wind_direction: Some(wind_direction.into()),
            wind_speed: Some(wind_speed.into()),
        }
    }

    /// Validates every field and builds the engine input.
    ///
    /// Presence is checked for all fields first, in form order, so the first
    /// reported error for an incomplete form is always the missing field.
    pub fn parse(&self) -> Result<ConditionInput, InputError> {
        let st_speed = required("st_speed", &self.st_speed)?;
        let compound = required("compound", &self.compound)?;
        let air_temperature = required("air_temperature", &self.air_temperature)?;
        let rainfall = required("rainfall", &self.rainfall)?;
        let wind_direction = required("wind_direction", &self.wind_direction)?;
        let wind_speed = required("wind_speed", &self.wind_speed)?;

        let tire_compound = match compound {
            FormValue::Text(s) => TireCompound::parse(s),
            FormValue::Number(v) => TireCompound::Other(v.to_string()),
        };

        let input = ConditionInput {
            straight_line_speed: number("st_speed", st_speed)?,
            tire_compound,
            air_temperature: number("air_temperature", air_temperature)?,
            rainfall: number("rainfall", rainfall)?,
            wind_direction: number("wind_direction", wind_direction)?,
            wind_speed: number("wind_speed", wind_speed)?,
        };

        if input.rainfall < 0.0 {
            return Err(InputError::OutOfRange {
                field: "rainfall",
                value: input.rainfall,
                expected: ">= 0",
            });
        }
        if input.wind_speed < 0.0 {
            return Err(InputError::OutOfRange {
                field: "wind_speed",
                value: input.wind_speed,
                expected: ">= 0",
            });
        }
        if !(0.0..360.0).contains(&input.wind_direction) {
            return Err(InputError::OutOfRange {
                field: "wind_direction",
                value: input.wind_direction,
                expected: "[0, 360)",
            });
        }

        Ok(input)
    }
}

fn required<'a>(field: &'static str, v: &'a Option<FormValue>) -> Result<&'a FormValue, InputError> {
    v.as_ref().ok_or(InputError::MissingField { field })
}

fn number(field: &'static str, v: &FormValue) -> Result<f64, InputError> {
    let parsed = match v {
        FormValue::Number(n) => *n,
        FormValue::Text(s) => s.trim().parse::<f64>().map_err(|_| InputError::NotANumber {
            field,
            value: s.clone(),
        })?,
    };
    if !parsed.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RawConditions {
        RawConditions::from_text("312", "Medium", "24.5", "0", "180", "12")
    }

    #[test]
    fn parses_text_fields() {
        let c = form().parse().unwrap();
        assert_eq!(c.straight_line_speed, 312.0);
        assert_eq!(c.tire_compound, TireCompound::Medium);
        assert_eq!(c.air_temperature, 24.5);
        assert_eq!(c.wind_direction, 180.0);
    }

    #[test]
    fn accepts_json_numbers_and_padding() {
        let raw: RawConditions = serde_json::from_str(
            r#"{"st_speed": 335, "compound": "Wet", "air_temperature": " 12 ",
                "rainfall": 7.5, "wind_direction": "0", "wind_speed": 3}"#,
        )
        .unwrap();
        let c = raw.parse().unwrap();
        assert_eq!(c.straight_line_speed, 335.0);
        assert_eq!(c.air_temperature, 12.0);
        assert_eq!(c.tire_compound, TireCompound::Wet);
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut raw = form();
        raw.rainfall = None;
        raw.wind_speed = None;
        assert_eq!(
            raw.parse(),
            Err(InputError::MissingField { field: "rainfall" })
        );
    }

    #[test]
    fn rejects_garbage_and_non_finite() {
        let mut raw = form();
        raw.st_speed = Some("fast".into());
        assert!(matches!(
            raw.parse(),
            Err(InputError::NotANumber { field: "st_speed", .. })
        ));

        let mut raw = form();
        raw.air_temperature = Some("NaN".into());
        assert_eq!(
            raw.parse(),
            Err(InputError::NonFinite { field: "air_temperature" })
        );

        let mut raw = form();
        raw.wind_speed = Some("inf".into());
        assert_eq!(raw.parse(), Err(InputError::NonFinite { field: "wind_speed" }));
    }

    #[test]
    fn range_checks() {
        let mut raw = form();
        raw.rainfall = Some("-1".into());
        assert!(matches!(raw.parse(), Err(InputError::OutOfRange { field: "rainfall", .. })));

        let mut raw = form();
        raw.wind_direction = Some("360".into());
        assert!(matches!(
            raw.parse(),
            Err(InputError::OutOfRange { field: "wind_direction", .. })
        ));

        let mut raw = form();
        raw.wind_speed = Some("-0.5".into());
        assert!(matches!(raw.parse(), Err(InputError::OutOfRange { field: "wind_speed", .. })));
    }

    #[test]
    fn unknown_compound_is_kept_verbatim() {
        let mut raw = form();
        raw.compound = Some("Hypersoft".into());
        let c = raw.parse().unwrap();
        assert_eq!(c.tire_compound, TireCompound::Other("Hypersoft".into()));
        assert_eq!(c.tire_compound.to_string(), "Hypersoft");
    }

    #[test]
    fn compound_match_is_exact() {
        let mut raw = form();
        raw.compound = Some(" Soft ".into());
        assert_eq!(raw.parse().unwrap().tire_compound, TireCompound::Other(" Soft ".into()));

        raw.compound = Some("soft".into());
        assert_eq!(raw.parse().unwrap().tire_compound, TireCompound::Other("soft".into()));
    }

    #[test]
    fn ensure_finite_catches_direct_construction() {
        let mut c = form().parse().unwrap();
        assert!(c.ensure_finite().is_ok());
        c.rainfall = f64::NAN;
        assert_eq!(c.ensure_finite(), Err(InputError::NonFinite { field: "rainfall" }));
    }
}
