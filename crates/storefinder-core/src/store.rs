//! Store records as they appear in the dealer dataset.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every day of the week, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Capitalized English day name, e.g. `"Monday"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekly opening schedule: an open and a close time per day.
///
/// A missing, `null`, or blank time means the store is closed that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationHours {
    pub monday_open_time: Option<String>,
    pub monday_close_time: Option<String>,
    pub tuesday_open_time: Option<String>,
    pub tuesday_close_time: Option<String>,
    pub wednesday_open_time: Option<String>,
    pub wednesday_close_time: Option<String>,
    pub thursday_open_time: Option<String>,
    pub thursday_close_time: Option<String>,
    pub friday_open_time: Option<String>,
    pub friday_close_time: Option<String>,
    pub saturday_open_time: Option<String>,
    pub saturday_close_time: Option<String>,
    pub sunday_open_time: Option<String>,
    pub sunday_close_time: Option<String>,
}

impl OperationHours {
    /// Returns the `(open, close)` pair for `day` when both sides are present.
    #[must_use]
    pub fn for_day(&self, day: Weekday) -> Option<(&str, &str)> {
        let (open, close) = match day {
            Weekday::Monday => (&self.monday_open_time, &self.monday_close_time),
            Weekday::Tuesday => (&self.tuesday_open_time, &self.tuesday_close_time),
            Weekday::Wednesday => (&self.wednesday_open_time, &self.wednesday_close_time),
            Weekday::Thursday => (&self.thursday_open_time, &self.thursday_close_time),
            Weekday::Friday => (&self.friday_open_time, &self.friday_close_time),
            Weekday::Saturday => (&self.saturday_open_time, &self.saturday_close_time),
            Weekday::Sunday => (&self.sunday_open_time, &self.sunday_close_time),
        };
        let open = non_blank(open.as_deref())?;
        let close = non_blank(close.as_deref())?;
        Some((open, close))
    }

    /// Returns a copy with `day` set to the given times.
    #[must_use]
    pub fn with_day(mut self, day: Weekday, open: &str, close: &str) -> Self {
        let (open_slot, close_slot) = match day {
            Weekday::Monday => (&mut self.monday_open_time, &mut self.monday_close_time),
            Weekday::Tuesday => (&mut self.tuesday_open_time, &mut self.tuesday_close_time),
            Weekday::Wednesday => (&mut self.wednesday_open_time, &mut self.wednesday_close_time),
            Weekday::Thursday => (&mut self.thursday_open_time, &mut self.thursday_close_time),
            Weekday::Friday => (&mut self.friday_open_time, &mut self.friday_close_time),
            Weekday::Saturday => (&mut self.saturday_open_time, &mut self.saturday_close_time),
            Weekday::Sunday => (&mut self.sunday_open_time, &mut self.sunday_close_time),
        };
        *open_slot = Some(open.to_string());
        *close_slot = Some(close.to_string());
        self
    }

    /// Same open/close times on every day of the week.
    #[must_use]
    pub fn every_day(open: &str, close: &str) -> Self {
        Weekday::ALL
            .into_iter()
            .fold(Self::default(), |hours, day| hours.with_day(day, open, close))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// A retail outlet from the dealer dataset.
///
/// Coordinates are kept exactly as supplied; converting them to numbers is
/// left to the map framing code so malformed source data is never lost.
///
/// The short `id`/`lat`/`lng` keys are accepted as aliases, but a record
/// still needs `pincode`, `phoneNumber` and `dealerOperationHours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(rename = "dealerId", alias = "id", deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub area: String,
    #[serde(deserialize_with = "lenient_string")]
    pub pincode: String,
    #[serde(alias = "lat", deserialize_with = "lenient_string")]
    pub latitude: String,
    #[serde(alias = "lng", deserialize_with = "lenient_string")]
    pub longitude: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub additional_phones: String,
    pub dealer_operation_hours: OperationHours,
    /// `0.0` means the store has not been rated.
    #[serde(default, deserialize_with = "lenient_rating")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_optional_string")]
    pub store_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub store_page_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_services")]
    pub services: BTreeMap<String, serde_json::Value>,
}

impl Store {
    #[must_use]
    pub fn has_rating(&self) -> bool {
        self.average_rating > 0.0
    }

    /// `"{city}, {state} - {pincode}"`.
    #[must_use]
    pub fn locality_line(&self) -> String {
        format!("{}, {} - {}", self.city, self.state, self.pincode)
    }

    /// Primary phone followed by any additional numbers.
    #[must_use]
    pub fn phone_line(&self) -> String {
        let extra = self.additional_phones.trim();
        if extra.is_empty() {
            self.phone_number.clone()
        } else {
            format!("{}, {extra}", self.phone_number)
        }
    }
}

/// Accepts a JSON string or number; `null` becomes the empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

/// Like [`lenient_string`], but `null` and blank text become `None`.
fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_string(deserializer)?;
    Ok(Some(value).filter(|s| !s.trim().is_empty()))
}

fn lenient_services<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_json() -> serde_json::Value {
        serde_json::json!({
            "dealerId": "D-100",
            "name": "Bandra Store",
            "address": "Linking Road, Bandra West",
            "pincode": "400050",
            "latitude": "19.0596",
            "longitude": "72.8295",
            "phoneNumber": "022-5550100",
            "dealerOperationHours": {
                "mondayOpenTime": "10:00",
                "mondayCloseTime": "20:00"
            },
            "state": "Maharashtra",
            "city": "Mumbai"
        })
    }

    #[test]
    fn store_optional_fields_default() {
        let store: Store = serde_json::from_value(store_json()).unwrap();
        assert_eq!(store.id, "D-100");
        assert_eq!(store.area, "");
        assert_eq!(store.additional_phones, "");
        assert!((store.average_rating - 0.0).abs() < f64::EPSILON);
        assert!(store.services.is_empty());
        assert!(store.store_type.is_none());
    }

    #[test]
    fn store_accepts_numeric_coordinates_and_short_keys() {
        let store: Store = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Bandra Store",
            "address": "Linking Road",
            "pincode": 400_050,
            "lat": 19.0596,
            "lng": 72.8295,
            "phoneNumber": "022-5550100",
            "dealerOperationHours": {},
            "state": "Maharashtra",
            "city": "Mumbai"
        }))
        .unwrap();
        assert_eq!(store.id, "3");
        assert_eq!(store.latitude, "19.0596");
        assert_eq!(store.longitude, "72.8295");
        assert_eq!(store.pincode, "400050");
    }

    #[test]
    fn store_null_optionals_default() {
        let mut value = store_json();
        value["services"] = serde_json::Value::Null;
        value["type"] = serde_json::Value::Null;
        value["storePageUrl"] = serde_json::Value::Null;
        value["area"] = serde_json::Value::Null;
        let store: Store = serde_json::from_value(value).unwrap();
        assert!(store.services.is_empty());
        assert!(store.store_type.is_none());
        assert!(store.store_page_url.is_none());
        assert_eq!(store.area, "");
    }

    #[test]
    fn store_numeric_type_is_text() {
        let mut value = store_json();
        value["type"] = serde_json::json!(3);
        let store: Store = serde_json::from_value(value).unwrap();
        assert_eq!(store.store_type.as_deref(), Some("3"));
    }

    #[test]
    fn short_keys_still_need_dealer_fields() {
        let err = serde_json::from_value::<Store>(serde_json::json!({
            "id": 3,
            "name": "Bandra Store",
            "address": "Linking Road",
            "lat": 19.0596,
            "lng": 72.8295,
            "state": "Maharashtra",
            "city": "Mumbai"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("pincode"), "{err}");
    }

    #[test]
    fn store_missing_required_field_fails() {
        let mut value = store_json();
        value.as_object_mut().unwrap().remove("dealerOperationHours");
        let err = serde_json::from_value::<Store>(value).unwrap_err();
        assert!(err.to_string().contains("dealerOperationHours"), "{err}");
    }

    #[test]
    fn store_null_rating_is_unrated() {
        let mut value = store_json();
        value["averageRating"] = serde_json::Value::Null;
        let store: Store = serde_json::from_value(value).unwrap();
        assert!(!store.has_rating());
    }

    #[test]
    fn for_day_requires_both_times() {
        let hours = OperationHours {
            tuesday_open_time: Some("09:00".to_string()),
            tuesday_close_time: Some("   ".to_string()),
            ..OperationHours::default()
        }
        .with_day(Weekday::Monday, "09:00", "18:00");
        assert_eq!(hours.for_day(Weekday::Monday), Some(("09:00", "18:00")));
        assert_eq!(hours.for_day(Weekday::Tuesday), None);
        assert_eq!(hours.for_day(Weekday::Sunday), None);
    }

    #[test]
    fn phone_line_appends_additional_numbers() {
        let mut store: Store = serde_json::from_value(store_json()).unwrap();
        assert_eq!(store.phone_line(), "022-5550100");
        store.additional_phones = "022-5550101".to_string();
        assert_eq!(store.phone_line(), "022-5550100, 022-5550101");
    }

    #[test]
    fn locality_line_format() {
        let store: Store = serde_json::from_value(store_json()).unwrap();
        assert_eq!(store.locality_line(), "Mumbai, Maharashtra - 400050");
    }
}
