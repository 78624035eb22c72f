//! Employee record and lookup entities.

use std::borrow::Cow;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::DATE_FORMAT;
use crate::error::{DomainError, DomainResult};
use crate::validation::{self, Entry, FieldResult};

/// Employee gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| DomainError::invalid_variant("gender", s))
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// NA flag (Y/N)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaFlag {
    Y,
    N,
}

impl NaFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            NaFlag::Y => "Y",
            NaFlag::N => "N",
        }
    }
}

impl FromStr for NaFlag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Y" => Ok(NaFlag::Y),
            "N" => Ok(NaFlag::N),
            other => Err(DomainError::invalid_variant("naFlag", other)),
        }
    }
}

impl std::fmt::Display for NaFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DomainError::invalid_date(s))
}

/// Employee record as exchanged with the employee service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Six-digit identifier, immutable once created
    pub emp_id: String,
    pub emp_name: String,
    pub phone: String,
    pub address: String,
    pub age: u8,
    pub gender: Gender,
    pub role_name: String,
    pub role_number: String,
    pub from_date: NaiveDate,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub to_date: Option<NaiveDate>,
    pub na_flag: NaFlag,
    #[serde(deserialize_with = "lookup_id")]
    pub directorate: String,
    #[serde(deserialize_with = "lookup_id")]
    pub division: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl EmployeeRecord {
    /// Run every field validator against the record, in field order.
    pub fn field_results(&self) -> Vec<(&'static str, FieldResult)> {
        let from = Entry::Valid(self.from_date);
        let to = self.to_date.map_or(Entry::Empty, Entry::Valid);
        vec![
            ("empId", validation::validate_emp_id(&self.emp_id)),
            ("empName", validation::validate_emp_name(&self.emp_name)),
            ("phone", validation::validate_phone(&self.phone)),
            ("address", validation::validate_address(&self.address)),
            ("age", validation::validate_age(&self.age.to_string())),
            ("roleName", validation::validate_role_name(&self.role_name)),
            ("roleNumber", validation::validate_role_number(&self.role_number)),
            ("toDate", validation::validate_to_date(&to, &from)),
            (
                "directorate",
                validation::validate_directorate(Some(&self.directorate)),
            ),
            ("division", validation::validate_division(Some(&self.division))),
            ("email", validation::validate_email(self.email.as_deref().unwrap_or(""))),
        ]
    }
}

impl Validate for EmployeeRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut failed = false;
        for (field, result) in self.field_results() {
            if let Err(rejection) = result {
                let mut error = ValidationError::new("employee");
                error.message = Some(Cow::Owned(rejection.into_message()));
                errors.add(field, error);
                failed = true;
            }
        }

        if failed {
            Err(errors)
        } else {
            Ok(())
        }
    }
}

/// Directorate lookup entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directorate {
    #[serde(deserialize_with = "lookup_id")]
    pub directorate_id: String,
    pub name: String,
}

/// Division lookup entry.
///
/// The filtered endpoint omits the owning directorate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    #[serde(deserialize_with = "lookup_id")]
    pub division_id: String,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_lookup_id"
    )]
    pub directorate_id: Option<String>,
}

/// Lookup ids arrive as strings or numbers depending on the backing table.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

fn lookup_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn optional_lookup_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_date(s.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> EmployeeRecord {
        EmployeeRecord {
            emp_id: "123456".to_string(),
            emp_name: "JOHN DOE".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG ROAD, PUNE".to_string(),
            age: 30,
            gender: Gender::Male,
            role_name: "ENGINEER".to_string(),
            role_number: "42".to_string(),
            from_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            to_date: None,
            na_flag: NaFlag::N,
            directorate: "1".to_string(),
            division: "11".to_string(),
            email: None,
        }
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let value = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(value["empId"], "123456");
        assert_eq!(value["age"], 30);
        assert_eq!(value["fromDate"], "2024-01-10");
        assert_eq!(value["toDate"], serde_json::Value::Null);
        assert_eq!(value["naFlag"], "N");
        assert_eq!(value["gender"], "Male");
        assert_eq!(value["email"], serde_json::Value::Null);
    }

    #[test]
    fn test_record_reads_numeric_lookup_ids_and_empty_to_date() {
        let value = json!({
            "empId": "123456",
            "empName": "JOHN DOE",
            "phone": "9876543210",
            "address": "12 MG ROAD",
            "age": 30,
            "gender": "Female",
            "roleName": "CLERK",
            "roleNumber": "7",
            "fromDate": "2024-01-10",
            "toDate": "",
            "naFlag": "Y",
            "directorate": 3,
            "division": "31"
        });

        let record: EmployeeRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.directorate, "3");
        assert_eq!(record.division, "31");
        assert_eq!(record.to_date, None);
        assert_eq!(record.email, None);
        assert_eq!(record.gender, Gender::Female);
    }

    #[test]
    fn test_division_without_directorate() {
        let division: Division =
            serde_json::from_value(json!({ "divisionId": 5, "name": "NETWORK" })).unwrap();
        assert_eq!(division.division_id, "5");
        assert_eq!(division.directorate_id, None);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Other".parse::<Gender>(), Ok(Gender::Other));
        assert!("male".parse::<Gender>().is_err());
        assert_eq!("Y".parse::<NaFlag>(), Ok(NaFlag::Y));
        assert!("X".parse::<NaFlag>().is_err());
    }

    #[test]
    fn test_valid_record_passes_validate() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn test_invalid_record_reports_each_field() {
        let mut record = sample_record();
        record.emp_name = "JOHNNN".to_string();
        record.age = 17;
        record.to_date = NaiveDate::from_ymd_opt(2024, 1, 9);

        let errors = record.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("empName"));
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("toDate"));
        assert_eq!(fields.len(), 3);
    }
}
