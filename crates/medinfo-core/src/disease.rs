//! Disease records, the single entity of the catalog.
//!
//! A record is identified by a store-assigned integer id. Its five text
//! fields are always replaced together; there is no partial update.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── DiseaseRecord ───────────────────────────────────────────────────────────

/// A persisted catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
  /// Assigned by the store on creation; never reused after deletion.
  pub id:                 i64,
  pub name:               String,
  pub symptoms:           String,
  pub causes:             String,
  pub prevention:         String,
  /// Care guidance: when the condition warrants medical attention.
  pub when_to_see_doctor: String,
}

impl DiseaseRecord {
  /// Attach a store-assigned id to a set of fields.
  pub fn from_fields(id: i64, fields: DiseaseFields) -> Self {
    Self {
      id,
      name: fields.name,
      symptoms: fields.symptoms,
      causes: fields.causes,
      prevention: fields.prevention,
      when_to_see_doctor: fields.when_to_see_doctor,
    }
  }

  /// Whether this record answers a lowercased keyword query: the query
  /// occurs in the name, symptoms or causes, or the name occurs in the
  /// query. Case folding is Unicode-aware on both sides.
  pub fn matches(&self, query: &str) -> bool {
    let name = self.name.to_lowercase();
    name.contains(query)
      || self.symptoms.to_lowercase().contains(query)
      || self.causes.to_lowercase().contains(query)
      || query.contains(name.as_str())
  }

  /// The record's fields without its id.
  pub fn fields(&self) -> DiseaseFields {
    DiseaseFields {
      name:               self.name.clone(),
      symptoms:           self.symptoms.clone(),
      causes:             self.causes.clone(),
      prevention:         self.prevention.clone(),
      when_to_see_doctor: self.when_to_see_doctor.clone(),
    }
  }
}

// ─── DiseaseFields ───────────────────────────────────────────────────────────

/// Input to create, update and seeding: every textual field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseFields {
  pub name:               String,
  pub symptoms:           String,
  pub causes:             String,
  pub prevention:         String,
  pub when_to_see_doctor: String,
}

impl DiseaseFields {
  pub fn new(
    name: impl Into<String>,
    symptoms: impl Into<String>,
    causes: impl Into<String>,
    prevention: impl Into<String>,
    when_to_see_doctor: impl Into<String>,
  ) -> Self {
    Self {
      name:               name.into(),
      symptoms:           symptoms.into(),
      causes:             causes.into(),
      prevention:         prevention.into(),
      when_to_see_doctor: when_to_see_doctor.into(),
    }
  }

  /// Reject records with an empty (or whitespace-only) field, naming the
  /// first offending field in declaration order.
  pub fn validate(&self) -> Result<()> {
    let fields = [
      ("name", &self.name),
      ("symptoms", &self.symptoms),
      ("causes", &self.causes),
      ("prevention", &self.prevention),
      ("when_to_see_doctor", &self.when_to_see_doctor),
    ];
    match fields.into_iter().find(|(_, v)| v.trim().is_empty()) {
      Some((name, _)) => Err(Error::MissingField(name)),
      None => Ok(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fields() -> DiseaseFields {
    DiseaseFields::new("Flu", "fever", "virus", "vaccine", "if breathless")
  }

  #[test]
  fn complete_fields_validate() {
    assert!(fields().validate().is_ok());
  }

  #[test]
  fn blank_field_is_reported_by_name() {
    let mut f = fields();
    f.causes = "   ".into();
    assert!(matches!(f.validate(), Err(Error::MissingField("causes"))));
  }

  #[test]
  fn first_blank_field_wins() {
    let mut f = fields();
    f.name.clear();
    f.when_to_see_doctor.clear();
    assert!(matches!(f.validate(), Err(Error::MissingField("name"))));
  }

  #[test]
  fn matching_folds_non_ascii_capitals() {
    let record = DiseaseRecord::from_fields(
      1,
      DiseaseFields::new("Ébola", "Fièvre", "Virus Ébola", "Éviter", "Urgence"),
    );
    assert!(record.matches("ébola"));
    assert!(record.matches("fièvre"));
    assert!(record.matches("ébola symptoms"));
    assert!(!record.matches("dengue"));
  }

  #[test]
  fn record_serialises_with_snake_case_keys() {
    let record = DiseaseRecord::from_fields(7, fields());
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["when_to_see_doctor"], "if breathless");
    assert_eq!(record.fields(), fields());
  }
}
