//! Keyword responder: the "chatbot" behind `POST /chatbot`.
//!
//! A query is lowercased and handed to the store, which returns the first
//! record (in insertion order) that matches by substring. Category keywords in
//! the query then narrow the reply to a single section. There is no ranking,
//! tokenisation or spelling correction.

use serde::Serialize;

use crate::{Result, catalog::store_err, disease::DiseaseRecord, store::DiseaseStore};

/// Reply used when no record matches the query.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't find information \
  about that. Try asking about diseases like diabetes, dengue, malaria, \
  common cold, or hypertension. You can ask about symptoms, causes, or \
  prevention.";

// ─── Sections ────────────────────────────────────────────────────────────────

/// One labelled part of a rendered reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
  Symptoms,
  Causes,
  Prevention,
  WhenToSeeDoctor,
}

impl Section {
  pub const ALL: [Section; 4] =
    [Self::Symptoms, Self::Causes, Self::Prevention, Self::WhenToSeeDoctor];

  pub fn label(self) -> &'static str {
    match self {
      Self::Symptoms => "Symptoms",
      Self::Causes => "Causes",
      Self::Prevention => "Prevention",
      Self::WhenToSeeDoctor => "When to see a doctor",
    }
  }

  fn text(self, record: &DiseaseRecord) -> &str {
    match self {
      Self::Symptoms => &record.symptoms,
      Self::Causes => &record.causes,
      Self::Prevention => &record.prevention,
      Self::WhenToSeeDoctor => &record.when_to_see_doctor,
    }
  }
}

/// Category rules, checked in this order; the first rule with a keyword
/// present in the query decides the section.
const RULES: &[(&[&str], Section)] = &[
  (&["symptom"], Section::Symptoms),
  (&["cause"], Section::Causes),
  (&["prevent", "avoid"], Section::Prevention),
  (&["doctor", "hospital"], Section::WhenToSeeDoctor),
];

/// The sections to render for a lowercased query.
pub fn select_sections(query: &str) -> &'static [Section] {
  let all: &'static [Section] = &Section::ALL;
  RULES
    .iter()
    .find(|(keywords, _)| keywords.iter().any(|k| query.contains(k)))
    .map_or(all, |(_, section)| std::slice::from_ref(section))
}

/// Render `record` as a heading line followed by the requested sections.
pub fn render(record: &DiseaseRecord, sections: &[Section]) -> String {
  let mut out = format!("**{}**", record.name);
  for section in sections {
    out.push_str(&format!("\n\n**{}:**\n{}", section.label(), section.text(record)));
  }
  out
}

// ─── Reply ───────────────────────────────────────────────────────────────────

/// Outcome of answering a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
  pub reply:   String,
  /// The record the reply was rendered from; absent for the fallback.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disease: Option<DiseaseRecord>,
}

impl Reply {
  pub fn fallback() -> Self {
    Self { reply: FALLBACK_REPLY.to_owned(), disease: None }
  }

  pub fn is_fallback(&self) -> bool { self.disease.is_none() }
}

/// Answer a free-text `message` from the catalog in `store`.
pub async fn respond<S: DiseaseStore>(store: &S, message: &str) -> Result<Reply> {
  let query = message.to_lowercase();
  let found = store
    .find_first_match(&query)
    .await
    .map_err(store_err)?;

  Ok(match found {
    None => Reply::fallback(),
    Some(record) => Reply {
      reply:   render(&record, select_sections(&query)),
      disease: Some(record),
    },
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Error, memory::MemoryStore, seed::starter_diseases};

  async fn seeded() -> MemoryStore {
    let s = MemoryStore::default();
    s.seed_if_empty(starter_diseases()).await.unwrap();
    s
  }

  #[test]
  fn rules_are_checked_in_priority_order() {
    assert_eq!(select_sections("symptoms and doctor"), &[Section::Symptoms]);
    assert_eq!(select_sections("what causes it, should i avoid"), &[Section::Causes]);
    assert_eq!(select_sections("how to avoid"), &[Section::Prevention]);
    assert_eq!(select_sections("prevention"), &[Section::Prevention]);
    assert_eq!(select_sections("go to hospital?"), &[Section::WhenToSeeDoctor]);
    assert_eq!(select_sections("tell me"), &Section::ALL);
  }

  #[test]
  fn render_places_sections_under_bold_labels() {
    let record = DiseaseRecord {
      id:                 1,
      name:               "Flu".into(),
      symptoms:           "fever".into(),
      causes:             "virus".into(),
      prevention:         "vaccine".into(),
      when_to_see_doctor: "if breathless".into(),
    };
    assert_eq!(render(&record, &[Section::Causes]), "**Flu**\n\n**Causes:**\nvirus");
    assert_eq!(
      render(&record, &Section::ALL),
      "**Flu**\n\n**Symptoms:**\nfever\n\n**Causes:**\nvirus\n\n\
       **Prevention:**\nvaccine\n\n**When to see a doctor:**\nif breathless"
    );
  }

  #[tokio::test]
  async fn named_disease_with_category_keyword() {
    let s = seeded().await;
    let reply = respond(&s, "Diabetes symptoms").await.unwrap();
    let disease = reply.disease.as_ref().unwrap();
    assert_eq!(disease.name, "Diabetes");
    assert!(reply.reply.starts_with("**Diabetes**"));
    assert!(reply.reply.contains(&disease.symptoms));
    assert!(!reply.reply.contains(&disease.causes));
    assert!(!reply.reply.contains(&disease.prevention));
    assert!(!reply.reply.contains("**Causes:**"));
  }

  #[tokio::test]
  async fn unknown_query_falls_back() {
    let s = seeded().await;
    let reply = respond(&s, "xyzxyz-unknown").await.unwrap();
    assert!(reply.is_fallback());
    assert_eq!(reply.reply, FALLBACK_REPLY);
  }

  #[tokio::test]
  async fn symptom_text_match_takes_first_record_with_all_sections() {
    let s = seeded().await;
    let reply = respond(&s, "fever").await.unwrap();
    assert_eq!(reply.disease.as_ref().unwrap().name, "Dengue");
    for section in Section::ALL {
      assert!(reply.reply.contains(&format!("**{}:**", section.label())));
    }
  }

  #[tokio::test]
  async fn store_failure_is_surfaced() {
    let s = seeded().await;
    s.fail_next();
    assert!(matches!(respond(&s, "fever").await, Err(Error::Storage(_))));
  }
}
