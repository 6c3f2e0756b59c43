//! Starter records inserted into an empty catalog on first startup.

use crate::disease::DiseaseFields;

/// The five illustrative diseases, in insertion order.
pub fn starter_diseases() -> Vec<DiseaseFields> {
  vec![
    DiseaseFields::new(
      "Diabetes",
      "Increased thirst, frequent urination, extreme hunger, unexplained \
       weight loss, fatigue, blurred vision, slow-healing sores.",
      "Insulin resistance or insufficient insulin production; risk rises \
       with obesity, physical inactivity, family history and age.",
      "Maintain a healthy weight, exercise regularly, eat a balanced diet \
       low in refined sugar, and get regular blood sugar checks.",
      "If you have persistent high blood sugar readings, very frequent \
       urination, confusion, or wounds that do not heal.",
    ),
    DiseaseFields::new(
      "Dengue",
      "High fever, severe headache, pain behind the eyes, joint and muscle \
       pain, nausea, vomiting, skin rash.",
      "Dengue virus transmitted by the bite of infected Aedes mosquitoes.",
      "Use mosquito repellent, wear long sleeves, remove standing water \
       around the home, and use window screens or bed nets.",
      "Immediately if you notice bleeding gums, blood in vomit, severe \
       abdominal pain, or persistent vomiting.",
    ),
    DiseaseFields::new(
      "Malaria",
      "Fever with chills and sweating, headache, nausea, vomiting, muscle \
       pain, fatigue.",
      "Plasmodium parasites transmitted by the bite of infected Anopheles \
       mosquitoes.",
      "Sleep under insecticide-treated nets, use repellents, take \
       preventive medication when travelling to risk areas.",
      "As soon as fever appears after visiting a malaria-endemic area, or \
       if confusion, seizures or breathing difficulty develop.",
    ),
    DiseaseFields::new(
      "Common Cold",
      "Runny or stuffy nose, sore throat, cough, sneezing, mild headache, \
       low-grade fever.",
      "Viral infection of the upper respiratory tract, most often \
       rhinoviruses, spread through droplets and contaminated surfaces.",
      "Wash hands often, avoid touching your face, and keep distance from \
       people who are sick.",
      "If symptoms last more than ten days, fever is high, or you have \
       trouble breathing.",
    ),
    DiseaseFields::new(
      "Hypertension",
      "Often none; severe cases can cause headaches, shortness of breath, \
       nosebleeds, dizziness or chest pain.",
      "High salt intake, obesity, lack of exercise, stress, smoking, \
       alcohol, genetics and ageing.",
      "Reduce salt, exercise regularly, limit alcohol, avoid tobacco, \
       manage stress and monitor blood pressure.",
      "If readings stay above 140/90, or you have chest pain, severe \
       headache, vision changes or shortness of breath.",
    ),
  ]
}
