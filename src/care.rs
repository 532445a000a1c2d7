//! Care recommendations: treatments, specialists and hospitals.
//!
//! Specialists and hospitals come from CSV directories loaded at startup.
//! Without a directory, general fallback entries are returned so the
//! endpoint always has something useful to show.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const MAX_TREATMENTS: usize = 6;
const MAX_SPECIALISTS: usize = 5;
const MAX_HOSPITALS: usize = 5;
const MAX_TREATS_CHARS: usize = 150;

/// Errors raised while loading a care directory.
#[derive(Debug, Error)]
pub enum CareError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ==================== Treatments ====================

/// Condition keyword -> suggested treatments, in matching order.
static TREATMENTS: &[(&str, &[&str])] = &[
    (
        "diabetes",
        &[
            "Blood sugar monitoring and HbA1c tests",
            "Dietary consultation with a nutritionist",
            "Oral medication or insulin therapy as prescribed",
            "Regular foot and eye examinations",
            "Lifestyle modifications and exercise program",
        ],
    ),
    (
        "heart",
        &[
            "ECG and echocardiogram tests",
            "Blood pressure monitoring",
            "Cholesterol management medication",
            "Cardiac rehabilitation program",
            "Stress management and dietary changes",
        ],
    ),
    (
        "hypertension",
        &[
            "Regular blood pressure monitoring",
            "Antihypertensive medication as prescribed",
            "Low-sodium diet plan",
            "Regular cardiovascular exercise",
            "Stress reduction techniques",
        ],
    ),
    (
        "fever",
        &[
            "Blood tests to identify infection",
            "Antipyretic medication (paracetamol)",
            "Rest and adequate hydration",
            "Monitor temperature regularly",
            "Seek immediate care if fever persists over 3 days",
        ],
    ),
    (
        "pain",
        &[
            "Physical examination to identify source",
            "Pain management medication",
            "Physiotherapy if musculoskeletal",
            "Imaging tests if needed (X-ray, MRI)",
            "Follow-up consultation based on diagnosis",
        ],
    ),
    (
        "respiratory",
        &[
            "Chest X-ray and pulmonary function tests",
            "Bronchodilator or inhaler therapy",
            "Antibiotics if bacterial infection suspected",
            "Steam inhalation and rest",
            "Avoid smoking and pollutants",
        ],
    ),
    (
        "skin",
        &[
            "Dermatological examination",
            "Topical medications or creams",
            "Allergy tests if needed",
            "Skin biopsy for suspicious lesions",
            "Sun protection and skincare routine",
        ],
    ),
    (
        "mental",
        &[
            "Psychological assessment",
            "Counseling or therapy sessions",
            "Medication if recommended by psychiatrist",
            "Support group participation",
            "Stress management and lifestyle changes",
        ],
    ),
    (
        "gastro",
        &[
            "Endoscopy or colonoscopy if needed",
            "Dietary modifications",
            "Antacids or proton pump inhibitors",
            "Probiotic supplements",
            "Stress reduction and regular meal times",
        ],
    ),
];

static GENERAL_TREATMENTS: &[&str] = &[
    "Complete blood count (CBC) and basic metabolic panel",
    "Physical examination by a general physician",
    "Diagnostic tests based on symptoms",
    "Medication as prescribed by doctor",
    "Follow-up appointment for monitoring",
];

/// Suggested treatments for every condition keyword found in the condition
/// or the symptoms, at most six.
pub fn treatments(condition: &str, symptoms: &str) -> Vec<String> {
    let condition = condition.to_lowercase();
    let symptoms = symptoms.to_lowercase();

    let mut found: Vec<String> = TREATMENTS
        .iter()
        .filter(|(keyword, _)| condition.contains(keyword) || symptoms.contains(keyword))
        .flat_map(|(_, list)| list.iter().map(|t| t.to_string()))
        .collect();

    if found.is_empty() {
        found = GENERAL_TREATMENTS.iter().map(|t| t.to_string()).collect();
    }
    found.truncate(MAX_TREATMENTS);
    found
}

// ==================== Specialists ====================

#[derive(Debug, Clone, Deserialize)]
struct SpecialistRow {
    #[serde(rename = "Specialist")]
    specialist: String,
    #[serde(rename = "Diseases_Treated", default)]
    diseases_treated: String,
}

/// A specialist suggested for a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialist {
    pub specialist: String,
    pub treats: String,
    /// Number of search words found in the diseases treated
    pub match_score: usize,
}

/// Specialists and the diseases they treat.
#[derive(Debug, Clone, Default)]
pub struct SpecialistDirectory {
    rows: Vec<SpecialistRow>,
}

impl SpecialistDirectory {
    /// Load a `Specialist,Diseases_Treated` CSV file.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, CareError> {
        let rows = read_csv(path.as_ref())?;
        Ok(Self { rows })
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            rows: entries
                .into_iter()
                .map(|(specialist, diseases)| SpecialistRow {
                    specialist: specialist.into(),
                    diseases_treated: diseases.into(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Top five specialists by the number of search words (longer than two
    /// characters) found in the diseases they treat. Equal scores keep
    /// directory order.
    pub fn find(&self, condition: &str, symptoms: &str) -> Vec<Specialist> {
        let search = format!("{} {}", condition, symptoms).to_lowercase();
        let words: Vec<&str> = search
            .split_whitespace()
            .filter(|word| word.chars().count() > 2)
            .collect();

        let mut found: Vec<Specialist> = self
            .rows
            .iter()
            .filter_map(|row| {
                let diseases = row.diseases_treated.to_lowercase();
                let score = words.iter().filter(|word| diseases.contains(*word)).count();
                (score > 0).then(|| Specialist {
                    specialist: row.specialist.clone(),
                    treats: truncate_treats(&row.diseases_treated),
                    match_score: score,
                })
            })
            .collect();

        if found.is_empty() {
            return vec![
                Specialist {
                    specialist: "General Practitioner".to_string(),
                    treats: "General health conditions, initial consultations".to_string(),
                    match_score: 0,
                },
                Specialist {
                    specialist: "Internal Medicine Specialist".to_string(),
                    treats: "General adult medical conditions".to_string(),
                    match_score: 0,
                },
            ];
        }

        // sort_by is stable
        found.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        found.truncate(MAX_SPECIALISTS);
        found
    }
}

fn truncate_treats(diseases: &str) -> String {
    if diseases.chars().count() > MAX_TREATS_CHARS {
        let head: String = diseases.chars().take(MAX_TREATS_CHARS).collect();
        format!("{}...", head)
    } else {
        diseases.to_string()
    }
}

// ==================== Hospitals ====================

#[derive(Debug, Clone, Deserialize)]
struct HospitalRow {
    #[serde(rename = "Hospital")]
    hospital: String,
    #[serde(rename = "District", default)]
    district: String,
    #[serde(rename = "Type", default)]
    kind: String,
}

/// A hospital suggested for a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hospital {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub note: String,
}

impl Hospital {
    fn new(name: &str, kind: &str, note: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            note: note.to_string(),
        }
    }
}

/// Hospitals with their district and type (`Government` or `Private`).
#[derive(Debug, Clone, Default)]
pub struct HospitalDirectory {
    rows: Vec<HospitalRow>,
}

impl HospitalDirectory {
    /// Load a `Hospital,District,Type` CSV file.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, CareError> {
        let rows = read_csv(path.as_ref())?;
        Ok(Self { rows })
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        Self {
            rows: entries
                .into_iter()
                .map(|(hospital, district, kind)| HospitalRow {
                    hospital: hospital.into(),
                    district: district.into(),
                    kind: kind.into(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hospitals of a district.
    ///
    /// Districts match exactly (case-insensitive, `-` read as a space), or
    /// failing that, by the first four characters of the requested district.
    /// With `prioritize_government`, up to three government hospitals are
    /// followed by up to two private ones; otherwise the first five are
    /// listed.
    pub fn find(&self, district: &str, prioritize_government: bool) -> Vec<Hospital> {
        let requested = district.to_lowercase();
        let normalized = requested.replace('-', " ");

        let mut in_district: Vec<&HospitalRow> = self
            .rows
            .iter()
            .filter(|row| row.district.to_lowercase() == normalized)
            .collect();

        if in_district.is_empty() {
            let prefix: String = requested.chars().take(4).collect();
            in_district = self
                .rows
                .iter()
                .filter(|row| row.district.to_lowercase().contains(&prefix))
                .collect();
        }

        let hospitals: Vec<Hospital> = if prioritize_government {
            let government = in_district
                .iter()
                .filter(|row| row.kind == "Government")
                .take(3)
                .map(|row| Hospital::new(&row.hospital, "Government", "Free/subsidized care available"));
            let private = in_district
                .iter()
                .filter(|row| row.kind == "Private")
                .take(2)
                .map(|row| Hospital::new(&row.hospital, "Private", "Paid services"));
            government.chain(private).collect()
        } else {
            in_district
                .iter()
                .take(MAX_HOSPITALS)
                .map(|row| {
                    let note = if row.kind == "Government" {
                        "Subsidized rates available"
                    } else {
                        "Paid services"
                    };
                    Hospital::new(&row.hospital, &row.kind, note)
                })
                .collect()
        };

        if hospitals.is_empty() {
            return vec![
                Hospital::new(
                    "District General Hospital",
                    "Government",
                    "Visit your nearest district hospital",
                ),
                Hospital::new(
                    "Local Private Hospital",
                    "Private",
                    "Contact local healthcare providers",
                ),
            ];
        }
        hospitals
    }
}

// ==================== CSV Loading ====================

/// Read a CSV file with a header row. Files that are not valid UTF-8 are
/// decoded as Latin-1.
fn read_csv<T>(path: &Path) -> Result<Vec<T>, CareError>
where
    T: for<'de> Deserialize<'de>,
{
    let bytes = std::fs::read(path).map_err(|source| CareError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| char::from(b)).collect(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| CareError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

// ==================== Recommendations ====================

/// Income brackets of the portal form whose applicants are sent to
/// government hospitals first.
const GOVERNMENT_FIRST_BRACKETS: [&str; 2] = ["below-25000", "25000-50000"];

/// Body of `POST /api/recommend`, the portal's health services form.
/// Fields the portal also posts (name, age, contact details) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareRequest {
    pub medical_condition: String,
    pub symptoms: String,
    pub symptoms_description: String,
    pub district: String,
    /// Income bracket, e.g. `"25000-50000"`
    pub monthly_income: String,
    pub prioritize_government: Option<bool>,
}

impl CareRequest {
    /// An explicit `prioritizeGovernment` wins; otherwise the two lowest
    /// income brackets get government hospitals first.
    pub fn prioritizes_government(&self) -> bool {
        self.prioritize_government.unwrap_or_else(|| {
            GOVERNMENT_FIRST_BRACKETS.contains(&self.monthly_income.trim().to_lowercase().as_str())
        })
    }
}

impl Default for CareRequest {
    fn default() -> Self {
        Self {
            medical_condition: String::new(),
            symptoms: String::new(),
            symptoms_description: String::new(),
            district: "colombo".to_string(),
            monthly_income: String::new(),
            prioritize_government: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CareRecommendations {
    pub specialists: Vec<Specialist>,
    pub hospitals: Vec<Hospital>,
    pub treatments: Vec<String>,
}

/// Both care directories.
#[derive(Debug, Clone, Default)]
pub struct CareDirectory {
    pub specialists: SpecialistDirectory,
    pub hospitals: HospitalDirectory,
}

impl CareDirectory {
    /// Load whichever directories are configured; missing ones stay empty.
    pub fn load(doctors: Option<&Path>, hospitals: Option<&Path>) -> Result<Self, CareError> {
        Ok(Self {
            specialists: doctors
                .map(SpecialistDirectory::from_csv)
                .transpose()?
                .unwrap_or_default(),
            hospitals: hospitals
                .map(HospitalDirectory::from_csv)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    pub fn recommend(&self, request: &CareRequest) -> CareRecommendations {
        let symptoms = format!("{} {}", request.symptoms, request.symptoms_description);

        CareRecommendations {
            specialists: self.specialists.find(&request.medical_condition, &symptoms),
            hospitals: self.hospitals.find(&request.district, request.prioritizes_government()),
            treatments: treatments(&request.medical_condition, &symptoms),
        }
    }
}
