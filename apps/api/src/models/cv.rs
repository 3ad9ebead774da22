use serde::{Deserialize, Deserializer, Serialize};

/// A curriculum vitae as submitted by the CV maker frontend.
///
/// All fields are free text. Missing keys and explicit `null`s decode to empty
/// values so a partially filled form still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvData {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub work_experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub major: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
}

/// Reads `null` as the field's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CvData {
    /// `email | phone`, as printed under the title.
    pub fn contact_line(&self) -> String {
        format!("{} | {}", self.email, self.phone)
    }
}

impl Experience {
    pub fn headline(&self) -> String {
        format!("{} at {}", self.position, self.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_camel_case_payload() {
        let json = r#"{
            "fullName": "Jane Doe",
            "title": "Engineer",
            "email": "jane@x.com",
            "phone": "555-1234",
            "summary": "Builds things.",
            "workExperience": [
                {"company": "Acme", "position": "Dev", "year": "2020-2022", "description": "Built things."}
            ],
            "education": [],
            "skills": ["Go", "SQL"]
        }"#;

        let cv: CvData = serde_json::from_str(json).unwrap();
        assert_eq!(cv.full_name, "Jane Doe");
        assert_eq!(cv.work_experience.len(), 1);
        assert_eq!(cv.work_experience[0].headline(), "Dev at Acme");
        assert!(cv.education.is_empty());
        assert_eq!(cv.skills, vec!["Go", "SQL"]);
        assert_eq!(cv.contact_line(), "jane@x.com | 555-1234");
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let cv: CvData = serde_json::from_str(r#"{"fullName": "Solo"}"#).unwrap();
        assert_eq!(cv.full_name, "Solo");
        assert!(cv.summary.is_empty());
        assert!(cv.skills.is_empty());
        assert_eq!(cv.contact_line(), " | ");
    }

    #[test]
    fn test_null_fields_decode_to_empty() {
        let json = r#"{
            "fullName": "Jane",
            "title": null,
            "summary": null,
            "workExperience": [{"company": "Acme", "position": null, "year": null, "description": null}],
            "education": null,
            "skills": null
        }"#;

        let cv: CvData = serde_json::from_str(json).unwrap();
        assert_eq!(cv.full_name, "Jane");
        assert!(cv.title.is_empty());
        assert!(cv.summary.is_empty());
        assert!(cv.education.is_empty());
        assert!(cv.skills.is_empty());
        assert_eq!(cv.work_experience[0].headline(), " at Acme");
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let result = serde_json::from_str::<CvData>(r#"{"skills": "Go, SQL"}"#);
        assert!(result.is_err());
    }
}
