use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// The resume document backing the lookup dispatcher.
///
/// Loaded once at startup from a JSON file, wrapped in an `Arc`, and shared
/// read-only by every request. No field is ever mutated after load.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub contact: Contact,
    pub objective: String,
    pub education: Education,
    pub certifications: Vec<String>,
    pub technical_skills: TechnicalSkills,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub address: String,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSkills {
    pub backend: Vec<String>,
    pub frontend: Vec<String>,
    pub databases: Vec<String>,
    pub cloud_and_dev_ops: Vec<String>,
    pub real_time: Vec<String>,
    pub security: Vec<String>,
    pub ci_cd_monitoring: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkExperience {
    pub role: String,
    pub company: String,
    pub duration: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

/// Reads and parses the resume document. Any I/O or parse failure is
/// returned to the caller so startup can abort instead of serving requests
/// against a partially loaded document.
pub fn load_resume(path: &Path) -> Result<ResumeDocument> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read resume file at {path:?}"))?;
    let document: ResumeDocument =
        serde_json::from_str(&raw).with_context(|| format!("Resume file {path:?} is not valid"))?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_resume_parses() {
        let doc: ResumeDocument = serde_json::from_str(include_str!("../../resume.json")).unwrap();
        assert!(!doc.contact.email.is_empty());
        assert!(!doc.certifications.is_empty());
        assert!(!doc.work_experience.is_empty());
        assert!(!doc.projects.is_empty());
    }

    #[test]
    fn test_camel_case_keys_are_mapped() {
        let raw = r#"{
            "contact": {
                "email": "a@b.com", "phone": "1", "linkedin": "l",
                "github": "g", "portfolio": "p", "address": "addr",
                "dateOfBirth": "1990-01-01"
            },
            "objective": "obj",
            "education": { "degree": "BSc", "institution": "Uni" },
            "certifications": ["c1"],
            "technicalSkills": {
                "backend": ["Node.js"], "frontend": ["React"],
                "databases": ["PostgreSQL"], "cloudAndDevOps": ["AWS"],
                "realTime": ["Socket.IO"], "security": ["OAuth2"],
                "ciCdMonitoring": ["GitHub Actions"]
            },
            "workExperience": [{ "role": "r", "company": "c", "duration": "d" }],
            "projects": [{ "name": "n", "description": "desc" }]
        }"#;
        let doc: ResumeDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.contact.date_of_birth, "1990-01-01");
        assert_eq!(doc.technical_skills.cloud_and_dev_ops, vec!["AWS"]);
        assert_eq!(doc.technical_skills.ci_cd_monitoring, vec!["GitHub Actions"]);
    }

    #[test]
    fn test_malformed_resume_is_an_error() {
        let result = serde_json::from_str::<ResumeDocument>("{ \"contact\": {} }");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_resume(Path::new("/nonexistent/resume.json"));
        assert!(result.is_err());
    }
}
