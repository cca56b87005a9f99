//! Tool seam for the agent executor.
//!
//! A tool is a named, schema-typed callable the model may invoke during its
//! reasoning. The executor only sees `dyn Tool`, so capabilities can be
//! swapped without touching the endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::dispatcher;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;
    async fn invoke(&self, input: Value) -> Result<String, AppError>;
}

/// The one capability exposed to the agent: the resume lookup dispatcher.
pub struct ResumeLookupTool {
    resume: Arc<ResumeDocument>,
}

impl ResumeLookupTool {
    pub fn new(resume: Arc<ResumeDocument>) -> Self {
        Self { resume }
    }
}

#[async_trait]
impl Tool for ResumeLookupTool {
    fn name(&self) -> &str {
        "get_resume_info"
    }

    fn description(&self) -> &str {
        "Answers user questions about Roshan Poudel's resume, including contact info, \
         skills, experience, education, certifications, and projects."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "User's question about Roshan's resume"
                }
            },
            "required": ["question"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<String, AppError> {
        let question = input
            .get("question")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::Agent("tool input missing field 'question'".to_string()))?;

        Ok(dispatcher::lookup(&self.resume, question))
    }
}
