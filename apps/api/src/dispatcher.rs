//! Resume lookup dispatcher — pure keyword matcher over the loaded resume.
//!
//! The rule list is an explicit ordered table of (predicate, producer)
//! pairs. Rules are evaluated top to bottom against the lowercased question
//! and the first match wins; there is no scoring or ranking. Unmatched
//! questions always get the fallback string, never an error.

use crate::models::resume::ResumeDocument;

/// Returned when no rule matches.
pub const FALLBACK: &str = "Sorry, I couldn't find an exact match for your question. \
    Try asking about email, experience, phone, skills, projects, or certifications.";

/// One dispatch rule: a predicate over the lowercased question and a
/// producer over the resume document.
struct Rule {
    matches: fn(&str) -> bool,
    answer: fn(&ResumeDocument) -> String,
}

fn any(q: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| q.contains(k))
}

/// Rule table in priority order. Ordering is load-bearing: the profile rule
/// must precede the contact rules so "who is roshan" wins over an incidental
/// "is" elsewhere in a contact question.
const RULES: &[Rule] = &[
    // Profile summary
    Rule {
        matches: |q| q.contains("roshan") && any(q, &["who", "about", "profile", "what", "is"]),
        answer: |r| {
            format!(
                "Roshan Poudel is a Senior Full Stack Software Engineer with over 5 years \
                 of experience specializing in Node.js, .NET, JavaScript, and React.\n\n{}",
                r.objective
            )
        },
    },
    // Contact info
    Rule {
        matches: |q| q.contains("email"),
        answer: |r| format!("Roshan's email is {}", r.contact.email),
    },
    Rule {
        matches: |q| q.contains("phone"),
        answer: |r| format!("Roshan's phone number is {}", r.contact.phone),
    },
    Rule {
        matches: |q| q.contains("linkedin"),
        answer: |r| format!("Roshan's LinkedIn: {}", r.contact.linkedin),
    },
    Rule {
        matches: |q| q.contains("github"),
        answer: |r| format!("Roshan's GitHub: {}", r.contact.github),
    },
    Rule {
        matches: |q| q.contains("portfolio"),
        answer: |r| format!("Roshan's portfolio: {}", r.contact.portfolio),
    },
    Rule {
        matches: |q| q.contains("address"),
        answer: |r| format!("Roshan lives in {}", r.contact.address),
    },
    Rule {
        matches: |q| any(q, &["birth", "dob"]),
        answer: |r| format!("Roshan was born on {}", r.contact.date_of_birth),
    },
    // Education
    Rule {
        matches: |q| any(q, &["education", "study"]),
        answer: |r| {
            format!(
                "Roshan completed his {} from {}",
                r.education.degree, r.education.institution
            )
        },
    },
    // Certifications
    Rule {
        matches: |q| any(q, &["certification", "certified"]),
        answer: |r| {
            format!(
                "Roshan has the following certifications:\n- {}",
                r.certifications.join("\n- ")
            )
        },
    },
    // Objective
    Rule {
        matches: |q| any(q, &["objective", "goal"]),
        answer: |r| r.objective.clone(),
    },
    // Skills
    Rule {
        matches: |q| any(q, &["skills", "technologies", "tech", "stack"]),
        answer: |r| {
            let s = &r.technical_skills;
            format!(
                "Backend: {}\n\
                 Frontend: {}\n\
                 Databases: {}\n\
                 Cloud & DevOps: {}\n\
                 Real-Time & Microservices: {}\n\
                 Security: {}\n\
                 CI/CD & Monitoring: {}",
                s.backend.join(", "),
                s.frontend.join(", "),
                s.databases.join(", "),
                s.cloud_and_dev_ops.join(", "),
                s.real_time.join(", "),
                s.security.join(", "),
                s.ci_cd_monitoring.join(", "),
            )
        },
    },
    // Work experience
    Rule {
        matches: |q| any(q, &["experience", "worked", "job", "career", "history"]),
        answer: |r| {
            r.work_experience
                .iter()
                .map(|job| format!("{} at {} ({})", job.role, job.company, job.duration))
                .collect::<Vec<_>>()
                .join("\n")
        },
    },
    // Projects
    Rule {
        matches: |q| q.contains("project"),
        answer: |r| {
            r.projects
                .iter()
                .map(|p| format!("- {}: {}", p.name, p.description))
                .collect::<Vec<_>>()
                .join("\n")
        },
    },
];

/// Maps a free-text question to a resume-derived answer.
/// Pure read of the immutable document; always succeeds.
pub fn lookup(resume: &ResumeDocument, question: &str) -> String {
    let lower = question.to_lowercase();
    for rule in RULES {
        if (rule.matches)(&lower) {
            return (rule.answer)(resume);
        }
    }
    FALLBACK.to_string()
}
