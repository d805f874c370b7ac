//! Terminal rendering — pure string builders for every view the client
//! shows, so they test without a terminal attached.

use crate::model::{ActivePath, Course, JobRecommendation, StepTemplate};

/// Shown when the backend returns zero recommendations.
pub const NO_RECOMMENDATIONS: &str =
    "🔍 No matching recommendations found. Try adding more skills!";

/// Width of the textual progress bar in characters.
const BAR_WIDTH: usize = 20;

/// Numbered recommendation cards, best-first as the server ranked them.
pub fn recommendation_cards(recommendations: &[JobRecommendation]) -> String {
    if recommendations.is_empty() {
        return NO_RECOMMENDATIONS.to_string();
    }

    let mut out = String::new();
    for (i, job) in recommendations.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {}  ({}% match)\n    📁 {}\n",
            i + 1,
            job.title,
            job.score_percent(),
            job.domain,
        ));
        if !job.required_skills.is_empty() {
            out.push_str(&format!("    skills: {}\n", job.required_skills.join(", ")));
        }
    }
    out.push_str("\nType 'path <n>' to view a learning path.");
    out
}

/// Proposal view: numbered, non-interactive steps with recommended courses.
pub fn proposal(job_title: &str, steps: &[StepTemplate]) -> String {
    let mut out = format!("Learning Path for {job_title}\n");
    for step in steps {
        out.push_str(&format!(
            "\n  {}. {}\n     {}\n",
            step.step_number, step.title, step.description
        ));
        for course in &step.recommended_courses {
            out.push_str(&course_line(course));
        }
    }
    out.push_str("\nType 'start' to begin this learning path.");
    out
}

/// Stateful view: progress bar plus one interactive row per step.
pub fn stateful_path(path: &ActivePath) -> String {
    let mut out = format!(
        "Learning Path for {}\n{}\n",
        path.job_title,
        progress_bar(path.progress_percentage)
    );
    for step in &path.steps {
        let mark = if step.status.is_completed() { "x" } else { " " };
        out.push_str(&format!(
            "\n  [{mark}] {}. {}\n      {}\n",
            step.step_number, step.title, step.description
        ));
        for course in &step.courses {
            out.push_str(&course_line(course));
        }
    }
    out.push_str("\nType 'step <n> done' or 'step <n> todo' to update progress.");
    out
}

/// Blocking message when another job's path is already active.
pub fn blocked(other_job_title: &str) -> String {
    format!(
        "You are already on a learning path for \"{other_job_title}\".\n\
         Please complete it before starting a new one."
    )
}

/// Textual progress bar with the "% Complete" caption.
pub fn progress_bar(percentage: u8) -> String {
    let pct = percentage.min(100) as usize;
    let filled = pct * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress_caption(percentage)
    )
}

/// The caption alone, reprinted after each successful step update.
pub fn progress_caption(percentage: u8) -> String {
    format!("{percentage}% Complete")
}

fn course_line(course: &Course) -> String {
    let difficulty = course
        .difficulty
        .as_deref()
        .map(|d| format!(" - {d}"))
        .unwrap_or_default();
    format!(
        "       • {} ({}{difficulty}) → {}\n",
        course.title, course.provider, course.url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PathStep, StepStatus};

    fn job(title: &str, score: f64) -> JobRecommendation {
        JobRecommendation {
            job_id: "j1".into(),
            title: title.into(),
            domain: "data".into(),
            score,
            required_skills: vec!["python".into(), "sql".into()],
        }
    }

    #[test]
    fn empty_recommendations_render_no_results_message() {
        assert_eq!(recommendation_cards(&[]), NO_RECOMMENDATIONS);
    }

    #[test]
    fn cards_are_numbered_in_server_order() {
        let out = recommendation_cards(&[job("Data Engineer", 0.876), job("Analyst", 0.5)]);
        assert!(out.contains(" 1. Data Engineer  (88% match)"));
        assert!(out.contains(" 2. Analyst  (50% match)"));
        assert!(out.contains("skills: python, sql"));
        let first = out.find("Data Engineer").unwrap();
        let second = out.find("Analyst").unwrap();
        assert!(first < second);
    }

    #[test]
    fn proposal_has_no_checkboxes() {
        let steps = vec![StepTemplate {
            step_number: 1,
            title: "Foundations".into(),
            description: "Learn the basics".into(),
            recommended_courses: vec![Course {
                title: "Intro".into(),
                provider: "Coursera".into(),
                difficulty: Some("beginner".into()),
                url: "https://example.com".into(),
            }],
        }];
        let out = proposal("Data Engineer", &steps);
        assert!(out.contains("Learning Path for Data Engineer"));
        assert!(out.contains("1. Foundations"));
        assert!(out.contains("Intro (Coursera - beginner)"));
        assert!(!out.contains("[ ]"));
        assert!(!out.contains("[x]"));
    }

    #[test]
    fn stateful_path_marks_completed_steps() {
        let path = ActivePath {
            id: "p1".into(),
            job_id: "j1".into(),
            job_title: "Data Engineer".into(),
            progress_percentage: 50,
            steps: vec![
                PathStep {
                    step_number: 1,
                    title: "Foundations".into(),
                    description: "d".into(),
                    courses: vec![],
                    status: StepStatus::Completed,
                },
                PathStep {
                    step_number: 2,
                    title: "Pipelines".into(),
                    description: "d".into(),
                    courses: vec![],
                    status: StepStatus::Pending,
                },
            ],
        };
        let out = stateful_path(&path);
        assert!(out.contains("[x] 1. Foundations"));
        assert!(out.contains("[ ] 2. Pipelines"));
        assert!(out.contains("50% Complete"));
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0), format!("[{}] 0% Complete", "-".repeat(20)));
        assert_eq!(
            progress_bar(100),
            format!("[{}] 100% Complete", "#".repeat(20))
        );
        let half = progress_bar(50);
        assert!(half.starts_with(&format!("[{}{}]", "#".repeat(10), "-".repeat(10))));
    }

    #[test]
    fn blocked_names_the_other_job() {
        let out = blocked("Cloud Architect");
        assert!(out.contains("\"Cloud Architect\""));
        assert!(out.contains("complete it before starting a new one"));
    }

    #[test]
    fn course_line_omits_missing_difficulty() {
        let line = course_line(&Course {
            title: "Intro".into(),
            provider: "edX".into(),
            difficulty: None,
            url: "https://example.com".into(),
        });
        assert!(line.contains("Intro (edX)"));
        assert!(!line.contains(" - "));
    }
}
