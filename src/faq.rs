//! Offline resume Q&A

use strsim::jaro_winkler;

/// Below this similarity a miss gets no suggestion
const SUGGESTION_THRESHOLD: f64 = 0.8;

static ENTRIES: &[(&str, &str)] = &[
    ("How to improve my resume?", "Include relevant keywords, quantify achievements, and use clear headings."),
    ("Common resume mistakes?", "Typos, unclear formatting, missing skills, irrelevant info."),
    ("How to increase ATS score?", "Use JD keywords, avoid images/tables, standard fonts."),
    ("Should I include projects?", "Yes, especially relevant projects."),
    ("How to highlight skills?", "List skills separately and mention in experience."),
    ("How to write summary?", "Concise summary highlighting skills and achievements."),
    ("What font is best for resume?", "Use simple fonts like Arial, Calibri, or Helvetica."),
    ("Resume length?", "Keep it 1-2 pages depending on experience."),
    ("Include hobbies?", "Only if relevant to the job or shows soft skills."),
    ("How to format dates?", "Use a consistent format like MM/YYYY."),
    ("Include references?", "Optional, can write 'Available on request'."),
    ("How to handle career gaps?", "Briefly explain positively in summary or experience."),
    ("Use action verbs?", "Yes, start bullet points with strong action verbs."),
    ("Include certifications?", "Yes, relevant ones only."),
    ("How to show achievements?", "Quantify with numbers or results."),
    ("ATS-friendly file type?", "PDF or DOCX without complex formatting."),
    ("Include LinkedIn profile?", "Yes, always a good idea."),
    ("Include personal details?", "Name, email, phone, city, LinkedIn optional."),
    ("Should I include photo?", "No, unless required regionally."),
    ("Use bullets or paragraphs?", "Bullets for clarity."),
    ("Resume margins?", "1 inch recommended."),
    ("How to handle multiple roles?", "List them separately under each company."),
    ("Include freelance work?", "Yes, if relevant."),
    ("Tailoring resume?", "Always match JD for each application."),
    ("Use keywords?", "Yes, analyze JD carefully."),
    ("How to handle internships?", "Include relevant internships with achievements."),
    ("Education placement?", "After summary, before experience."),
    ("Use numbering?", "No, bullets are better."),
    ("Include GPA?", "Optional, only if impressive."),
    ("Include awards?", "Yes, relevant ones only."),
    ("Volunteer work?", "Include if relevant or shows skills."),
    ("Professional summary?", "2-3 sentences summarizing expertise."),
    ("Objective statement?", "Optional, keep concise."),
    ("Include skills section?", "Yes, list technical & soft skills."),
    ("Formatting consistency?", "Use same fonts, spacing, bullets."),
    ("Highlight promotions?", "Yes, under experience."),
    ("Include publications?", "Yes, if relevant to the field."),
    ("Show leadership?", "Mention projects or team leads."),
    ("Use keywords in summary?", "Yes, to improve ATS match."),
    ("Action verbs examples?", "Led, Developed, Managed, Created, Optimized"),
    ("How to make resume readable?", "Clear sections, consistent font & spacing."),
    ("Include programming languages?", "Yes, if relevant to JD."),
    ("What to avoid?", "Images, tables, fancy formatting."),
    ("Include GitHub?", "Yes, for developers."),
    ("Highlight problem-solving?", "Mention specific projects or achievements."),
    ("Use clear headings?", "Yes, for sections like Experience, Education, Skills."),
    ("Customize resume per job?", "Yes, always tailor for each application."),
    ("Use numbers for achievements?", "Yes, quantify results."),
    ("Avoid long paragraphs?", "Keep bullet points concise."),
    ("Include soft skills?", "Yes, only highlight relevant ones."),
    ("How to describe experience?", "Action + Result format is best."),
    ("Include languages?", "Yes, only if relevant to the job."),
    ("ATS vs recruiter?", "Make it readable for both, simple formatting."),
    ("How to handle multiple locations?", "List location next to company/job."),
    ("Should I include GPA?", "Include only if strong and relevant."),
    ("Include conferences?", "Optional, if relevant."),
];

/// Fixed catalog of resume questions and answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaqCatalog;

impl FaqCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Questions in display order
    pub fn questions(&self) -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|(question, _)| *question)
    }

    pub fn len(&self) -> usize {
        ENTRIES.len()
    }

    pub fn is_empty(&self) -> bool {
        ENTRIES.is_empty()
    }

    /// Exact match first, then case- and whitespace-insensitive.
    pub fn lookup(&self, question: &str) -> Option<&'static str> {
        if let Some((_, answer)) = ENTRIES.iter().find(|(q, _)| *q == question) {
            return Some(*answer);
        }

        let wanted = question.trim().to_lowercase();
        ENTRIES
            .iter()
            .find(|(q, _)| q.to_lowercase() == wanted)
            .map(|(_, answer)| *answer)
    }

    /// Closest known question by Jaro-Winkler similarity, if it is close enough.
    pub fn suggest(&self, question: &str) -> Option<&'static str> {
        let wanted = question.trim().to_lowercase();

        ENTRIES
            .iter()
            .map(|(q, _)| (*q, jaro_winkler(&q.to_lowercase(), &wanted)))
            .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(q, _)| q)
    }
}
