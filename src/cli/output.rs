//! Output formatting utilities

use crate::domain::{Detail, Entry};

/// Format the filtered view as numbered rows
pub fn format_proverb_list(view: &[&Entry]) -> String {
    if view.is_empty() {
        return "No proverbs found".to_string();
    }

    let mut output = String::new();
    for (index, entry) in view.iter().enumerate() {
        output.push_str(&format!("[{}] {}\n", index, entry.proverb.text));
    }
    output
}

/// Format the detail panel for the selected proverb
pub fn format_detail(detail: &Detail) -> String {
    if detail.is_cleared() {
        return "No proverb selected".to_string();
    }

    let mut output = format!("{}\n", detail.text);
    if !detail.transliteration.is_empty() {
        output.push_str(&format!("{}\n", detail.transliteration));
    }

    let sections = [
        ("Meaning", &detail.meaning),
        ("English Equivalent", &detail.english_equivalent),
        ("Tags", &detail.tags),
        ("Region", &detail.region),
        ("Usage Context", &detail.usage_context),
    ];
    for (title, value) in sections {
        output.push_str(&format!("\n{}:\n  {}\n", title, value));
    }
    output
}

/// Format filter choices, one per line
pub fn format_choice_list(choices: &[String]) -> String {
    let mut output = String::new();
    for choice in choices {
        output.push_str(choice);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Proverb, ProverbId};

    fn entry(id: u64, text: &str) -> Entry {
        Entry::new(ProverbId::new(id), Proverb::new(text))
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_proverb_list(&[]), "No proverbs found");
    }

    #[test]
    fn test_format_proverb_list_numbers_view_rows() {
        let a = entry(10, "थारी मे भात, हाथ मे लाठी");
        let b = entry(3, "Hey labna, tu bhitre rahna.");
        let output = format_proverb_list(&[&a, &b]);
        assert_eq!(
            output,
            "[0] थारी मे भात, हाथ मे लाठी\n[1] Hey labna, tu bhitre rahna.\n"
        );
    }

    #[test]
    fn test_format_cleared_detail() {
        assert_eq!(format_detail(&Detail::default()), "No proverb selected");
    }

    #[test]
    fn test_format_detail_sections() {
        let mut proverb = Proverb::new("Aayl pani, gel pani");
        proverb.meaning = "Water came, water went".to_string();
        proverb.tags = vec!["trouble".to_string(), "confusion".to_string()];
        proverb.region = "Mithila".to_string();
        let detail = Detail::from_entry(&Entry::new(ProverbId::new(1), proverb));

        let output = format_detail(&detail);
        assert!(output.starts_with("Aayl pani, gel pani\n"));
        assert!(output.contains("Meaning:\n  Water came, water went\n"));
        assert!(output.contains("Tags:\n  trouble, confusion\n"));
        assert!(output.contains("Region:\n  Mithila\n"));
        assert!(output.contains("English Equivalent:"));
    }

    #[test]
    fn test_format_choice_list() {
        let choices = vec!["All Tags".to_string(), "hope".to_string()];
        assert_eq!(format_choice_list(&choices), "All Tags\nhope\n");
    }
}
