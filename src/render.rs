//! Plain-text rendering of the Symptom Checker and Disease Lookup views.

use crate::models::{Diagnosis, DiseaseProfile};

const UNKNOWN_DISEASE: &str = "Unknown disease.";
const NO_TREATMENT: &str = "No specific chemical treatment listed.";
const NO_SYMPTOMS: &str = "No symptoms recorded.";
const NO_TREATMENTS: &str = "No treatments recorded.";
const NONE_FOUND: &str = "None found.";

/// Render a diagnosis.
///
/// Example output:
/// ```text
/// Diagnose by Symptom: leaf spot
///
/// Potential Cause: Anthracnose
/// Potential Cause: Husk Rot
/// Recommended Treatments: copper fungicide, fungicide X
/// ```
pub fn render_diagnosis(diagnosis: &Diagnosis) -> String {
    let mut output = format!("Diagnose by Symptom: {}\n\n", diagnosis.symptom);

    if !diagnosis.is_known() {
        output.push_str(UNKNOWN_DISEASE);
        output.push('\n');
        return output;
    }

    for disease in &diagnosis.diseases {
        output.push_str("Potential Cause: ");
        output.push_str(disease);
        output.push('\n');
    }

    if diagnosis.treatments.is_empty() {
        output.push_str(NO_TREATMENT);
    } else {
        output.push_str("Recommended Treatments: ");
        output.push_str(&diagnosis.treatments.join(", "));
    }
    output.push('\n');
    output
}

/// Render an encyclopedia entry.
///
/// Example output:
/// ```text
/// Disease Encyclopedia: Anthracnose
///
/// Symptoms
/// - dieback
/// - leaf spot
/// Treatments
/// - copper fungicide
/// ```
pub fn render_profile(profile: &DiseaseProfile) -> String {
    let mut output = format!("Disease Encyclopedia: {}\n\n", profile.disease);
    render_section(&mut output, "Symptoms", &profile.symptoms, NO_SYMPTOMS);
    render_section(&mut output, "Treatments", &profile.treatments, NO_TREATMENTS);
    output
}

/// Render a selection list, one name per line.
pub fn render_list(names: &[String]) -> String {
    if names.is_empty() {
        return format!("{}\n", NONE_FOUND);
    }
    let mut output = String::new();
    for name in names {
        output.push_str(name);
        output.push('\n');
    }
    output
}

fn render_section(output: &mut String, heading: &str, items: &[String], empty: &str) {
    output.push_str(heading);
    output.push('\n');

    if items.is_empty() {
        output.push_str(empty);
        output.push('\n');
        return;
    }

    for item in items {
        output.push_str("- ");
        output.push_str(item);
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diagnosis_with_causes_and_treatments() {
        let diagnosis = Diagnosis {
            symptom: "leaf spot".to_string(),
            diseases: names(&["Anthracnose", "Husk Rot"]),
            treatments: names(&["copper fungicide", "fungicide X"]),
        };
        assert_eq!(
            render_diagnosis(&diagnosis),
            "Diagnose by Symptom: leaf spot\n\nPotential Cause: Anthracnose\nPotential Cause: Husk Rot\nRecommended Treatments: copper fungicide, fungicide X\n"
        );
    }

    #[test]
    fn test_diagnosis_without_treatments() {
        let diagnosis = Diagnosis {
            symptom: "wilting".to_string(),
            diseases: names(&["Root Rot"]),
            treatments: vec![],
        };
        assert_eq!(
            render_diagnosis(&diagnosis),
            "Diagnose by Symptom: wilting\n\nPotential Cause: Root Rot\nNo specific chemical treatment listed.\n"
        );
    }

    #[test]
    fn test_unknown_symptom() {
        let diagnosis = Diagnosis {
            symptom: "glowing".to_string(),
            diseases: vec![],
            treatments: vec![],
        };
        assert_eq!(
            render_diagnosis(&diagnosis),
            "Diagnose by Symptom: glowing\n\nUnknown disease.\n"
        );
    }

    #[test]
    fn test_profile() {
        let profile = DiseaseProfile {
            disease: "Anthracnose".to_string(),
            symptoms: names(&["dieback", "leaf spot"]),
            treatments: names(&["copper fungicide"]),
        };
        assert_eq!(
            render_profile(&profile),
            "Disease Encyclopedia: Anthracnose\n\nSymptoms\n- dieback\n- leaf spot\nTreatments\n- copper fungicide\n"
        );
    }

    #[test]
    fn test_empty_profile() {
        let profile = DiseaseProfile {
            disease: "Mystery".to_string(),
            symptoms: vec![],
            treatments: vec![],
        };
        assert_eq!(
            render_profile(&profile),
            "Disease Encyclopedia: Mystery\n\nSymptoms\nNo symptoms recorded.\nTreatments\nNo treatments recorded.\n"
        );
    }

    #[test]
    fn test_list() {
        assert_eq!(render_list(&names(&["a", "b"])), "a\nb\n");
        assert_eq!(render_list(&[]), "None found.\n");
    }
}
