const PROBLEM_MATERIALS: [&str; 4] = ["plastic", "pvc", "polystyrene", "styrofoam"];
const AIR_TRANSPORT_MODES: [&str; 3] = ["air", "air freight", "airplane"];
const NON_RECYCLABLE_PACKAGING: [&str; 3] = ["plastic", "mixed materials", "non-recyclable"];

pub const AIR_TRANSPORT_ISSUE: &str = "Air transport (high emissions)";
pub const NON_RECYCLABLE_PACKAGING_ISSUE: &str = "Non-recyclable packaging";

/// Flags well-known sustainability problems using static keyword lists.
///
/// Output order is materials (one entry per matching material, original casing
/// kept), then transport, then packaging. Matching is case-insensitive;
/// transport must match a mode exactly while materials and packaging match on
/// substrings.
pub fn detect_issues<M: AsRef<str>>(
    materials: &[M],
    transport: &str,
    packaging: &str,
) -> Vec<String> {
    let mut issues: Vec<String> = materials
        .iter()
        .map(|material| material.as_ref())
        .filter(|material| contains_any(material, &PROBLEM_MATERIALS))
        .map(|material| format!("{material} material used"))
        .collect();

    let transport = transport.to_lowercase();
    if AIR_TRANSPORT_MODES.contains(&transport.as_str()) {
        issues.push(AIR_TRANSPORT_ISSUE.to_string());
    }

    if contains_any(packaging, &NON_RECYCLABLE_PACKAGING) {
        issues.push(NON_RECYCLABLE_PACKAGING_ISSUE.to_string());
    }

    issues
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_materials_transport_and_packaging_in_order() {
        let issues = detect_issues(&["PVC Tray"], "Air Freight", "plastic wrap");
        assert_eq!(
            issues,
            vec![
                "PVC Tray material used".to_string(),
                AIR_TRANSPORT_ISSUE.to_string(),
                NON_RECYCLABLE_PACKAGING_ISSUE.to_string(),
            ]
        );
    }

    #[test]
    fn every_matching_material_is_reported() {
        let materials = vec![
            "Recycled Plastic".to_string(),
            "Bamboo".to_string(),
            "Styrofoam insert".to_string(),
            "Recycled Plastic".to_string(),
        ];
        let issues = detect_issues(&materials, "sea", "cardboard");
        assert_eq!(
            issues,
            vec![
                "Recycled Plastic material used",
                "Styrofoam insert material used",
                "Recycled Plastic material used",
            ]
        );
    }

    #[test]
    fn transport_requires_an_exact_mode_match() {
        let no_materials: [&str; 0] = [];
        assert_eq!(
            detect_issues(&no_materials, "AIRPLANE", "paper"),
            vec![AIR_TRANSPORT_ISSUE.to_string()]
        );
        assert!(detect_issues(&no_materials, "air and sea", "paper").is_empty());
        assert!(detect_issues(&no_materials, "rail", "paper").is_empty());
    }

    #[test]
    fn packaging_is_reported_once_even_with_several_matches() {
        let issues = detect_issues::<&str>(
            &[],
            "truck",
            "Mixed Materials with plastic, non-recyclable",
        );
        assert_eq!(issues, vec![NON_RECYCLABLE_PACKAGING_ISSUE.to_string()]);
    }

    #[test]
    fn clean_products_have_no_issues() {
        let issues = detect_issues(&["Organic cotton", "Cork"], "ship", "recycled cardboard");
        assert!(issues.is_empty());
    }
}
