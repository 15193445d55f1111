const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Extracts bullet items from free-form model output.
///
/// Only lines whose trimmed text starts with a bullet marker are kept. Exactly
/// one marker character and the surrounding whitespace are stripped, so inline
/// markdown such as `**bold**` survives. Lines left empty are dropped. At most
/// `limit` items are returned.
pub fn parse_bullets(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter_map(strip_marker)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .take(limit)
        .collect()
}

fn strip_marker(line: &str) -> Option<&str> {
    let marker = line.chars().next().filter(|c| BULLET_MARKERS.contains(c))?;
    Some(line[marker.len_utf8()..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_bulleted_lines() {
        let text = "Here are some ideas:\n- Switch to recycled aluminium\n\n  - Ship by sea instead of air  \nThanks!";
        assert_eq!(
            parse_bullets(text, 5),
            vec!["Switch to recycled aluminium", "Ship by sea instead of air"]
        );
    }

    #[test]
    fn truncates_to_limit() {
        let text = (1..=8)
            .map(|idx| format!("- Suggestion {idx}"))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed = parse_bullets(&text, 5);
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[4], "Suggestion 5");
    }

    #[test]
    fn handles_alternative_markers_and_crlf() {
        let text = "* Use mono-material packaging\r\n• Offer a take-back program\r\n1. Numbered lines are ignored";
        assert_eq!(
            parse_bullets(text, 5),
            vec!["Use mono-material packaging", "Offer a take-back program"]
        );
    }

    #[test]
    fn drops_bare_markers() {
        assert!(parse_bullets("-\n  *  \n•", 5).is_empty());
    }

    #[test]
    fn keeps_markdown_emphasis_after_the_marker() {
        let text = "- **Switch materials:** use recycled PET\n* *Ship* by sea\n- __Reuse__ pallets";
        assert_eq!(
            parse_bullets(text, 5),
            vec![
                "**Switch materials:** use recycled PET",
                "*Ship* by sea",
                "__Reuse__ pallets"
            ]
        );
    }

    #[test]
    fn prose_without_bullets_yields_nothing() {
        assert!(parse_bullets("I cannot help with that request.", 5).is_empty());
    }
}
