use crate::model::profile::event::CreateProfile;

/// Outcome of parsing a pasted or uploaded roster. `skipped` counts the
/// non-blank lines that did not yield a usable record, so callers can
/// tell "0 imported" apart from "some lines dropped".
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RosterImport {
    pub accepted: Vec<CreateProfile>,
    pub skipped: usize,
}

/// Parses free-form roster text, one candidate record per line, fields
/// comma-separated as `full_name, email, unit_number`. Trailing fields
/// are ignored. A line is accepted only when the first three trimmed
/// fields are all non-empty; blank lines are ignored entirely.
pub fn parse_roster(text: &str) -> RosterImport {
    let mut import = RosterImport::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match fields.as_slice() {
            [full_name, email, unit_number, ..]
                if !full_name.is_empty() && !email.is_empty() && !unit_number.is_empty() =>
            {
                import.accepted.push(CreateProfile::new(
                    full_name.to_string(),
                    email.to_string(),
                    unit_number.to_string(),
                ));
            }
            _ => import.skipped += 1,
        }
    }

    import
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_three_field_line() {
        let import = parse_roster("Juan Perez, juan@email.com, 10A");
        assert_eq!(import.skipped, 0);
        assert_eq!(
            import.accepted,
            vec![CreateProfile::new(
                "Juan Perez".into(),
                "juan@email.com".into(),
                "10A".into()
            )]
        );
    }

    #[test]
    fn skips_lines_below_the_field_threshold() {
        let import = parse_roster("Juan Perez, juan@email.com");
        assert!(import.accepted.is_empty());
        assert_eq!(import.skipped, 1);
    }

    #[test]
    fn ignores_trailing_fields_and_whitespace() {
        let import = parse_roster("  Ana López ,ana@email.com,  2C , extra, more ");
        assert_eq!(import.accepted.len(), 1);
        let profile = &import.accepted[0];
        assert_eq!(profile.full_name, "Ana López");
        assert_eq!(profile.email, "ana@email.com");
        assert_eq!(profile.unit_number, "2C");
    }

    #[test]
    fn skips_lines_with_empty_required_fields() {
        let import = parse_roster("Juan Perez, , 10A, note");
        assert!(import.accepted.is_empty());
        assert_eq!(import.skipped, 1);
    }

    #[test]
    fn blank_lines_are_not_counted_as_skipped() {
        let text = "Juan Perez, juan@email.com, 10A\n\n   \nAna López, ana@email.com\n";
        let import = parse_roster(text);
        assert_eq!(import.accepted.len(), 1);
        assert_eq!(import.skipped, 1);
    }
}
