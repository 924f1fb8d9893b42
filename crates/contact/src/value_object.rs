use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Kind of engagement a visitor can pick on the contact form.
///
/// The wire value is the lowercase variant name, which is also what the
/// notification email shows.
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ProjectType {
    Fullstack,
    Mobile,
    Consulting,
    Leadership,
    Other,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_wire_values() {
        let values = ProjectType::VARIANTS
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>();

        assert_eq!(
            values,
            vec!["fullstack", "mobile", "consulting", "leadership", "other"]
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(ProjectType::from_str("mobile"), Ok(ProjectType::Mobile));
        assert!(ProjectType::from_str("Mobile").is_err());
        assert!(ProjectType::from_str("web3").is_err());
    }
}
