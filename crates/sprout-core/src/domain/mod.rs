//! Core domain layer for Sprout.
//!
//! Pure values with no filesystem or process access: the generation
//! configuration, the optional-category enums with their "none" sentinel,
//! and the framework → deployment technology registry. `ProjectConfig` is
//! built once and never mutated.

pub mod capabilities;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    config::{
        Author, DEFAULT_PLATFORM, DEFAULT_TESTS, ProjectConfig, ProjectConfigBuilder, TestMatrix,
        VcsSettings,
    },
    remote::VcsRemote,
    render_context::RenderContext,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CiService, Framework, NONE_SENTINEL, Technology};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn ci_service_parses_filenames_and_aliases() {
        assert_eq!(CiService::from_str(".travis.yml").unwrap(), CiService::Travis);
        assert_eq!(CiService::from_str("travis").unwrap(), CiService::Travis);
        assert_eq!(
            CiService::from_str("codeship-steps.yml").unwrap(),
            CiService::CodeshipSteps
        );
        assert_eq!(CiService::from_str("(none)").unwrap(), CiService::None);
        assert!(CiService::from_str("jenkins").is_err());
    }

    #[test]
    fn ci_service_round_trips_through_as_str() {
        for ci in CiService::ALL {
            assert_eq!(CiService::from_str(ci.as_str()).unwrap(), *ci);
        }
    }

    #[test]
    fn framework_parsing_is_case_insensitive() {
        assert_eq!(Framework::from_str("Flask").unwrap(), Framework::Flask);
        assert_eq!(Framework::from_str("DJANGO").unwrap(), Framework::Django);
        assert_eq!(Framework::from_str("PHP-generic").unwrap(), Framework::PhpGeneric);
        assert_eq!(Framework::from_str("(none)").unwrap(), Framework::None);
        assert!(matches!(
            Framework::from_str("rails"),
            Err(DomainError::UnknownFramework(_))
        ));
    }

    #[test]
    fn sentinel_is_not_selected() {
        assert!(!CiService::None.is_selected());
        assert!(!Framework::None.is_selected());
        assert!(CiService::ALL.iter().all(CiService::is_selected));
        assert!(Framework::ALL.iter().all(Framework::is_selected));
    }

    #[test]
    fn framework_technology_delegates_to_registry() {
        assert_eq!(Framework::Flask.technology(), Some(Technology::Python));
        assert_eq!(Framework::None.technology(), None);
    }

    #[test]
    fn unknown_values_suggest_alternatives() {
        let suggestions = DomainError::UnknownCiService("jenkins".into()).suggestions();
        assert!(suggestions.iter().any(|s| s.contains(".travis.yml")));
        assert_eq!(
            DomainError::UnknownCiService("x".into()).category(),
            ErrorCategory::NotFound
        );
    }
}
