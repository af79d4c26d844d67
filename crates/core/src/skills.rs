//! Skill taxonomy vocabularies.

use crate::choice::define_choice_enum;

define_choice_enum! {
    /// Industry grouping for a skill.
    #[derive(Default)]
    SkillCategory {
        Construction => "construction",
        Manufacturing => "manufacturing",
        Transportation => "transportation",
        Hospitality => "hospitality",
        HealthcareSupport => "healthcare_support",
        Retail => "retail",
        Agriculture => "agriculture",
        Logistics => "logistics",
        Maintenance => "maintenance",
        Security => "security",
        /// Transferable skills not tied to one industry.
        General => "general",
        #[default]
        Other => "other",
    }
}

define_choice_enum! {
    /// How well a seeker knows a skill.
    #[derive(Default)]
    ProficiencyLevel {
        #[default]
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
        Expert => "expert",
    }
}

define_choice_enum! {
    /// How strongly a job asks for a skill.
    #[derive(Default)]
    RequirementLevel {
        #[default]
        Required => "required",
        Preferred => "preferred",
        NiceToHave => "nice_to_have",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_strings_are_snake_case() {
        assert_eq!(SkillCategory::HealthcareSupport.as_str(), "healthcare_support");
        assert_eq!(
            "healthcare_support".parse::<SkillCategory>().unwrap(),
            SkillCategory::HealthcareSupport
        );
    }

    #[test]
    fn defaults_match_schema_defaults() {
        assert_eq!(SkillCategory::default(), SkillCategory::Other);
        assert_eq!(ProficiencyLevel::default(), ProficiencyLevel::Beginner);
        assert_eq!(RequirementLevel::default(), RequirementLevel::Required);
    }

    #[test]
    fn nice_to_have_display() {
        assert_eq!(RequirementLevel::NiceToHave.to_string(), "nice_to_have");
    }
}
