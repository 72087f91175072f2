//! Kitchen roles with declared skill sets.
//!
//! A role declares up front which skills it supports; a [`Brigade`] selects
//! roles by declared skill at composition time. Nothing here inspects a
//! role's concrete shape at invocation time — the declaration is the whole
//! contract.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utilities::errors::{ContextError, StrategyError};

/// A kitchen skill a role can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Cook,
    Bake,
    Eat,
}

impl Skill {
    /// All skills, in declaration order.
    pub const ALL: [Skill; 3] = [Skill::Cook, Skill::Bake, Skill::Eat];

    fn verb(self) -> &'static str {
        match self {
            Skill::Cook => "cooking",
            Skill::Bake => "baking",
            Skill::Eat => "eating",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skill::Cook => write!(f, "cook"),
            Skill::Bake => write!(f, "bake"),
            Skill::Eat => write!(f, "eat"),
        }
    }
}

/// A named role with an immutable set of declared skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    name: String,
    skills: BTreeSet<Skill>,
}

impl Role {
    /// Create a role with the given skills.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidParameter`] if no skills are
    /// declared — a role that can do nothing cannot join a brigade.
    pub fn new(
        name: impl Into<String>,
        skills: impl IntoIterator<Item = Skill>,
    ) -> Result<Self, StrategyError> {
        let skills: BTreeSet<Skill> = skills.into_iter().collect();
        if skills.is_empty() {
            return Err(StrategyError::invalid_parameter(
                "skills",
                "a role must declare at least one skill",
            ));
        }
        Ok(Self {
            name: name.into(),
            skills,
        })
    }

    /// A chef cooks and bakes.
    pub fn chef() -> Self {
        Self {
            name: "Chef".to_string(),
            skills: [Skill::Cook, Skill::Bake].into_iter().collect(),
        }
    }

    /// A baker bakes.
    pub fn baker() -> Self {
        Self {
            name: "Baker".to_string(),
            skills: [Skill::Bake].into_iter().collect(),
        }
    }

    /// The role's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the role declares the given skill.
    pub fn supports(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    /// The declared skills, in declaration order.
    pub fn skills(&self) -> impl Iterator<Item = Skill> + '_ {
        self.skills.iter().copied()
    }

    /// Perform one declared skill. `None` for undeclared skills.
    pub fn perform(&self, skill: Skill) -> Option<String> {
        if !self.supports(skill) {
            return None;
        }
        Some(format!("{} is {}.", self.name, skill.verb()))
    }

    /// Perform every declared skill, in declaration order.
    pub fn performances(&self) -> Vec<String> {
        self.skills()
            .map(|skill| format!("{} is {}.", self.name, skill.verb()))
            .collect()
    }
}

/// A fixed roster of roles.
#[derive(Debug)]
pub struct Brigade {
    roles: Vec<Role>,
}

impl Brigade {
    /// Create a brigade.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::EmptyContext`] if `roles` is empty.
    pub fn new(roles: Vec<Role>) -> Result<Self, ContextError> {
        if roles.is_empty() {
            return Err(ContextError::EmptyContext { context: "brigade" });
        }
        Ok(Self { roles })
    }

    /// The roster, in registration order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Select the roles declaring `skill`, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::NoCapableRole`] if no role declares it.
    pub fn crew_for(&self, skill: Skill) -> Result<Vec<&Role>, ContextError> {
        let crew: Vec<&Role> = self.roles.iter().filter(|r| r.supports(skill)).collect();
        if crew.is_empty() {
            return Err(ContextError::NoCapableRole {
                skill: skill.to_string(),
            });
        }
        Ok(crew)
    }

    /// Have the selected roles perform `skill`, in registration order.
    pub fn perform(&self, skill: Skill) -> Result<Vec<String>, ContextError> {
        let crew = self.crew_for(skill)?;
        Ok(crew
            .into_iter()
            .filter_map(|role| role.perform(skill))
            .collect())
    }

    /// Every role performs each of its declared skills.
    pub fn service(&self) -> Vec<String> {
        self.roles
            .iter()
            .flat_map(|role| role.performances())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_skills() {
        let chef = Role::chef();
        assert!(chef.supports(Skill::Cook));
        assert!(chef.supports(Skill::Bake));
        assert!(!chef.supports(Skill::Eat));

        let baker = Role::baker();
        assert!(!baker.supports(Skill::Cook));
        assert!(baker.supports(Skill::Bake));
    }

    #[test]
    fn test_perform_requires_declaration() {
        let baker = Role::baker();
        assert_eq!(baker.perform(Skill::Bake).as_deref(), Some("Baker is baking."));
        assert_eq!(baker.perform(Skill::Cook), None);
    }

    #[test]
    fn test_performances_follow_declaration_order() {
        let chef = Role::chef();
        assert_eq!(
            chef.performances(),
            vec!["Chef is cooking.", "Chef is baking."]
        );
    }

    #[test]
    fn test_skillless_role_is_rejected() {
        let err = Role::new("Idler", []).unwrap_err();
        assert!(matches!(err, StrategyError::InvalidParameter { .. }));
    }

    #[test]
    fn test_brigade_selection_is_composition_time() {
        let brigade = Brigade::new(vec![Role::chef(), Role::baker()]).unwrap();

        let bakers = brigade.crew_for(Skill::Bake).unwrap();
        assert_eq!(bakers.len(), 2);

        let cooks = brigade.crew_for(Skill::Cook).unwrap();
        assert_eq!(cooks.len(), 1);
        assert_eq!(cooks[0].name(), "Chef");

        let err = brigade.crew_for(Skill::Eat).unwrap_err();
        assert!(matches!(err, ContextError::NoCapableRole { .. }));
    }

    #[test]
    fn test_brigade_perform() {
        let brigade = Brigade::new(vec![Role::chef(), Role::baker()]).unwrap();
        assert_eq!(
            brigade.perform(Skill::Bake).unwrap(),
            vec!["Chef is baking.", "Baker is baking."]
        );
    }

    #[test]
    fn test_full_service() {
        let brigade = Brigade::new(vec![Role::chef(), Role::baker()]).unwrap();
        assert_eq!(
            brigade.service(),
            vec!["Chef is cooking.", "Chef is baking.", "Baker is baking."]
        );
    }

    #[test]
    fn test_empty_brigade_is_rejected() {
        let err = Brigade::new(Vec::new()).unwrap_err();
        assert_eq!(err, ContextError::EmptyContext { context: "brigade" });
    }

    #[test]
    fn test_custom_role() {
        let gourmand = Role::new("Gourmand", [Skill::Eat]).unwrap();
        let brigade = Brigade::new(vec![gourmand]).unwrap();
        assert_eq!(
            brigade.perform(Skill::Eat).unwrap(),
            vec!["Gourmand is eating."]
        );
    }
}
