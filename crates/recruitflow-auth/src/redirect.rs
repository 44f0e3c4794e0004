//! Per-role redirect targets.
//!
//! Both lookups are exhaustive over [`Role`], so adding a role without a
//! target is a compile error rather than a missing map entry.

use recruitflow_entity::profile::Role;

/// The canonical dashboard root for a fully-onboarded account.
pub fn default_path_for(role: Role) -> &'static str {
    match role {
        Role::Applicant => "/app/applicant",
        Role::Employer => "/app/org/employer",
        Role::Recruiter => "/app/org/recruiter",
        Role::Org => "/app/org/select",
        Role::Admin => "/app/admin",
    }
}

/// The onboarding entry for an account that has not completed setup.
///
/// Employer, recruiter, and org accounts share the role-selection funnel.
pub fn setup_path_for(role: Role) -> &'static str {
    match role {
        Role::Applicant => "/app/setup/applicant",
        Role::Employer | Role::Recruiter | Role::Org => "/app/org/select",
        Role::Admin => "/app/setup/admin",
    }
}
