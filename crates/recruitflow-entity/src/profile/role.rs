//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single authoritative category of an account.
///
/// Role governs which dashboard tree the account may access. The set is
/// closed: every consumer matches exhaustively, so adding a role is a
/// compile-checked change rather than a silently-missing map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A job seeker with a personal applicant dashboard.
    Applicant,
    /// An employer posting jobs under an organization.
    Employer,
    /// A recruiter sourcing candidates under an organization.
    Recruiter,
    /// An organization account that has not yet picked its working context.
    Org,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Whether this role belongs to the shared organization funnel.
    ///
    /// Employer, recruiter, and org accounts share one role-selection page
    /// as their setup entry; applicants and admins have their own.
    pub fn is_org_scoped(&self) -> bool {
        matches!(self, Self::Employer | Self::Recruiter | Self::Org)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Employer => "employer",
            Self::Recruiter => "recruiter",
            Self::Org => "org",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = recruitflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applicant" => Ok(Self::Applicant),
            "employer" => Ok(Self::Employer),
            "recruiter" => Ok(Self::Recruiter),
            "org" => Ok(Self::Org),
            "admin" => Ok(Self::Admin),
            _ => Err(recruitflow_core::AppError::validation(format!(
                "Invalid account role: '{s}'. Expected one of: applicant, employer, recruiter, org, admin"
            ))),
        }
    }
}
