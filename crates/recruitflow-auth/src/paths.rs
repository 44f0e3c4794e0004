//! Pure classification of request paths.
//!
//! `classify` is total over all strings: every path maps to exactly one
//! [`PathClass`], and anything unmatched is `Unclassified`, which the
//! decision engine treats as protected. Denial happens by omission, never
//! allowance.

use recruitflow_entity::profile::Role;

/// Static categorization of a request path, independent of caller identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Reachable without authentication. `entry` marks the landing pages
    /// (site root, login, register) that bounce already-active users to
    /// their dashboard.
    Public {
        /// Whether this is an entry point.
        entry: bool,
    },
    /// A role-scoped onboarding page.
    SetupPath(Role),
    /// The shared employer/recruiter/org selection page.
    RoleSelection,
    /// A role's protected dashboard tree.
    Protected(Role),
    /// The bare application or organization root, normalized to the
    /// caller's dashboard.
    AppRoot,
    /// Anything else. Protected by default.
    Unclassified,
}

/// Classify a request path.
pub fn classify(path: &str) -> PathClass {
    let path = normalize(path);

    match path {
        "/" | "/login" | "/register" => return PathClass::Public { entry: true },
        "/about" | "/pricing" | "/terms" | "/privacy" | "/health" | "/jobs" => {
            return PathClass::Public { entry: false };
        }
        "/app" | "/app/org" => return PathClass::AppRoot,
        _ => {}
    }

    if under(path, "/auth") || under(path, "/jobs") {
        return PathClass::Public { entry: false };
    }
    if under(path, "/app/setup/applicant") {
        return PathClass::SetupPath(Role::Applicant);
    }
    if under(path, "/app/setup/admin") {
        return PathClass::SetupPath(Role::Admin);
    }
    if under(path, "/app/org/select") {
        return PathClass::RoleSelection;
    }
    if under(path, "/app/applicant") {
        return PathClass::Protected(Role::Applicant);
    }
    if under(path, "/app/org/employer") {
        return PathClass::Protected(Role::Employer);
    }
    if under(path, "/app/org/recruiter") {
        return PathClass::Protected(Role::Recruiter);
    }
    if under(path, "/app/admin") {
        return PathClass::Protected(Role::Admin);
    }
    if under(path, "/app/org") {
        return PathClass::Protected(Role::Org);
    }

    PathClass::Unclassified
}

/// Strip trailing slashes; an empty path is the site root.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether `path` is `root` itself or a descendant of it.
fn under(path: &str, root: &str) -> bool {
    path == root
        || path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points() {
        for path in ["/", "", "/login", "/register", "/login/"] {
            assert_eq!(classify(path), PathClass::Public { entry: true }, "{path}");
        }
    }

    #[test]
    fn test_public_content() {
        for path in [
            "/jobs",
            "/jobs/42",
            "/jobs/42/apply-info",
            "/auth/callback",
            "/about",
            "/pricing",
            "/terms",
            "/privacy",
            "/health",
        ] {
            assert_eq!(classify(path), PathClass::Public { entry: false }, "{path}");
        }
    }

    #[test]
    fn test_app_roots() {
        assert_eq!(classify("/app"), PathClass::AppRoot);
        assert_eq!(classify("/app/"), PathClass::AppRoot);
        assert_eq!(classify("/app/org"), PathClass::AppRoot);
    }

    #[test]
    fn test_setup_paths_are_role_scoped() {
        assert_eq!(
            classify("/app/setup/applicant"),
            PathClass::SetupPath(Role::Applicant)
        );
        assert_eq!(
            classify("/app/setup/applicant/resume"),
            PathClass::SetupPath(Role::Applicant)
        );
        assert_eq!(
            classify("/app/setup/admin"),
            PathClass::SetupPath(Role::Admin)
        );
        assert_eq!(classify("/app/org/select"), PathClass::RoleSelection);
        assert_eq!(classify("/app/org/select/confirm"), PathClass::RoleSelection);
    }

    #[test]
    fn test_protected_trees() {
        assert_eq!(
            classify("/app/applicant"),
            PathClass::Protected(Role::Applicant)
        );
        assert_eq!(
            classify("/app/applicant/profile"),
            PathClass::Protected(Role::Applicant)
        );
        assert_eq!(
            classify("/app/org/employer/jobs/7"),
            PathClass::Protected(Role::Employer)
        );
        assert_eq!(
            classify("/app/org/recruiter/dashboard"),
            PathClass::Protected(Role::Recruiter)
        );
        assert_eq!(
            classify("/app/admin/users"),
            PathClass::Protected(Role::Admin)
        );
        assert_eq!(
            classify("/app/org/billing"),
            PathClass::Protected(Role::Org)
        );
    }

    #[test]
    fn test_unmatched_is_unclassified() {
        assert_eq!(classify("/app/settings"), PathClass::Unclassified);
        assert_eq!(classify("/api/internal"), PathClass::Unclassified);
        assert_eq!(classify("/jobsboard"), PathClass::Unclassified);
        assert_eq!(classify("/applications"), PathClass::Unclassified);
    }

    #[test]
    fn test_prefix_matching_requires_segment_boundary() {
        // "/app/applicantx" must not fall into the applicant tree.
        assert_eq!(classify("/app/applicantx"), PathClass::Unclassified);
        assert_eq!(classify("/app/org/employers"), PathClass::Protected(Role::Org));
    }
}
