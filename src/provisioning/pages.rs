//! Pages the add-on needs to be navigable.

use serde::Serialize;

/// A page that must exist in the host, identified by its canonical slug.
///
/// `body_template` is stored verbatim; expanding the shortcode inside it is the
/// rendering layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub body_template: &'static str,
    pub slug: &'static str,
}

pub static PAGE_DIRECTORY: [PageSpec; 6] = [
    PageSpec {
        key: "login",
        title: "Login",
        body_template: "[lms_login]",
        slug: "lms-login",
    },
    PageSpec {
        key: "register",
        title: "Register",
        body_template: "[lms_register]",
        slug: "lms-register",
    },
    PageSpec {
        key: "subscription_packages",
        title: "Subscription Packages",
        body_template: "[lms_subscription_packages]",
        slug: "subscription-packages",
    },
    PageSpec {
        key: "student_dashboard",
        title: "Student Dashboard",
        body_template: "[lms_student_dashboard]",
        slug: "student-dashboard",
    },
    PageSpec {
        key: "instructor_dashboard",
        title: "Instructor Dashboard",
        body_template: "[lms_instructor_dashboard]",
        slug: "instructor-dashboard",
    },
    PageSpec {
        key: "institution_dashboard",
        title: "Institution Dashboard",
        body_template: "[lms_institution_dashboard]",
        slug: "institution-dashboard",
    },
];
