//! Console pages and the URL paths they live at.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Locations,
    Candidates,
    CourseTypes,
    Courses,
    Allotments,
    Experts,
    Evaluations,
    Users,
    Certificates,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 10] = [
        Page::Dashboard,
        Page::Locations,
        Page::Candidates,
        Page::CourseTypes,
        Page::Courses,
        Page::Allotments,
        Page::Experts,
        Page::Evaluations,
        Page::Users,
        Page::Certificates,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Locations => "/locations",
            Page::Candidates => "/candidates",
            Page::CourseTypes => "/course-types",
            Page::Courses => "/courses",
            Page::Allotments => "/allotments",
            Page::Experts => "/experts",
            Page::Evaluations => "/evaluations",
            Page::Users => "/users",
            Page::Certificates => "/certificates",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Locations => "Locations",
            Page::Candidates => "Candidates",
            Page::CourseTypes => "Course Types",
            Page::Courses => "Courses",
            Page::Allotments => "Allotments",
            Page::Experts => "Experts",
            Page::Evaluations => "Evaluations",
            Page::Users => "Users",
            Page::Certificates => "Certificates",
        }
    }

    /// Resolves a browser path. A trailing slash is ignored and anything
    /// unrecognised lands on the dashboard.
    pub fn from_path(path: &str) -> Page {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Page::ALL
            .into_iter()
            .find(|page| page.path() == path)
            .unwrap_or_default()
    }
}
