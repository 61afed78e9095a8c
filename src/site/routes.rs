/// The four pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Education,
    Experience,
    Projects,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Education, Page::Experience, Page::Projects];

    /// Resolves a request path. Matching is exact: `/education/` does not
    /// resolve. The empty path is the root.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "" | "/" => Some(Page::Home),
            "/education" => Some(Page::Education),
            "/experience" => Some(Page::Experience),
            "/projects" => Some(Page::Projects),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Education => "/education",
            Page::Experience => "/experience",
            Page::Projects => "/projects",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Education => "Education",
            Page::Experience => "Experience",
            Page::Projects => "Projects",
        }
    }

    #[must_use]
    pub fn template_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Education => "education.html",
            Page::Experience => "experience.html",
            Page::Projects => "projects.html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_resolves_from_its_own_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn unknown_and_trailing_slash_paths_do_not_resolve() {
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/education/"), None);
        assert_eq!(Page::from_path("/Projects"), None);
        assert_eq!(Page::from_path("/blog"), None);
    }
}
