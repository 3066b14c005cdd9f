use crate::model::{decode_list, Course, CourseType, Entity, Expert, Location, Named, Record};

/// A secondary list a screen loads to fill its dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    CourseTypes,
    Experts,
    Courses,
    Locations,
}

impl LookupKind {
    pub fn resource(self) -> &'static str {
        match self {
            LookupKind::CourseTypes => CourseType::RESOURCE,
            LookupKind::Experts => Expert::RESOURCE,
            LookupKind::Courses => Course::RESOURCE,
            LookupKind::Locations => Location::RESOURCE,
        }
    }
}

/// One dropdown entry. `known` is false for a value the record holds but
/// the loaded list no longer contains (the referenced entity was renamed or
/// deleted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub name: String,
    pub known: bool,
}

/// Reference lists keyed by [`LookupKind`]. Each list is independent and
/// degrades to empty on any failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    pub course_types: Vec<Record<CourseType>>,
    pub experts: Vec<Record<Expert>>,
    pub courses: Vec<Record<Course>>,
    pub locations: Vec<Record<Location>>,
}

fn decode_or_empty<E: Entity>(body: Option<&str>) -> Vec<Record<E>> {
    body.and_then(|body| decode_list::<E>(body).ok())
        .unwrap_or_default()
}

fn names_of<E: Named>(records: &[Record<E>]) -> Vec<&str> {
    records.iter().map(|record| record.data.name()).collect()
}

impl Lookups {
    /// Stores the outcome of a lookup fetch. `None` means the request failed.
    pub fn load(&mut self, kind: LookupKind, body: Option<&str>) {
        match kind {
            LookupKind::CourseTypes => self.course_types = decode_or_empty(body),
            LookupKind::Experts => self.experts = decode_or_empty(body),
            LookupKind::Courses => self.courses = decode_or_empty(body),
            LookupKind::Locations => self.locations = decode_or_empty(body),
        }
    }

    pub fn names(&self, kind: LookupKind) -> Vec<&str> {
        match kind {
            LookupKind::CourseTypes => names_of(&self.course_types),
            LookupKind::Experts => names_of(&self.experts),
            LookupKind::Courses => names_of(&self.courses),
            LookupKind::Locations => names_of(&self.locations),
        }
    }

    /// Dropdown entries for `kind`, keeping `current` selectable even when
    /// it no longer matches a loaded record.
    pub fn options(&self, kind: LookupKind, current: &str) -> Vec<LookupOption> {
        let names = self.names(kind);
        let mut options: Vec<LookupOption> = names
            .iter()
            .map(|name| LookupOption {
                name: name.to_string(),
                known: true,
            })
            .collect();
        if !current.is_empty() && !names.contains(&current) {
            options.push(LookupOption {
                name: current.to_string(),
                known: false,
            });
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPERTS: &str = r#"[
        {"id": "e1", "name": "Grace", "email": "g@example.com", "specialization": "Compilers"},
        {"id": "e2", "name": "Linus", "email": "l@example.com", "specialization": "Kernels"}
    ]"#;

    #[test]
    fn loaded_lists_expose_names_in_order() {
        let mut lookups = Lookups::default();
        lookups.load(LookupKind::Experts, Some(EXPERTS));
        assert_eq!(lookups.names(LookupKind::Experts), ["Grace", "Linus"]);
        assert!(lookups.names(LookupKind::Locations).is_empty());
    }

    #[test]
    fn failures_degrade_to_empty_silently() {
        let mut lookups = Lookups::default();
        lookups.load(LookupKind::Experts, Some(EXPERTS));
        lookups.load(LookupKind::Experts, None);
        assert!(lookups.experts.is_empty());

        lookups.load(LookupKind::Courses, Some(r#"{"error": "boom"}"#));
        assert!(lookups.courses.is_empty());

        lookups.load(LookupKind::Locations, Some(r#"["not a record"]"#));
        assert!(lookups.locations.is_empty());
    }

    #[test]
    fn orphaned_reference_stays_selectable() {
        let mut lookups = Lookups::default();
        lookups.load(LookupKind::Experts, Some(EXPERTS));

        let options = lookups.options(LookupKind::Experts, "Ada");
        assert_eq!(options.len(), 3);
        assert_eq!(
            options[2],
            LookupOption {
                name: "Ada".into(),
                known: false
            }
        );

        let options = lookups.options(LookupKind::Experts, "Grace");
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.known));

        assert_eq!(lookups.options(LookupKind::Experts, "").len(), 2);
    }

    #[test]
    fn resources_match_entities() {
        assert_eq!(LookupKind::CourseTypes.resource(), "/api/course-types");
        assert_eq!(LookupKind::Courses.resource(), "/api/courses");
    }
}
