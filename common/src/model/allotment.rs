use serde::{Deserialize, Serialize};

use super::course::Course;
use super::lenient;
use super::record::{Entity, Record};

/// Assignment of a candidate to a course, expert, date and location, all
/// referenced by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Allotment {
    #[serde(deserialize_with = "lenient::text")]
    pub candidate_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub course_name: String,
    /// Read-only in the form: derived from the selected course.
    #[serde(deserialize_with = "lenient::text")]
    pub course_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub expert_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
}

impl Allotment {
    /// Selects a course by name and derives the course type from the loaded
    /// course list. An unknown or empty course name clears the type.
    pub fn select_course(&mut self, course_name: &str, courses: &[Record<Course>]) {
        self.course_name = course_name.to_string();
        self.course_type = courses
            .iter()
            .find(|course| !course_name.is_empty() && course.data.name == course_name)
            .map(|course| course.data.course_type.clone())
            .unwrap_or_default();
    }
}

impl Entity for Allotment {
    const RESOURCE: &'static str = "/api/allotments";
    const SINGULAR: &'static str = "Allotment";
    const PLURAL: &'static str = "allotments";
    const TITLE: &'static str = "Course Allotment Management";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> Vec<Record<Course>> {
        vec![
            Record::new(
                "c1",
                Course {
                    name: "Rust 101".into(),
                    course_type: "Basic".into(),
                    ..Default::default()
                },
            ),
            Record::new(
                "c2",
                Course {
                    name: "Async Rust".into(),
                    course_type: "Advanced".into(),
                    ..Default::default()
                },
            ),
        ]
    }

    #[test]
    fn selecting_a_course_fills_its_type() {
        let mut form = Allotment::default();
        form.select_course("Async Rust", &courses());
        assert_eq!(form.course_name, "Async Rust");
        assert_eq!(form.course_type, "Advanced");
    }

    #[test]
    fn selecting_no_course_clears_the_type() {
        let mut form = Allotment::default();
        form.select_course("Async Rust", &courses());
        form.select_course("", &courses());
        assert_eq!(form.course_name, "");
        assert_eq!(form.course_type, "");
    }

    #[test]
    fn unknown_course_clears_the_type() {
        let mut form = Allotment {
            course_type: "Basic".into(),
            ..Default::default()
        };
        form.select_course("Renamed Course", &courses());
        assert_eq!(form.course_type, "");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let value = serde_json::to_value(Allotment::default()).unwrap();
        for key in ["candidateName", "courseName", "courseType", "expertName", "date", "location"] {
            assert!(value.get(key).is_some(), "{key}");
        }
    }
}
