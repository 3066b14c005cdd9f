use yew::prelude::*;

use common::model::Allotment;
use common::screen::{LookupKind, Lookups};

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::ScreenEntity;

impl ScreenEntity for Allotment {
    const LOOKUPS: &'static [LookupKind] = &[
        LookupKind::Courses,
        LookupKind::Experts,
        LookupKind::Locations,
    ];
    const COLUMNS: &'static [&'static str] =
        &["Candidate", "Course", "Type", "Expert", "Date", "Location"];

    fn form_fields(form: &Self, lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        let courses = lookups.courses.clone();
        html! {
            <>
                { fields::text(edit, "Candidate Name", &form.candidate_name, |f: &mut Self, v| f.candidate_name = v) }
                { fields::lookup_select(
                    edit,
                    "Select Course",
                    lookups.options(LookupKind::Courses, &form.course_name),
                    &form.course_name,
                    move |f: &mut Self, v: String| f.select_course(&v, &courses),
                ) }
                { fields::read_only("Course Type", &form.course_type) }
                { fields::lookup_select(
                    edit,
                    "Select Expert",
                    lookups.options(LookupKind::Experts, &form.expert_name),
                    &form.expert_name,
                    |f: &mut Self, v| f.expert_name = v,
                ) }
                { fields::input(edit, "date", "Date", &form.date, |f: &mut Self, v| f.date = v) }
                { fields::lookup_select(
                    edit,
                    "Select Location",
                    lookups.options(LookupKind::Locations, &form.location),
                    &form.location,
                    |f: &mut Self, v| f.location = v,
                ) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.candidate_name.clone() }</td>
                <td>{ self.course_name.clone() }</td>
                <td>{ self.course_type.clone() }</td>
                <td>{ self.expert_name.clone() }</td>
                <td>{ self.date.clone() }</td>
                <td>{ self.location.clone() }</td>
            </>
        }
    }
}
