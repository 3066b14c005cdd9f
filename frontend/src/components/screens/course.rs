use yew::prelude::*;

use common::model::{Choice, Course, CourseStatus};
use common::screen::{LookupKind, Lookups};

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::ScreenEntity;

impl ScreenEntity for Course {
    const LOOKUPS: &'static [LookupKind] = &[LookupKind::CourseTypes, LookupKind::Experts];
    const COLUMNS: &'static [&'static str] = &["Name", "Type", "Duration", "Expert", "Status"];

    fn form_fields(form: &Self, lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        html! {
            <>
                { fields::text(edit, "Course Name", &form.name, |f: &mut Self, v| f.name = v) }
                { fields::text(edit, "Duration (e.g., 2 weeks, 3 months)", &form.duration, |f: &mut Self, v| f.duration = v) }
                { fields::lookup_select(
                    edit,
                    "Select Course Type",
                    lookups.options(LookupKind::CourseTypes, &form.course_type),
                    &form.course_type,
                    |f: &mut Self, v| f.course_type = v,
                ) }
                { fields::lookup_select(
                    edit,
                    "Select Expert",
                    lookups.options(LookupKind::Experts, &form.expert),
                    &form.expert,
                    |f: &mut Self, v| f.expert = v,
                ) }
                { fields::choice_select::<Self, CourseStatus>(edit, Some("Select Status"), &form.status, |f: &mut Self, v| f.status = v) }
                { fields::text_area(edit, "Description", &form.description, |f: &mut Self, v| f.description = v) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        let status = CourseStatus::label_of(&self.status).to_string();
        html! {
            <>
                <td>{ self.name.clone() }</td>
                <td>{ self.course_type.clone() }</td>
                <td>{ self.duration.clone() }</td>
                <td>{ self.expert.clone() }</td>
                <td>
                    <span class={classes!("badge", status_class(self.known_status()))}>{ status }</span>
                </td>
            </>
        }
    }
}

fn status_class(status: Option<CourseStatus>) -> &'static str {
    match status {
        Some(CourseStatus::Active) => "badge-green",
        Some(CourseStatus::Upcoming) => "badge-blue",
        Some(CourseStatus::Inactive) | None => "badge-grey",
    }
}
