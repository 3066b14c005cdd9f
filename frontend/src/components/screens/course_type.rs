use yew::prelude::*;

use common::model::CourseType;
use common::screen::Lookups;

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::ScreenEntity;

impl ScreenEntity for CourseType {
    const COLUMNS: &'static [&'static str] = &["Name", "Description"];

    fn form_fields(form: &Self, _lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        html! {
            <>
                { fields::text(edit, "Course Type Name", &form.name, |f: &mut Self, v| f.name = v) }
                { fields::text_area(edit, "Description", &form.description, |f: &mut Self, v| f.description = v) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.name.clone() }</td>
                <td>{ self.description.clone() }</td>
            </>
        }
    }
}
