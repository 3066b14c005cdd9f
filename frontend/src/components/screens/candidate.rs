use yew::prelude::*;

use common::model::Candidate;
use common::screen::Lookups;

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::ScreenEntity;

impl ScreenEntity for Candidate {
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Phone"];

    fn form_fields(form: &Self, _lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        html! {
            <>
                { fields::text(edit, "Full Name", &form.name, |f: &mut Self, v| f.name = v) }
                { fields::input(edit, "email", "Email", &form.email, |f: &mut Self, v| f.email = v) }
                { fields::input(edit, "tel", "Phone", &form.phone, |f: &mut Self, v| f.phone = v) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.name.clone() }</td>
                <td>{ self.email.clone() }</td>
                <td>{ self.phone.clone() }</td>
            </>
        }
    }
}
