use yew::prelude::*;

use common::model::Expert;
use common::screen::Lookups;

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::ScreenEntity;

impl ScreenEntity for Expert {
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Specialization"];

    fn form_fields(form: &Self, _lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        html! {
            <>
                { fields::text(edit, "Full Name", &form.name, |f: &mut Self, v| f.name = v) }
                { fields::input(edit, "email", "Email", &form.email, |f: &mut Self, v| f.email = v) }
                { fields::text(edit, "Specialization", &form.specialization, |f: &mut Self, v| f.specialization = v) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.name.clone() }</td>
                <td>{ self.email.clone() }</td>
                <td>{ self.specialization.clone() }</td>
            </>
        }
    }
}
