use yew::prelude::*;

use common::model::Location;
use common::screen::Lookups;

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::ScreenEntity;

impl ScreenEntity for Location {
    const COLUMNS: &'static [&'static str] = &["Name", "Address"];

    fn form_fields(form: &Self, _lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        html! {
            <>
                { fields::text(edit, "Location Name", &form.name, |f: &mut Self, v| f.name = v) }
                { fields::text_area(edit, "Address", &form.address, |f: &mut Self, v| f.address = v) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.name.clone() }</td>
                <td>{ self.address.clone() }</td>
            </>
        }
    }
}
