use yew::prelude::*;

use common::model::{Choice, Role, User};
use common::screen::Lookups;

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::ScreenEntity;

impl ScreenEntity for User {
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Role", "Department"];

    fn form_fields(form: &Self, _lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        html! {
            <>
                { fields::text(edit, "Username", &form.username, |f: &mut Self, v| f.username = v) }
                { fields::input(edit, "email", "Email", &form.email, |f: &mut Self, v| f.email = v) }
                { fields::text(edit, "First Name", &form.first_name, |f: &mut Self, v| f.first_name = v) }
                { fields::text(edit, "Last Name", &form.last_name, |f: &mut Self, v| f.last_name = v) }
                { fields::text(edit, "Candidate Name", &form.candidate_name, |f: &mut Self, v| f.candidate_name = v) }
                { fields::number(edit, "Age", form.age, |f: &mut Self, v| f.age = v) }
                { fields::text(edit, "Department Name", &form.department_name, |f: &mut Self, v| f.department_name = v) }
                { fields::text(edit, "ID Proof Number", &form.id_proof_no, |f: &mut Self, v| f.id_proof_no = v) }
                { fields::input(edit, "tel", "Mobile Number", &form.mobile_number, |f: &mut Self, v| f.mobile_number = v) }
                { fields::choice_select::<Self, Role>(edit, Some("Select Role"), &form.role, |f: &mut Self, v| f.role = v) }
                { fields::photo_upload(
                    edit,
                    "Upload Candidate Photo",
                    "Photo uploaded",
                    form.candidate_photo.is_some(),
                    |f: &mut Self, v| f.candidate_photo = v,
                ) }
                { fields::photo_upload(
                    edit,
                    "Upload ID Proof Photo",
                    "ID Proof uploaded",
                    form.id_proof_photo.is_some(),
                    |f: &mut Self, v| f.id_proof_photo = v,
                ) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        let role = Role::label_of(&self.role).to_string();
        html! {
            <>
                <td>
                    <div class="name-cell">
                        if let Some(photo) = &self.candidate_photo {
                            <img class="avatar" src={photo.clone()} alt="Candidate" />
                        }
                        <span>{ self.candidate_name.clone() }</span>
                    </div>
                </td>
                <td>{ self.email.clone() }</td>
                <td>{ role }</td>
                <td>{ self.department_name.clone() }</td>
            </>
        }
    }
}
