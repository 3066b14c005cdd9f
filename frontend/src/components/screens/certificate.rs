use yew::prelude::*;

use common::model::{Certificate, CertificateStatus, Choice};
use common::requests::CERTIFICATE_PDF_PATH;
use common::screen::Lookups;

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::ScreenEntity;

impl ScreenEntity for Certificate {
    const COLUMNS: &'static [&'static str] =
        &["Candidate Name", "Course", "Course Type", "Duration", "Status"];

    const DOCUMENT_PATH: Option<&'static str> = Some(CERTIFICATE_PDF_PATH);

    fn form_fields(form: &Self, _lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        html! {
            <>
                { fields::text(edit, "Candidate Name", &form.candidate_name, |f: &mut Self, v| f.candidate_name = v) }
                { fields::text(edit, "Course", &form.course, |f: &mut Self, v| f.course = v) }
                { fields::text(edit, "Course Type", &form.course_type, |f: &mut Self, v| f.course_type = v) }
                { fields::text(edit, "Duration", &form.duration, |f: &mut Self, v| f.duration = v) }
                { fields::choice_select::<Self, CertificateStatus>(edit, None, &form.status, |f: &mut Self, v| f.status = v) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        let badge = match self.known_status() {
            Some(CertificateStatus::Generated) => "badge-green",
            Some(CertificateStatus::Issued) => "badge-blue",
            Some(CertificateStatus::Pending) => "badge-yellow",
            None => "badge-grey",
        };
        html! {
            <>
                <td>{ self.candidate_name.clone() }</td>
                <td>{ self.course.clone() }</td>
                <td>{ self.course_type.clone() }</td>
                <td>{ self.duration.clone() }</td>
                <td><span class={classes!("badge", badge)}>{ CertificateStatus::label_of(&self.status).to_string() }</span></td>
            </>
        }
    }
}
