use yew::prelude::*;

use common::import::parse_evaluations;
use common::model::Evaluation;
use common::screen::Lookups;

use crate::components::crud::fields::{self, FormEdit};
use crate::components::crud::{Import, ScreenEntity};

impl ScreenEntity for Evaluation {
    const COLUMNS: &'static [&'static str] = &[
        "Candidate", "Course", "Type", "Location", "Duration", "Date", "Status", "Marks",
    ];

    /// One bulk request per file. A sheet with a header row but no data rows
    /// is reported as an import failure instead of posting an empty batch.
    const IMPORT: Option<Import<Self>> = Some(Import {
        button_label: "Upload Excel",
        accept: ".xlsx,.xlsm,.xls,.xlsb,.ods,.csv",
        bulk_path: Evaluation::BULK_RESOURCE,
        parse: parse_evaluations,
    });

    fn form_fields(form: &Self, _lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html {
        html! {
            <>
                { fields::text(edit, "Candidate Name", &form.candidate_name, |f: &mut Self, v| f.candidate_name = v) }
                { fields::text(edit, "Course Name", &form.course_name, |f: &mut Self, v| f.course_name = v) }
                { fields::text(edit, "Course Type", &form.course_type, |f: &mut Self, v| f.course_type = v) }
                { fields::text(edit, "Location", &form.location, |f: &mut Self, v| f.location = v) }
                { fields::text(edit, "Duration", &form.duration, |f: &mut Self, v| f.duration = v) }
                { fields::input(edit, "date", "Date", &form.date, |f: &mut Self, v| f.date = v) }
                { fields::text(edit, "Status", &form.status, |f: &mut Self, v| f.status = v) }
                { fields::number(edit, "Marks", form.marks, |f: &mut Self, v| f.marks = v) }
                { fields::text_area(edit, "Remark", &form.remark, |f: &mut Self, v| f.remark = v) }
            </>
        }
    }

    fn row_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.candidate_name.clone() }</td>
                <td>{ self.course_name.clone() }</td>
                <td>{ self.course_type.clone() }</td>
                <td>{ self.location.clone() }</td>
                <td>{ self.duration.clone() }</td>
                <td>{ self.date.clone() }</td>
                <td>{ self.status.clone() }</td>
                <td>{ self.marks }</td>
            </>
        }
    }
}
