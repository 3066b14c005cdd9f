//! Entity records exchanged with the training REST API.
//!
//! Each entity is modelled by its *form* type (every field except the
//! server-assigned id) plus the generic [`Record`] wrapper that adds the id.
//! The form type's `Default` is the empty form the screens reset to.

pub mod allotment;
pub mod candidate;
pub mod certificate;
pub mod choice;
pub mod course;
pub mod course_type;
pub mod evaluation;
pub mod expert;
pub mod lenient;
pub mod location;
pub mod record;
pub mod user;

pub use allotment::Allotment;
pub use candidate::Candidate;
pub use certificate::{Certificate, CertificateStatus};
pub use choice::Choice;
pub use course::{Course, CourseStatus};
pub use course_type::CourseType;
pub use evaluation::Evaluation;
pub use expert::Expert;
pub use location::Location;
pub use record::{decode_list, Entity, Named, Record};
pub use user::{Role, User};
