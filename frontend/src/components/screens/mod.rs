//! Form and table definitions of each management screen.

mod allotment;
mod candidate;
mod certificate;
mod course;
mod course_type;
mod evaluation;
mod expert;
mod location;
mod user;
