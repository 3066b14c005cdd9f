use std::error::Error;

use actix_web::http::header::ContentDisposition;
use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDate};
use genpdf::elements::{Break, LinearLayout, Paragraph};
use genpdf::style::Style;
use genpdf::{Alignment, Document, Element as _, SimplePageDecorator};
use log::{error, info};

use common::model::{Certificate, CertificateStatus, Choice};
use common::requests::{certificate_file_name, ErrorBody, RenderCertificateRequest};

use super::FontSource;

pub async fn process(
    payload: web::Json<RenderCertificateRequest>,
    fonts: web::Data<FontSource>,
) -> HttpResponse {
    let record = payload.into_inner();
    let file_name = certificate_file_name(&record.data);
    let fonts = fonts.get_ref().clone();
    let issued_on = Local::now().date_naive();

    let rendered = web::block(move || {
        render_certificate(&fonts, &record.data, issued_on).map_err(|err| err.to_string())
    })
    .await;

    match rendered {
        Ok(Ok(bytes)) => {
            info!("Rendered {} ({} bytes)", file_name, bytes.len());
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header(ContentDisposition::attachment(file_name))
                .body(bytes)
        }
        Ok(Err(err)) => {
            error!("Certificate rendering failed: {}", err);
            HttpResponse::ServiceUnavailable().json(ErrorBody {
                message: format!("PDF generation failed: {}", err),
            })
        }
        Err(err) => {
            error!("Certificate rendering aborted: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Labelled lines printed under the candidate name. Empty values are left
/// out.
fn detail_lines(certificate: &Certificate, issued_on: NaiveDate) -> Vec<(&'static str, String)> {
    [
        ("Course type", certificate.course_type.clone()),
        ("Duration", certificate.duration.clone()),
        ("Status", CertificateStatus::label_of(&certificate.status).to_string()),
        ("Issued on", issued_on.format("%B %-d, %Y").to_string()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .collect()
}

/// Renders `certificate` into PDF bytes using the configured font family.
pub fn render_certificate(
    fonts: &FontSource,
    certificate: &Certificate,
    issued_on: NaiveDate,
) -> Result<Vec<u8>, Box<dyn Error>> {
    let family = genpdf::fonts::from_files(&fonts.dir, &fonts.family, None)?;
    let mut doc = Document::new(family);
    doc.set_title(format!("Certificate - {}", certificate.candidate_name));
    doc.set_font_size(12);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(20);
    doc.set_page_decorator(decorator);

    doc.push(Break::new(4));
    doc.push(
        Paragraph::new("Certificate of Completion")
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(26)),
    );
    doc.push(Break::new(3));
    doc.push(Paragraph::new("This is to certify that").aligned(Alignment::Center));
    doc.push(Break::new(1));
    doc.push(
        Paragraph::new(certificate.candidate_name.as_str())
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(20)),
    );
    doc.push(Break::new(1));
    doc.push(
        Paragraph::new(format!("has completed the course \"{}\"", certificate.course))
            .aligned(Alignment::Center),
    );
    doc.push(Break::new(3));

    let mut details = LinearLayout::vertical();
    for (label, value) in detail_lines(certificate, issued_on) {
        details.push(
            Paragraph::new(format!("{}: {}", label, value))
                .aligned(Alignment::Center)
                .styled(Style::new().with_font_size(11)),
        );
    }
    doc.push(details);

    let mut out = Vec::new();
    doc.render(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use serde_json::json;

    use super::super::configure_routes;
    use super::*;

    fn missing_fonts() -> FontSource {
        FontSource {
            dir: PathBuf::from("./no-such-fonts-dir"),
            family: "LiberationSans".to_string(),
        }
    }

    fn issued_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn details_skip_empty_values() {
        let certificate = Certificate {
            candidate_name: "Ada".into(),
            course: "Rust 101".into(),
            duration: "2 weeks".into(),
            status: "Issued".into(),
            ..Default::default()
        };
        let lines = detail_lines(&certificate, issued_on());
        assert_eq!(
            lines,
            vec![
                ("Duration", "2 weeks".to_string()),
                ("Status", "Issued".to_string()),
                ("Issued on", "March 5, 2024".to_string()),
            ]
        );
    }

    /// Fonts from the same settings the host reads, or `None` when the font
    /// files are not installed on this machine.
    fn installed_fonts() -> Option<FontSource> {
        let fonts = FontSource {
            dir: std::env::var_os("CONSOLE_FONTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./fonts")),
            family: std::env::var("CONSOLE_FONT_FAMILY")
                .unwrap_or_else(|_| "LiberationSans".to_string()),
        };
        ["Regular", "Bold", "Italic", "BoldItalic"]
            .iter()
            .all(|style| fonts.dir.join(format!("{}-{}.ttf", fonts.family, style)).is_file())
            .then_some(fonts)
    }

    #[test]
    fn unknown_status_prints_as_stored() {
        let certificate = Certificate {
            status: "Revoked".into(),
            ..Default::default()
        };
        let lines = detail_lines(&certificate, issued_on());
        assert_eq!(lines[0], ("Status", "Revoked".to_string()));
    }

    #[test]
    fn certificate_renders_to_pdf_when_fonts_are_installed() {
        let Some(fonts) = installed_fonts() else {
            eprintln!("skipping: certificate fonts are not installed");
            return;
        };
        let certificate = Certificate {
            candidate_name: "Ada Lovelace".into(),
            course: "Rust 101".into(),
            course_type: "Basic".into(),
            duration: "2 weeks".into(),
            status: "Issued".into(),
        };
        let bytes = render_certificate(&fonts, &certificate, issued_on()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn rendering_without_fonts_fails() {
        let result = render_certificate(&missing_fonts(), &Certificate::default(), issued_on());
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn missing_fonts_are_service_unavailable() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(missing_fonts()))
                .service(configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/console/certificates/pdf")
            .set_json(json!({
                "id": "c1",
                "candidateName": "Ada Lovelace",
                "course": "Rust 101",
                "courseType": "Basic",
                "duration": "2 weeks",
                "status": "Generated"
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: ErrorBody = actix_test::read_body_json(resp).await;
        assert!(body.message.starts_with("PDF generation failed"));
    }

    #[actix_web::test]
    async fn non_record_payload_is_rejected() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(missing_fonts()))
                .service(configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/console/certificates/pdf")
            .set_json(json!({"candidateName": "no id"}))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
