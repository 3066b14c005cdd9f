use serde::{Deserialize, Serialize};

use crate::model::{Certificate, Record};

/// Console host endpoint rendering a certificate as PDF.
pub const CERTIFICATE_PDF_PATH: &str = "/console/certificates/pdf";

/// Request payload for [`CERTIFICATE_PDF_PATH`]: the certificate record as
/// listed by the training API.
pub type RenderCertificateRequest = Record<Certificate>;

/// Suggested download name for a rendered certificate, e.g.
/// `certificate-ada-lovelace.pdf`.
///
/// The name travels in a `Content-Disposition` header, which browsers decode
/// as Latin-1, so it is kept to ASCII: non-ASCII letters are dropped.
pub fn certificate_file_name(certificate: &Certificate) -> String {
    let mut slug = String::new();
    for ch in certificate.candidate_name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_alphanumeric() {
            continue;
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "certificate.pdf".to_string()
    } else {
        format!("certificate-{slug}.pdf")
    }
}

/// Extracts the file name from a `Content-Disposition` header value.
pub fn disposition_file_name(header: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|part| {
        let (key, value) = part.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let value = value.trim().trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Error body returned by console host endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Certificate {
        Certificate {
            candidate_name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn file_name_is_a_slug_of_the_candidate() {
        assert_eq!(certificate_file_name(&named("Ada Lovelace")), "certificate-ada-lovelace.pdf");
        assert_eq!(certificate_file_name(&named("  O'Brien, Pat  ")), "certificate-o-brien-pat.pdf");
        assert_eq!(certificate_file_name(&named("")), "certificate.pdf");
        assert_eq!(certificate_file_name(&named("***")), "certificate.pdf");
    }

    #[test]
    fn file_name_stays_ascii() {
        assert_eq!(certificate_file_name(&named("José Núñez")), "certificate-jos-nez.pdf");
        assert_eq!(certificate_file_name(&named("李雷")), "certificate.pdf");
        assert!(certificate_file_name(&named("Zoë Ångström")).is_ascii());
    }

    #[test]
    fn disposition_yields_the_quoted_file_name() {
        assert_eq!(
            disposition_file_name(r#"attachment; filename="certificate-ada.pdf""#).as_deref(),
            Some("certificate-ada.pdf")
        );
        assert_eq!(
            disposition_file_name("attachment; FILENAME=plain.pdf").as_deref(),
            Some("plain.pdf")
        );
        assert_eq!(disposition_file_name("inline"), None);
        assert_eq!(disposition_file_name(r#"attachment; filename="""#), None);
    }
}
