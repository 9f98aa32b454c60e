//! Text helpers for the report, file and staff pages.

use crate::store::UploadedFile;

/// Put each sentence of a log report on its own line.
pub fn format_report_text(text: &str) -> String {
    text.split('.')
        .map(|line| format!("\n{line}"))
        .collect::<String>()
        .trim()
        .to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    Text(String),
    /// PDF text extraction is not done in the browser.
    PdfUnavailable,
    Binary,
}

pub fn preview(file: &UploadedFile) -> Preview {
    if file.is_pdf() {
        return Preview::PdfUnavailable;
    }
    match std::str::from_utf8(&file.data) {
        Ok(text) => Preview::Text(format_report_text(text)),
        Err(_) => Preview::Binary,
    }
}

pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

/// Caption under a selected staff member.
pub fn faces_caption(count: usize) -> String {
    match count {
        1 => "1 image uploaded".to_string(),
        n => format!("{n} images uploaded"),
    }
}

pub fn delete_person_prompt(name: &str) -> String {
    format!("Are you sure you want to delete staff member {name}?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_text_breaks_on_periods() {
        let text = "12.03 Person detected. Camera 2 offline. Done";
        assert_eq!(
            format_report_text(text),
            "12\n03 Person detected\n Camera 2 offline\n Done"
        );
        assert_eq!(format_report_text(""), "");
    }

    #[test]
    fn preview_kinds() {
        let text = UploadedFile::new("log.txt", Some("text/plain".into()), b"A. B".to_vec());
        assert_eq!(preview(&text), Preview::Text("A\n B".into()));

        let pdf = UploadedFile::new("camera_1_logs.pdf", None, b"%PDF-1.4".to_vec());
        assert_eq!(preview(&pdf), Preview::PdfUnavailable);

        let png = UploadedFile::new("face.png", None, vec![0x89, 0x50, 0xff, 0xfe]);
        assert_eq!(preview(&png), Preview::Binary);
    }

    #[test]
    fn sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn captions() {
        assert_eq!(faces_caption(0), "0 images uploaded");
        assert_eq!(faces_caption(1), "1 image uploaded");
        assert_eq!(faces_caption(4), "4 images uploaded");
        assert_eq!(
            delete_person_prompt("Ivanov"),
            "Are you sure you want to delete staff member Ivanov?"
        );
    }
}
