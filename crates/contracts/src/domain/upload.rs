use serde::{Deserialize, Serialize};

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
const SPREADSHEET_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "text/csv",
];

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
const MAX_SPREADSHEET_BYTES: usize = 10 * 1024 * 1024;

/// Multipart uploads the wizard performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    GoLiveImages,
    SizeChart,
    BulkUpload,
    HoardingExcel,
}

impl UploadKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::GoLiveImages => "product/upload_golive_images",
            UploadKind::SizeChart => "product/upload_size_chart",
            UploadKind::BulkUpload => "product/bulk_upload",
            UploadKind::HoardingExcel => "product/upload_hoardings_excel",
        }
    }

    /// Multipart field the files are attached under
    pub fn field_name(&self) -> &'static str {
        match self {
            UploadKind::GoLiveImages => "files",
            UploadKind::SizeChart => "sizechart",
            UploadKind::BulkUpload | UploadKind::HoardingExcel => "file",
        }
    }

    pub fn accepted_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::GoLiveImages | UploadKind::SizeChart => IMAGE_TYPES,
            UploadKind::BulkUpload | UploadKind::HoardingExcel => SPREADSHEET_TYPES,
        }
    }

    pub fn max_files(&self) -> usize {
        match self {
            UploadKind::GoLiveImages => 6,
            UploadKind::SizeChart | UploadKind::BulkUpload | UploadKind::HoardingExcel => 1,
        }
    }

    pub fn max_file_bytes(&self) -> usize {
        match self {
            UploadKind::GoLiveImages | UploadKind::SizeChart => MAX_IMAGE_BYTES,
            UploadKind::BulkUpload | UploadKind::HoardingExcel => MAX_SPREADSHEET_BYTES,
        }
    }

    pub fn accepts(&self, mime_type: &str) -> bool {
        let mime = mime_type.split(';').next().unwrap_or(mime_type).trim();
        self.accepted_types()
            .iter()
            .any(|t| t.eq_ignore_ascii_case(mime))
    }

    /// Check a batch of `(file name, mime type, size)` before it is sent
    pub fn check_files<'a>(
        &self,
        files: impl IntoIterator<Item = (&'a str, &'a str, usize)>,
    ) -> Result<(), String> {
        let mut count = 0;
        for (name, mime, size) in files {
            count += 1;
            if !self.accepts(mime) {
                return Err(format!("{}: file type {} is not allowed", name, mime));
            }
            if size == 0 {
                return Err(format!("{}: file is empty", name));
            }
            if size > self.max_file_bytes() {
                return Err(format!(
                    "{}: file exceeds {} MB",
                    name,
                    self.max_file_bytes() / (1024 * 1024)
                ));
            }
        }
        if count == 0 {
            return Err("Select at least one file".to_string());
        }
        if count > self.max_files() {
            return Err(format!("At most {} files can be uploaded", self.max_files()));
        }
        Ok(())
    }
}
