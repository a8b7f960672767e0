/// A file picked by the seller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// Multipart body: files under one field name plus plain text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartUpload {
    pub field_name: String,
    pub files: Vec<UploadFile>,
    pub text_fields: Vec<(String, String)>,
}

impl MultipartUpload {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            files: Vec::new(),
            text_fields: Vec::new(),
        }
    }

    pub fn file(mut self, file: UploadFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.text_fields.push((key.into(), value.into()));
        self
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let upload = MultipartUpload::new("files")
            .file(UploadFile::new("a.png", "image/png", vec![1, 2, 3]))
            .file(UploadFile::new("b.png", "image/png", vec![4]))
            .text("id", "64f1");

        assert_eq!(upload.files.len(), 2);
        assert_eq!(upload.total_bytes(), 4);
        assert_eq!(upload.text_fields, vec![("id".to_string(), "64f1".to_string())]);
    }
}
