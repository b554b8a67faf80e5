/// Kind of file attached to a course.
///
/// Each kind is stored under its own key prefix in the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Thumbnail,
    Document,
}

impl AssetKind {
    pub fn key_prefix(&self) -> &'static str {
        match self {
            AssetKind::Thumbnail => "thumbnails",
            AssetKind::Document => "pdfs",
        }
    }

    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            AssetKind::Thumbnail => &["jpg", "jpeg", "png"],
            AssetKind::Document => &["pdf"],
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        let extension = match file_name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return false,
        };
        self.allowed_extensions().contains(&extension.as_str())
    }

    /// Object key for a file of this kind, e.g. `thumbnails/intro.png`
    pub fn object_key(&self, file_name: &str) -> String {
        format!("{}/{}", self.key_prefix(), file_name)
    }
}
