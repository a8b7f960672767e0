use serde::{Deserialize, Serialize};

/// Suffix carried by every voucher category id ("qsrVoucher", "hotelsVoucher")
pub const VOUCHER_SUFFIX: &str = "Voucher";

/// Kind of listing a category produces.
///
/// Decides which step topology the wizard walks. Registered categories carry
/// their kind in the registry; unregistered ids are classified once in
/// [`CategoryKind::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Product,
    MediaOnline,
    MediaOffline,
    Voucher,
    HotelVoucher,
}

impl CategoryKind {
    pub fn is_voucher(&self) -> bool {
        matches!(self, CategoryKind::Voucher | CategoryKind::HotelVoucher)
    }

    pub fn is_media(&self) -> bool {
        matches!(self, CategoryKind::MediaOnline | CategoryKind::MediaOffline)
    }

    /// Classify a category id that is not in the registry
    pub fn classify(category_id: &str) -> Self {
        match category_id {
            "mediaonline" => CategoryKind::MediaOnline,
            "mediaoffline" => CategoryKind::MediaOffline,
            "hotelsVoucher" => CategoryKind::HotelVoucher,
            id if id.ends_with(VOUCHER_SUFFIX) => CategoryKind::Voucher,
            _ => CategoryKind::Product,
        }
    }
}
