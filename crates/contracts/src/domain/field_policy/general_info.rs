use serde::Serialize;

use crate::domain::category::Category;

pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Unisex", "Kids"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfoConfig {
    pub has_gender_selection: bool,
    pub gender_options: &'static [&'static str],
    pub has_subtitle: bool,
    pub has_star_rating: bool,
    /// Offered-by / offer-type radio group
    pub has_radio_buttons: bool,
}

const PLAIN: GeneralInfoConfig = GeneralInfoConfig {
    has_gender_selection: false,
    gender_options: &[],
    has_subtitle: true,
    has_star_rating: false,
    has_radio_buttons: false,
};

const APPAREL: GeneralInfoConfig = GeneralInfoConfig {
    has_gender_selection: true,
    gender_options: GENDER_OPTIONS,
    ..PLAIN
};

const MEDIA: GeneralInfoConfig = GeneralInfoConfig {
    has_radio_buttons: true,
    ..PLAIN
};

static OTHERS: GeneralInfoConfig = PLAIN;

static TABLE: &[(&str, GeneralInfoConfig)] = &[
    ("textile", APPAREL),
    ("lifestyle", APPAREL),
    ("officesupply", PLAIN),
    ("electronics", PLAIN),
    ("fmcg", PLAIN),
    ("mobility", PLAIN),
    (
        "restaurant",
        GeneralInfoConfig {
            has_subtitle: false,
            ..PLAIN
        },
    ),
    (
        "hotels",
        GeneralInfoConfig {
            has_star_rating: true,
            ..PLAIN
        },
    ),
    (
        "airlinetickets",
        GeneralInfoConfig {
            has_subtitle: false,
            has_radio_buttons: true,
            ..PLAIN
        },
    ),
    ("entertainment", PLAIN),
    ("mediaonline", MEDIA),
    ("mediaoffline", MEDIA),
    ("others", PLAIN),
];

pub(super) fn resolve(category: &Category) -> &'static GeneralInfoConfig {
    category.pick(TABLE).unwrap_or(&OTHERS)
}

pub fn get_general_info_config(category: &str) -> &'static GeneralInfoConfig {
    resolve(&Category::resolve(category))
}
