//! Bundled language reference data.
//!
//! Display names and linguistic areas for the languages colex ships with.
//! Areas follow established contact zones and are independent of family:
//! Basque sits in the European area, Azerbaijani in the Middle East.
//! Callers with their own [`LanguageTable`](crate::entities::LanguageTable)
//! take precedence over these tables.

/// A linguistic area and the finer subarea within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaInfo {
    pub name: &'static str,
    pub subarea: &'static str,
}

const fn area(name: &'static str, subarea: &'static str) -> AreaInfo {
    AreaInfo { name, subarea }
}

/// Language code -> area, in code order for binary search.
const LANGUAGE_AREAS: &[(&str, AreaInfo)] = &[
    ("amh", area("Middle Eastern", "Semitic")),
    ("ara", area("Middle Eastern", "Semitic")),
    ("azj", area("Middle Eastern", "Turkic")),
    ("ben", area("South Asian", "Indo-Aryan")),
    ("bod", area("Northeast Asian", "Tibetic")),
    ("bul", area("European", "Balkan")),
    ("ces", area("European", "Eastern European")),
    ("deu", area("European", "Western European")),
    ("ell", area("European", "Balkan")),
    ("eng", area("European", "Western European")),
    ("est", area("Uralic", "Finnic")),
    ("eus", area("European", "Western European")),
    ("fin", area("Uralic", "Finnic")),
    ("fra", area("European", "Western European")),
    ("heb", area("Middle Eastern", "Semitic")),
    ("hin", area("South Asian", "Indo-Aryan")),
    ("hun", area("European", "Central European")),
    ("hye", area("Middle Eastern", "Caucasian")),
    ("ind", area("Southeast Asian", "Maritime")),
    ("ita", area("European", "Western European")),
    ("jav", area("Southeast Asian", "Maritime")),
    ("jpn", area("East Asian", "Japanese")),
    ("kan", area("South Asian", "Dravidian")),
    ("kat", area("Middle Eastern", "Caucasian")),
    ("khm", area("Southeast Asian", "Mainland")),
    ("kor", area("East Asian", "Korean")),
    ("lao", area("Southeast Asian", "Mainland")),
    ("mal", area("South Asian", "Dravidian")),
    ("msa", area("Southeast Asian", "Maritime")),
    ("nld", area("European", "Western European")),
    ("pol", area("European", "Eastern European")),
    ("por", area("European", "Western European")),
    ("ron", area("European", "Balkan")),
    ("rus", area("European", "Eastern European")),
    ("spa", area("European", "Western European")),
    ("swa", area("African", "Eastern")),
    ("tam", area("South Asian", "Dravidian")),
    ("tel", area("South Asian", "Dravidian")),
    ("tha", area("Southeast Asian", "Mainland")),
    ("tur", area("Central Asian", "Turkic")),
    ("urd", area("South Asian", "Indo-Aryan")),
    ("uzb", area("Central Asian", "Turkic")),
    ("vie", area("Southeast Asian", "Mainland")),
    ("yor", area("African", "Western")),
    ("yue", area("East Asian", "Sinitic")),
    ("zho", area("East Asian", "Sinitic")),
    ("zul", area("African", "Southern")),
];

/// Language code -> display name, in code order for binary search.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("amh", "Amharic"),
    ("ara", "Arabic"),
    ("azj", "Azerbaijani"),
    ("ben", "Bengali"),
    ("bod", "Tibetan"),
    ("bul", "Bulgarian"),
    ("ces", "Czech"),
    ("deu", "German"),
    ("ell", "Greek"),
    ("eng", "English"),
    ("est", "Estonian"),
    ("eus", "Basque"),
    ("fin", "Finnish"),
    ("fra", "French"),
    ("heb", "Hebrew"),
    ("hin", "Hindi"),
    ("hun", "Hungarian"),
    ("hye", "Armenian"),
    ("ind", "Indonesian"),
    ("ita", "Italian"),
    ("jav", "Javanese"),
    ("jpn", "Japanese"),
    ("kan", "Kannada"),
    ("kat", "Georgian"),
    ("khm", "Khmer"),
    ("kor", "Korean"),
    ("lao", "Lao"),
    ("mal", "Malayalam"),
    ("msa", "Malay"),
    ("nld", "Dutch"),
    ("pol", "Polish"),
    ("por", "Portuguese"),
    ("ron", "Romanian"),
    ("rus", "Russian"),
    ("spa", "Spanish"),
    ("swa", "Swahili"),
    ("tam", "Tamil"),
    ("tel", "Telugu"),
    ("tha", "Thai"),
    ("tur", "Turkish"),
    ("urd", "Urdu"),
    ("uzb", "Uzbek"),
    ("vie", "Vietnamese"),
    ("yor", "Yoruba"),
    ("yue", "Cantonese"),
    ("zho", "Chinese"),
    ("zul", "Zulu"),
];

fn lookup<T: Copy>(table: &[(&str, T)], code: &str) -> Option<T> {
    table
        .binary_search_by(|(key, _)| (*key).cmp(code))
        .ok()
        .map(|idx| table[idx].1)
}

/// Linguistic area of a language, if bundled.
#[must_use]
pub fn language_area(code: &str) -> Option<AreaInfo> {
    lookup(LANGUAGE_AREAS, code)
}

/// Display name of a language, if bundled.
#[must_use]
pub fn language_name(code: &str) -> Option<&'static str> {
    lookup(LANGUAGE_NAMES, code)
}

/// All bundled language codes, in code order.
pub fn language_codes() -> impl Iterator<Item = &'static str> {
    LANGUAGE_NAMES.iter().map(|(code, _)| *code)
}
