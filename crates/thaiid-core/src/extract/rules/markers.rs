//! Literal tokens printed on Thai ID cards, with the OCR misreads we have seen.

/// Category of a Thai title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleCategory {
    Civilian,
    Military,
    Academic,
    Medical,
}

/// Thai titles that precede the holder's name, tried in this order.
///
/// `นางสาว` sits before `นาง` so the longer title wins.
pub const THAI_TITLES: &[(TitleCategory, &[&str])] = &[
    (
        TitleCategory::Civilian,
        &["น.ส.", "นางสาว", "นาย", "นาง", "ด.ช.", "ด.ญ."],
    ),
    (
        TitleCategory::Military,
        &["พล.ร.ท.", "พล.ท.", "พล.ต.", "พล.จ.", "ท.ท.", "ทหาร"],
    ),
    (TitleCategory::Academic, &["ดร.", "ศาสตราจารย์"]),
    (TitleCategory::Medical, &["หมอ", "แพทย์"]),
];

/// English titles preceding the given name.
pub const ENGLISH_TITLES: &[&str] = &["mr", "mrs", "miss", "dr", "prof", "sir", "rev"];

/// A marker word that anchors an address component.
#[derive(Debug, Clone, Copy)]
pub struct MarkerToken {
    /// Spelled-out forms.
    pub words: &'static [&'static str],
    /// Known OCR misspellings of the spelled-out forms.
    pub misspellings: &'static [&'static str],
    /// Abbreviated forms.
    pub abbreviations: &'static [&'static str],
}

impl MarkerToken {
    /// All forms: words, then misspellings, then abbreviations.
    pub fn variants(&self) -> impl Iterator<Item = &'static str> {
        self.words
            .iter()
            .chain(self.misspellings)
            .chain(self.abbreviations)
            .copied()
    }

    /// Regex alternation over every form, escaped.
    pub fn alternation(&self) -> String {
        alternation(self.variants())
    }
}

/// Village number (หมู่ที่).
pub const VILLAGE: MarkerToken = MarkerToken {
    words: &["หมู่ที่"],
    misspellings: &["หมู่ที", "หมูที่", "หม่ที่", "หมูที", "หม่ที", "หมที"],
    abbreviations: &["ม."],
};

/// Subdistrict (ตำบล).
pub const SUBDISTRICT: MarkerToken = MarkerToken {
    words: &["ตำบล"],
    misspellings: &[],
    abbreviations: &["ต."],
};

/// District (อำเภอ).
pub const DISTRICT: MarkerToken = MarkerToken {
    words: &["อำเภอ"],
    misspellings: &[],
    abbreviations: &["อ."],
};

/// Province (จังหวัด).
pub const PROVINCE: MarkerToken = MarkerToken {
    words: &["จังหวัด"],
    misspellings: &[],
    abbreviations: &["จ."],
};

/// Markers that end the house-number part of an address: any village form, or
/// the abbreviated subdistrict, district and province markers. Spelled-out
/// component names stay part of the address.
pub fn address_terminators() -> impl Iterator<Item = &'static str> {
    VILLAGE.variants().chain(
        [SUBDISTRICT, DISTRICT, PROVINCE]
            .into_iter()
            .flat_map(|m| m.abbreviations.iter().copied()),
    )
}

/// Labels printed next to dates.
pub const BIRTH_DATE_LABELS: &[&str] = &["เกิดวันที่", "date of birth"];
pub const ISSUE_DATE_LABEL: &str = "วันออกบัตร";
pub const RELIGION_LABEL: &str = "ศาสนา";

/// Regex alternation over every Thai title, escaped.
pub fn thai_title_alternation() -> String {
    alternation(THAI_TITLES.iter().flat_map(|(_, titles)| titles.iter().copied()))
}

/// Category of a title returned by the name rule.
pub fn title_category(title: &str) -> Option<TitleCategory> {
    THAI_TITLES
        .iter()
        .find(|(_, titles)| titles.contains(&title))
        .map(|(category, _)| *category)
}

pub(crate) fn alternation<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    tokens
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_titles() {
        let all: Vec<&str> = THAI_TITLES.iter().flat_map(|(_, t)| t.iter().copied()).collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_no_duplicate_village_variants() {
        let all: Vec<&str> = VILLAGE.variants().collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(all[0], "หมู่ที่");
    }

    #[test]
    fn test_address_terminators() {
        let terminators: Vec<&str> = address_terminators().collect();
        assert_eq!(terminators.len(), VILLAGE.variants().count() + 3);
        assert!(terminators.contains(&"หมที"));
        assert!(terminators.contains(&"ม."));
        assert!(terminators.contains(&"อ."));
        assert!(!terminators.contains(&"ตำบล"));
        assert!(!terminators.contains(&"จังหวัด"));
    }

    #[test]
    fn test_alternation_escapes_dots() {
        assert_eq!(PROVINCE.alternation(), r"จังหวัด|จ\.");
    }

    #[test]
    fn test_title_category() {
        assert_eq!(title_category("พล.ต."), Some(TitleCategory::Military));
        assert_eq!(title_category("นาย"), Some(TitleCategory::Civilian));
        assert_eq!(title_category("mr"), None);
    }
}
