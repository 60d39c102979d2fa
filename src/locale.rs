use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Locale a pattern belongs to.
///
/// `Universal` marks numeric layouts that carry no words. They are admitted
/// by every locale filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    Universal,
    En,
    Ru,
    Bg,
    De,
    Fr,
    Es,
    Pt,
    It,
    Tr,
    Pl,
    Nl,
}

impl Locale {
    pub const ALL: [Locale; 12] = [
        Locale::Universal,
        Locale::En,
        Locale::Ru,
        Locale::Bg,
        Locale::De,
        Locale::Fr,
        Locale::Es,
        Locale::Pt,
        Locale::It,
        Locale::Tr,
        Locale::Pl,
        Locale::Nl,
    ];

    /// BCP 47 language tag (`und` for universal patterns).
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Universal => "und",
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Bg => "bg",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Es => "es",
            Locale::Pt => "pt",
            Locale::It => "it",
            Locale::Tr => "tr",
            Locale::Pl => "pl",
            Locale::Nl => "nl",
        }
    }

    fn flag(self) -> LocaleSet {
        match self {
            Locale::Universal => LocaleSet::empty(),
            Locale::En => LocaleSet::EN,
            Locale::Ru => LocaleSet::RU,
            Locale::Bg => LocaleSet::BG,
            Locale::De => LocaleSet::DE,
            Locale::Fr => LocaleSet::FR,
            Locale::Es => LocaleSet::ES,
            Locale::Pt => LocaleSet::PT,
            Locale::It => LocaleSet::IT,
            Locale::Tr => LocaleSet::TR,
            Locale::Pl => LocaleSet::PL,
            Locale::Nl => LocaleSet::NL,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        // Region subtags are ignored: `en-GB` selects English.
        let language = tag.split(['-', '_']).next().unwrap_or(tag);
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(language))
            .ok_or_else(|| Error::UnknownLocale { tag: s.to_string() })
    }
}

bitflags::bitflags! {
    /// A set of locales used to filter the pattern table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LocaleSet: u16 {
        const EN = 1 << 0;
        const RU = 1 << 1;
        const BG = 1 << 2;
        const DE = 1 << 3;
        const FR = 1 << 4;
        const ES = 1 << 5;
        const PT = 1 << 6;
        const IT = 1 << 7;
        const TR = 1 << 8;
        const PL = 1 << 9;
        const NL = 1 << 10;
    }
}

impl LocaleSet {
    /// Build a set from language tags such as `["en", "ru"]`.
    pub fn from_tags<I, S>(tags: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().try_fold(LocaleSet::empty(), |set, tag| Ok(set | tag.as_ref().parse::<Locale>()?.flag()))
    }

    /// Whether patterns of `locale` pass this filter.
    pub fn admits(self, locale: Locale) -> bool {
        locale == Locale::Universal || self.contains(locale.flag())
    }
}

impl From<Locale> for LocaleSet {
    fn from(locale: Locale) -> Self {
        locale.flag()
    }
}
