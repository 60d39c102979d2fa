#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! num {
    ($field:ident, $min:literal, $max:literal) => {
        $crate::Tok::Num { field: $crate::Field::$field, min: $min, max: $max }
    };
}

#[macro_export]
macro_rules! lit {
    ($s:literal) => {
        $crate::Tok::Lit($s)
    };
}

#[macro_export]
macro_rules! opt {
    ($s:literal) => {
        $crate::Tok::Opt($s)
    };
}

#[macro_export]
macro_rules! words {
    [ $($w:literal),+ $(,)? ] => {
        $crate::Tok::Words(&[ $($w),+ ])
    };
}

#[macro_export]
macro_rules! opt_words {
    [ $($w:literal),+ $(,)? ] => {
        $crate::Tok::OptWords(&[ $($w),+ ])
    };
}

#[macro_export]
macro_rules! month {
    ($names:expr) => {
        $crate::Tok::Month($names)
    };
}

#[macro_export]
macro_rules! weekday {
    ($names:expr) => {
        $crate::Tok::Weekday($names)
    };
}

#[macro_export]
macro_rules! pattern {
    (
        key: $key:expr,
        locale: $locale:expr,
        grammar: [ $($tok:expr),* $(,)? ],
        template: $template:expr
        $(, variants: $variants:expr)?
        $(,)?
    ) => {{
        $crate::PatternSpec {
            key: $key,
            locale: $locale,
            grammar: vec![ $($tok),* ],
            template: Some($template),
            variants: {
                #[allow(unused_mut)]
                let mut variants = $crate::Variants::all();
                $(variants = $variants;)?
                variants
            },
        }
    }};
}
