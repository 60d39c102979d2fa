//! Built-in pattern table.
//!
//! One module per locale, plus `numeric` for layouts without words. The order
//! of [`all`] is the cold trial order: the common numeric layouts first
//! (day-first before month-first), English next, then the rarer numeric
//! layouts and the remaining locales.

pub mod bg;
pub mod de;
pub mod en;
pub mod es;
pub mod fr;
pub mod it;
pub mod nl;
pub mod numeric;
pub mod pl;
pub mod pt;
pub mod ru;
pub mod tr;

#[cfg(test)]
mod tests;

use crate::PatternSpec;

/// Every built-in spec in trial order.
pub fn all() -> Vec<PatternSpec> {
    let mut specs = numeric::common();
    specs.extend(en::get());
    specs.extend(numeric::rare());
    specs.extend(bg::get());
    specs.extend(de::get());
    specs.extend(es::get());
    specs.extend(fr::get());
    specs.extend(it::get());
    specs.extend(pt::get());
    specs.extend(ru::get());
    specs.extend(tr::get());
    specs.extend(pl::get());
    specs.extend(nl::get());
    specs
}
