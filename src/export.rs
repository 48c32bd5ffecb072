//! Text serializations of named shade lists.
//!
//! All formats carry the same (name, weight, hex) triples:
//!
//! - [`text`]: a plain listing, one block per list
//! - [`css`]: background, text and border utility classes per shade
//! - [`theme`]: a JSON theme fragment, `{"colors": {name: {weight: hex}}}`

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    shades::NamedShadeList,
};

/// The theme fragment written by [`theme`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// List name to weight to `#RRGGBB`.
    pub colors: BTreeMap<String, BTreeMap<u32, String>>,
}

impl Theme {
    /// Collect the triples of every list.
    ///
    /// Names and weights are map keys, so a repeated list name returns
    /// [`Error::DuplicateName`] and two shades of one list with the same
    /// weight return [`Error::DuplicateWeight`].
    pub fn from_lists(lists: &[NamedShadeList]) -> Result<Self> {
        let mut colors = BTreeMap::new();

        for named in lists {
            let mut weights = BTreeMap::new();
            for shade in &named.list {
                if weights.insert(shade.weight, shade.color.hex()).is_some() {
                    return Err(Error::DuplicateWeight {
                        name: named.name.clone(),
                        weight: shade.weight,
                    });
                }
            }
            if colors.insert(named.name.clone(), weights).is_some() {
                return Err(Error::DuplicateName(named.name.clone()));
            }
        }

        Ok(Self { colors })
    }
}

/// Turn a display name into something usable in a CSS class name:
/// lowercase ASCII alphanumerics separated by single dashes.
pub fn kebab_case(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// A plain listing: the name, the base color, then `weight: hex` per shade.
/// Lists are separated by a blank line.
pub fn text(lists: &[NamedShadeList]) -> String {
    let mut out = String::new();

    for (i, named) in lists.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing to a String can not fail.
        let _ = writeln!(out, "{}", named.name);
        let _ = writeln!(out, "base: {}", named.list.base());
        for shade in &named.list {
            let _ = writeln!(out, "{}: {}", shade.weight, shade.color);
        }
    }

    out
}

/// `.bg-`, `.text-` and `.border-` classes for every shade.
pub fn css(lists: &[NamedShadeList]) -> String {
    let mut out = String::new();

    for named in lists {
        let name = kebab_case(&named.name);
        for shade in &named.list {
            let (weight, hex) = (shade.weight, shade.color.hex());
            let _ = writeln!(out, ".bg-{name}-{weight} {{ background-color: {hex}; }}");
            let _ = writeln!(out, ".text-{name}-{weight} {{ color: {hex}; }}");
            let _ = writeln!(out, ".border-{name}-{weight} {{ border-color: {hex}; }}");
        }
    }

    out
}

/// A pretty printed JSON theme fragment, see [`Theme::from_lists`] for the
/// errors.
pub fn theme(lists: &[NamedShadeList]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Theme::from_lists(lists)?)?)
}
