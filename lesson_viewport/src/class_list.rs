// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operations over space-separated class attribute strings.
//!
//! These follow how a DOM `class` attribute is edited by hand. Class names are
//! separated by spaces and an absent attribute is modeled as `None`, so a
//! backend can read the attribute, apply one of these functions, and write the
//! result back.
//!
//! ```rust
//! use lesson_viewport::class_list::{add_class, has_class, remove_class};
//!
//! let class = add_class(Some("player-viewport-curtain"), "open");
//! assert_eq!(class, "player-viewport-curtain open");
//! assert!(has_class(Some(&class), "open"));
//!
//! let class = remove_class(Some(&class), "open");
//! assert_eq!(class.as_deref(), Some("player-viewport-curtain"));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// Returns `true` if `class_attr` contains `class` as a whole class name.
#[must_use]
pub fn has_class(class_attr: Option<&str>, class: &str) -> bool {
    class_attr.is_some_and(|attr| attr.split(' ').any(|c| c == class))
}

/// Returns the class attribute with `class` appended.
///
/// An absent attribute becomes just `class`. If the class is already present
/// the attribute is returned unchanged.
#[must_use]
pub fn add_class(class_attr: Option<&str>, class: &str) -> String {
    match class_attr {
        None => class.into(),
        Some(attr) if has_class(Some(attr), class) => attr.into(),
        Some(attr) => {
            let mut out = String::with_capacity(attr.len() + class.len() + 1);
            out.push_str(attr);
            out.push(' ');
            out.push_str(class);
            out
        }
    }
}

/// Returns the class attribute with every occurrence of `class` removed.
///
/// Returns `None` when the attribute was absent; there is nothing to write
/// back in that case.
#[must_use]
pub fn remove_class(class_attr: Option<&str>, class: &str) -> Option<String> {
    let attr = class_attr?;
    let kept: Vec<&str> = attr
        .split(' ')
        .filter(|c| *c != class && !c.is_empty())
        .collect();
    Some(kept.join(" "))
}
