//! Field tag parsing.
//!
//! A tag is a comma-separated string attached to a record field:
//! `name[,option[,option...]]`. The first segment is the declared variable
//! name and may be empty. Only the `omitempty` option has a meaning; any
//! other option is accepted and ignored.

use std::borrow::Cow;

/// Option that suppresses emission of empty values.
pub const OMIT_EMPTY: &str = "omitempty";

/// A parsed field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tag<'a> {
    name: &'a str,
    options: TagOptions<'a>,
}

impl<'a> Tag<'a> {
    /// Split a raw tag at its first comma.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(',') {
            Some((name, options)) => Self {
                name,
                options: TagOptions(options),
            },
            None => Self {
                name: raw,
                options: TagOptions::default(),
            },
        }
    }

    /// The declared variable name, or `None` when the tag leaves it empty.
    pub fn name(&self) -> Option<&'a str> {
        (!self.name.is_empty()).then_some(self.name)
    }

    /// The options following the name.
    pub fn options(&self) -> TagOptions<'a> {
        self.options
    }

    /// Whether the `omitempty` option is present.
    pub fn omit_empty(&self) -> bool {
        self.options.contains(OMIT_EMPTY)
    }

    /// Resolve the variable name for a field carrying this tag.
    ///
    /// A declared name is used as-is at any depth. Without one, the field
    /// inherits `parent_ident` when the enclosing record is named, and stays
    /// unnamed otherwise.
    pub fn effective_name<'p>(&self, parent: &'p str, ident: &str) -> Cow<'p, str>
    where
        'a: 'p,
    {
        match self.name() {
            Some(name) => Cow::Borrowed(name),
            None if parent.is_empty() => Cow::Borrowed(""),
            None => Cow::Owned(format!("{parent}_{ident}")),
        }
    }
}

/// The comma-separated options of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Check whether `option` appears among the options.
    pub fn contains(&self, option: &str) -> bool {
        self.iter().any(|candidate| candidate == option)
    }

    /// Iterate over the individual options.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        let raw = self.0;
        raw.split(',').filter(move |_| !raw.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
