//! core::document
//!
//! The document record and its title codec.
//!
//! # Design
//!
//! A document's metadata (name, category path, tags, remote id, revision
//! number, WIP flag) is encoded into a single line of text that doubles as
//! the document's file name. [`Document::to_title`] produces that line;
//! [`Document::from_title`] parses it back.
//!
//! Decoding peels fixed suffixes off the end of the string in the exact
//! reverse order of emission (WIP, then revision, then id, then the tag
//! split, then the category split). Each mark is only unambiguous while it
//! is the last token of the remaining string, so the steps form an ordered
//! pipeline rather than one combined pattern.
//!
//! The grammar performs no escaping. A tag containing `" #"` or a name
//! ending in mark-shaped text decodes ambiguously; that is a property of
//! the grammar, not something the codec validates away.

use thiserror::Error;

/// Errors from title decoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    /// A bracketed numeric mark was present but its payload is not a
    /// parseable number.
    #[error("malformed numeric mark {mark:?} in title {title:?}")]
    MalformedNumericMark {
        /// The offending mark text, including brackets.
        mark: String,
        /// The full title being decoded.
        title: String,
    },
}

/// A document synchronized between the remote store and the local tree.
///
/// `number` and `revision_number` are `None` until the remote store has
/// assigned them; the title grammar represents absence by omitting the
/// corresponding mark. `body` is opaque to the codec and is carried only
/// so pull/push can move it between the store and the file tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Leaf identifier. Opaque text; may contain spaces.
    pub name: String,
    /// Slash-separated category path. Empty means root.
    pub category: String,
    /// Ordered tags. Tag text must not contain a space.
    pub tags: Vec<String>,
    /// Remote identifier, assigned by the store.
    pub number: Option<u64>,
    /// Monotonic edit counter, assigned by the store.
    pub revision_number: Option<u64>,
    /// Work-in-progress flag.
    pub wip: bool,
    /// Markdown body. Not represented in the title.
    pub body: String,
}

impl Document {
    /// Encode this document's metadata as its canonical title.
    ///
    /// Token order is fixed: `category/name`, then `#tag` per tag, then
    /// `[id:N]`, then `[rev:N]`, then `[WIP]`, space-separated, with each
    /// optional token omitted when absent. Nothing is escaped and the
    /// input is not mutated. Encoding never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use quire::core::document::Document;
    ///
    /// let doc = Document {
    ///     name: "release checklist".to_string(),
    ///     category: "ops/runbooks".to_string(),
    ///     tags: vec!["infra".to_string()],
    ///     number: Some(12),
    ///     revision_number: Some(3),
    ///     wip: true,
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     doc.to_title(),
    ///     "ops/runbooks/release checklist #infra [id:12] [rev:3] [WIP]"
    /// );
    /// ```
    pub fn to_title(&self) -> String {
        let mut title = if self.category.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.category, self.name)
        };

        for tag in &self.tags {
            title.push_str(" #");
            title.push_str(tag);
        }
        if let Some(number) = self.number {
            title.push_str(&format!(" [id:{}]", number));
        }
        if let Some(revision) = self.revision_number {
            title.push_str(&format!(" [rev:{}]", revision));
        }
        if self.wip {
            title.push_str(" [WIP]");
        }

        title
    }

    /// Decode a title back into a document.
    ///
    /// The body is left empty; optional fields absent from the title come
    /// back as `None`/`false`/empty. Whitespace inside the name is
    /// preserved verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TitleError::MalformedNumericMark`] when an `[id:...]` or
    /// `[rev:...]` suffix is present but its payload is empty, non-numeric,
    /// or out of range. No partial document is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use quire::core::document::Document;
    ///
    /// let doc = Document::from_title("ops/oncall #infra [id:7]").unwrap();
    /// assert_eq!(doc.category, "ops");
    /// assert_eq!(doc.name, "oncall");
    /// assert_eq!(doc.tags, vec!["infra".to_string()]);
    /// assert_eq!(doc.number, Some(7));
    /// assert_eq!(doc.revision_number, None);
    /// assert!(!doc.wip);
    /// ```
    pub fn from_title(title: &str) -> Result<Self, TitleError> {
        let mut rest = title;

        let wip = match rest.strip_suffix(" [WIP]") {
            Some(stripped) => {
                rest = stripped;
                true
            }
            None => false,
        };

        let (rest, revision_number) = strip_numeric_mark(rest, "rev", title)?;
        let (rest, number) = strip_numeric_mark(rest, "id", title)?;

        let mut segments = rest.split(" #");
        let path = segments.next().unwrap_or_default();
        let tags: Vec<String> = segments.map(str::to_string).collect();

        let (category, name) = match path.rfind('/') {
            Some(slash) => (path[..slash].to_string(), path[slash + 1..].to_string()),
            // No slash means no category, even for names like ".profile".
            None => (String::new(), path.to_string()),
        };

        Ok(Document {
            name,
            category,
            tags,
            number,
            revision_number,
            wip,
            body: String::new(),
        })
    }

    /// The absolute-path-like form `category/name`, or just `name` when
    /// the category is empty.
    pub fn full_name(&self) -> String {
        if self.category.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.category, self.name)
        }
    }
}

/// Try to strip a trailing `" [key:<digits>]"` mark.
///
/// Returns the residual string and the parsed value. A payload of 0 maps
/// to `None`: the grammar reserves 0 for "absent" and real ids start at 1.
/// A trailing `]` whose candidate payload contains `]` belongs to the name
/// and is left in place.
fn strip_numeric_mark<'a>(
    rest: &'a str,
    key: &str,
    title: &str,
) -> Result<(&'a str, Option<u64>), TitleError> {
    let Some(unclosed) = rest.strip_suffix(']') else {
        return Ok((rest, None));
    };
    let opener = format!(" [{}:", key);
    let Some(start) = unclosed.rfind(&opener) else {
        return Ok((rest, None));
    };
    let payload = &unclosed[start + opener.len()..];
    if payload.contains(']') {
        return Ok((rest, None));
    }

    let malformed = || TitleError::MalformedNumericMark {
        mark: format!("[{}:{}]", key, payload),
        title: title.to_string(),
    };
    if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let value: u64 = payload.parse().map_err(|_| malformed())?;

    Ok((&rest[..start], (value > 0).then_some(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> Document {
        Document {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn encode_only_name() {
        assert_eq!(doc("title").to_title(), "title");
    }

    #[test]
    fn encode_tags_in_order() {
        let mut d = doc("title");
        d.tags = vec!["tag1".to_string()];
        assert_eq!(d.to_title(), "title #tag1");
        d.tags.push("tag2".to_string());
        assert_eq!(d.to_title(), "title #tag1 #tag2");
    }

    #[test]
    fn encode_category_prefix() {
        let mut d = doc("title");
        d.category = "cate/gory".to_string();
        assert_eq!(d.to_title(), "cate/gory/title");
    }

    #[test]
    fn encode_single_marks() {
        let mut d = doc("title");
        d.wip = true;
        assert_eq!(d.to_title(), "title [WIP]");

        let mut d = doc("title");
        d.number = Some(1);
        assert_eq!(d.to_title(), "title [id:1]");

        let mut d = doc("title");
        d.revision_number = Some(1);
        assert_eq!(d.to_title(), "title [rev:1]");
    }

    #[test]
    fn encode_preserves_inner_spaces() {
        assert_eq!(doc("title  title").to_title(), "title  title");
    }

    #[test]
    fn encode_all_fields_in_fixed_order() {
        let d = Document {
            name: "title  title".to_string(),
            category: "cate/gory".to_string(),
            tags: vec!["tag1".to_string(), "tag2".to_string()],
            number: Some(1),
            revision_number: Some(1),
            wip: true,
            body: String::new(),
        };
        assert_eq!(
            d.to_title(),
            "cate/gory/title  title #tag1 #tag2 [id:1] [rev:1] [WIP]"
        );
    }

    #[test]
    fn encode_does_not_mutate_tags() {
        let d = Document {
            name: "title".to_string(),
            tags: vec!["tag1".to_string()],
            ..Default::default()
        };
        let before = d.tags.clone();
        let _ = d.to_title();
        let _ = d.to_title();
        assert_eq!(d.tags, before);
    }

    #[test]
    fn decode_only_name() {
        let d = Document::from_title("title").unwrap();
        assert_eq!(d, doc("title"));
    }

    #[test]
    fn decode_tags() {
        let d = Document::from_title("title #tag1 #tag2").unwrap();
        assert_eq!(d.name, "title");
        assert_eq!(d.tags, vec!["tag1".to_string(), "tag2".to_string()]);
    }

    #[test]
    fn decode_category_split_at_last_slash() {
        let d = Document::from_title("cate/gory/title").unwrap();
        assert_eq!(d.category, "cate/gory");
        assert_eq!(d.name, "title");
    }

    #[test]
    fn decode_no_slash_means_no_category() {
        let d = Document::from_title("title").unwrap();
        assert_eq!(d.category, "");

        // A leading dot without a slash is a name, not a category.
        let d = Document::from_title(".profile").unwrap();
        assert_eq!(d.category, "");
        assert_eq!(d.name, ".profile");
    }

    #[test]
    fn decode_marks() {
        let d = Document::from_title("title [WIP]").unwrap();
        assert!(d.wip);

        let d = Document::from_title("title [id:1]").unwrap();
        assert_eq!(d.number, Some(1));

        let d = Document::from_title("title [rev:1]").unwrap();
        assert_eq!(d.revision_number, Some(1));
    }

    #[test]
    fn decode_preserves_inner_spaces() {
        let d = Document::from_title("title  title").unwrap();
        assert_eq!(d.name, "title  title");
    }

    #[test]
    fn decode_all_fields() {
        let d =
            Document::from_title("cate/gory/title  title #tag1 #tag2 [id:1] [rev:1] [WIP]")
                .unwrap();
        assert_eq!(
            d,
            Document {
                name: "title  title".to_string(),
                category: "cate/gory".to_string(),
                tags: vec!["tag1".to_string(), "tag2".to_string()],
                number: Some(1),
                revision_number: Some(1),
                wip: true,
                body: String::new(),
            }
        );
    }

    #[test]
    fn decode_rejects_non_numeric_id() {
        let err = Document::from_title("title [id:abc]").unwrap_err();
        assert_eq!(
            err,
            TitleError::MalformedNumericMark {
                mark: "[id:abc]".to_string(),
                title: "title [id:abc]".to_string(),
            }
        );
    }

    #[test]
    fn decode_rejects_empty_and_overflowing_payloads() {
        assert!(Document::from_title("title [rev:]").is_err());
        assert!(Document::from_title("title [id:99999999999999999999999]").is_err());
    }

    #[test]
    fn decode_zero_payload_is_absent() {
        let d = Document::from_title("title [id:0]").unwrap();
        assert_eq!(d.number, None);
    }

    #[test]
    fn decode_marks_are_order_anchored() {
        // [id:...] is only a mark while it is the trailing token, so a
        // trailing [rev:...] keeps it parseable and a reversed order does
        // not.
        let d = Document::from_title("title [id:2] [rev:5]").unwrap();
        assert_eq!(d.number, Some(2));
        assert_eq!(d.revision_number, Some(5));

        let d = Document::from_title("title [rev:5] [id:2]").unwrap();
        assert_eq!(d.number, Some(2));
        assert_eq!(d.revision_number, None);
        assert_eq!(d.name, "title [rev:5]");
    }

    #[test]
    fn decode_bracket_in_payload_is_name_text() {
        let d = Document::from_title("notes [id:1] draft]").unwrap();
        assert_eq!(d.number, None);
        assert_eq!(d.name, "notes [id:1] draft]");
    }

    #[test]
    fn round_trip_all_fields() {
        let d = Document {
            name: "title  title".to_string(),
            category: "cate/gory".to_string(),
            tags: vec!["tag1".to_string(), "tag2".to_string()],
            number: Some(1),
            revision_number: Some(1),
            wip: true,
            body: String::new(),
        };
        assert_eq!(Document::from_title(&d.to_title()).unwrap(), d);
    }

    #[test]
    fn full_name_joins_category_and_name() {
        let mut d = doc("title");
        assert_eq!(d.full_name(), "title");
        d.category = "cate/gory".to_string();
        assert_eq!(d.full_name(), "cate/gory/title");
    }
}
