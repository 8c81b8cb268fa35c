//! Response normalization: raw Atom XML into canonical [`Paper`] records.
//!
//! Batch-level problems (empty body, unparseable document) surface as
//! [`FeedError`]; a feed that parses but contains zero entries is the
//! documented "no results" outcome and returns an empty vector. Individual
//! entries are normalized defensively: an entry without an `<id>` is
//! dropped and the rest of the batch continues.

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::FeedError;
use crate::models::Paper;

/// One entry's fields as they accumulate during the event scan.
#[derive(Default)]
struct RawEntry {
    id: String,
    title: String,
    summary: String,
    authors: Vec<String>,
    published: String,
    updated: String,
    categories: Vec<String>,
    journal_ref: String,
    comments: String,
    doi: String,
    in_author: bool,
    text: String,
}

impl RawEntry {
    /// Normalize into a [`Paper`], or `None` when the minimal required
    /// fields are unusable.
    fn into_paper(self) -> Option<Paper> {
        if self.id.is_empty() {
            return None;
        }

        let title = normalize_ws(&self.title);
        let authors = if self.authors.is_empty() {
            vec!["Unknown Author".to_string()]
        } else {
            self.authors
        };
        let primary_category = self
            .categories
            .first()
            .cloned()
            .unwrap_or_else(|| "Uncategorized".to_string());

        Some(Paper {
            id: self.id,
            title: if title.is_empty() { "Untitled".to_string() } else { title },
            summary: normalize_ws(&self.summary),
            authors,
            published: parse_timestamp(&self.published),
            updated: parse_timestamp(&self.updated),
            categories: self.categories,
            primary_category,
            journal_ref: normalize_ws(&self.journal_ref),
            comments: normalize_ws(&self.comments),
            doi: self.doi,
        })
    }
}

/// Parse a raw catalog response body into papers.
///
/// # Errors
///
/// [`FeedError::EmptyBody`] for an empty payload, [`FeedError::Malformed`]
/// when the document is not well-formed Atom.
pub fn parse_feed(body: &str) -> Result<Vec<Paper>, FeedError> {
    if body.trim().is_empty() {
        return Err(FeedError::EmptyBody);
    }

    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut papers: Vec<Paper> = Vec::new();
    let mut entry: Option<RawEntry> = None;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,

            Ok(Event::Start(start)) => {
                saw_root = true;
                match start.local_name().as_ref() {
                    b"entry" => entry = Some(RawEntry::default()),
                    b"author" => {
                        if let Some(cur) = entry.as_mut() {
                            cur.in_author = true;
                        }
                    }
                    b"category" => {
                        if let Some(cur) = entry.as_mut() {
                            collect_category(&start, cur);
                        }
                    }
                    b"link" => {
                        if let Some(cur) = entry.as_mut() {
                            collect_link(&start, cur);
                        }
                    }
                    _ => {
                        if let Some(cur) = entry.as_mut() {
                            cur.text.clear();
                        }
                    }
                }
            }

            // Atom categories and links are usually self-closing.
            Ok(Event::Empty(empty)) => {
                if let Some(cur) = entry.as_mut() {
                    match empty.local_name().as_ref() {
                        b"category" => collect_category(&empty, cur),
                        b"link" => collect_link(&empty, cur),
                        _ => {}
                    }
                }
            }

            Ok(Event::Text(text)) => {
                if let Some(cur) = entry.as_mut() {
                    cur.text.push_str(&text.unescape().unwrap_or_default());
                }
            }

            Ok(Event::End(end)) => {
                if end.local_name().as_ref() == b"entry" {
                    if let Some(paper) = entry.take().and_then(RawEntry::into_paper) {
                        papers.push(paper);
                    } else {
                        tracing::debug!("dropping catalog entry without an id");
                    }
                    continue;
                }

                let Some(cur) = entry.as_mut() else { continue };
                match end.local_name().as_ref() {
                    b"id" => cur.id = cur.text.trim().to_string(),
                    b"title" => cur.title = cur.text.clone(),
                    b"summary" => cur.summary = cur.text.clone(),
                    b"published" => cur.published = cur.text.trim().to_string(),
                    b"updated" => cur.updated = cur.text.trim().to_string(),
                    b"journal_ref" => cur.journal_ref = cur.text.clone(),
                    b"comment" => cur.comments = cur.text.clone(),
                    b"name" => {
                        if cur.in_author && !cur.text.trim().is_empty() {
                            cur.authors.push(cur.text.trim().to_string());
                        }
                    }
                    b"author" => cur.in_author = false,
                    _ => {}
                }
                cur.text.clear();
            }

            Err(err) => return Err(FeedError::Malformed(err.to_string())),

            Ok(_) => {}
        }
    }

    if !saw_root {
        return Err(FeedError::Malformed("no XML elements in response".to_string()));
    }

    Ok(papers)
}

/// Record a `<category term="..."/>` attribute.
fn collect_category(element: &BytesStart<'_>, cur: &mut RawEntry) {
    for attr in element.attributes().flatten() {
        if attr.key.as_ref() == b"term" {
            let term = attr.unescape_value().unwrap_or_default().to_string();
            if !term.trim().is_empty() {
                cur.categories.push(term);
            }
        }
    }
}

/// Record a `<link .../>` element; the `rel="related"` link is the DOI link.
fn collect_link(element: &BytesStart<'_>, cur: &mut RawEntry) {
    let mut rel = None;
    let mut href = None;
    for attr in element.attributes().flatten() {
        let value = attr.unescape_value().unwrap_or_default().to_string();
        match attr.key.as_ref() {
            b"rel" => rel = Some(value),
            b"href" => href = Some(value),
            _ => {}
        }
    }
    if rel.as_deref() == Some("related") {
        if let Some(href) = href {
            cur.doi = href;
        }
    }
}

/// Collapse whitespace runs; Atom feeds hard-wrap titles and abstracts.
fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse an RFC 3339 timestamp, falling back to process time when the
/// source omitted or mangled it. The fallback is a normalization default,
/// not a factual claim.
fn parse_timestamp(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query Results</title>
  <entry>
    <id>http://arxiv.org/abs/0805.3415v1</id>
    <updated>2008-05-22T14:00:00Z</updated>
    <published>2008-05-21T12:30:00Z</published>
    <title>  On Upper-Confidence Bound Policies
      for Non-Stationary Bandit Problems </title>
    <summary>  We analyze bandit
      strategies.  </summary>
    <author><name>A. Author</name></author>
    <author><name>B. Author</name></author>
    <category term="cs.LG"/>
    <category term="stat.ML"/>
    <link rel="alternate" type="text/html" href="http://arxiv.org/abs/0805.3415v1"/>
    <link rel="related" href="http://dx.doi.org/10.1000/example"/>
    <arxiv:journal_ref xmlns:arxiv="http://arxiv.org/schemas/atom">J. Mach. Learn. 1 (2008)</arxiv:journal_ref>
    <arxiv:comment xmlns:arxiv="http://arxiv.org/schemas/atom">12 pages</arxiv:comment>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/1305.2545v2</id>
    <updated>2013-05-11T00:00:00Z</updated>
    <published>2013-05-11T00:00:00Z</published>
    <summary>Abstract two.</summary>
  </entry>
</feed>
"#;

    #[test]
    fn test_parse_feed_extracts_entries() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(papers.len(), 2);

        let first = &papers[0];
        assert_eq!(first.id, "http://arxiv.org/abs/0805.3415v1");
        assert_eq!(
            first.title,
            "On Upper-Confidence Bound Policies for Non-Stationary Bandit Problems"
        );
        assert_eq!(first.summary, "We analyze bandit strategies.");
        assert_eq!(first.authors, vec!["A. Author", "B. Author"]);
        assert_eq!(first.categories, vec!["cs.LG", "stat.ML"]);
        assert_eq!(first.primary_category, "cs.LG");
        assert_eq!(first.doi, "http://dx.doi.org/10.1000/example");
        assert_eq!(first.journal_ref, "J. Mach. Learn. 1 (2008)");
        assert_eq!(first.comments, "12 pages");
        assert_eq!(first.pdf_link(), "http://arxiv.org/pdf/0805.3415v1");
        assert_eq!(first.published.to_rfc3339(), "2008-05-21T12:30:00+00:00");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        let second = &papers[1];
        assert_eq!(second.title, "Untitled");
        assert_eq!(second.authors, vec!["Unknown Author"]);
        assert_eq!(second.primary_category, "Uncategorized");
        assert!(second.categories.is_empty());
        assert!(!second.has_doi());
        assert!(!second.has_journal_ref());
    }

    #[test]
    fn test_entry_without_id_is_dropped() {
        let feed = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><title>Orphan</title></entry>
  <entry><id>http://arxiv.org/abs/2301.00001v1</id><title>Kept</title></entry>
</feed>"#;
        let papers = parse_feed(feed).unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Kept");
    }

    #[test]
    fn test_zero_entries_is_success() {
        let feed = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>empty</title></feed>"#;
        let papers = parse_feed(feed).unwrap();
        assert!(papers.is_empty());
    }

    #[test]
    fn test_empty_body_is_an_error() {
        assert!(matches!(parse_feed(""), Err(FeedError::EmptyBody)));
        assert!(matches!(parse_feed("   \n "), Err(FeedError::EmptyBody)));
    }

    #[test]
    fn test_mismatched_tags_are_malformed() {
        let result = parse_feed("<feed><entry><id>x</id></feed>");
        assert!(matches!(result, Err(FeedError::Malformed(_))));
    }

    #[test]
    fn test_non_xml_body_is_malformed() {
        let result = parse_feed("503 Service Unavailable, try again later");
        assert!(matches!(result, Err(FeedError::Malformed(_))));
    }

    #[test]
    fn test_unparseable_timestamp_falls_back_to_now() {
        let feed = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><id>http://arxiv.org/abs/1.1</id><published>yesterday</published></entry>
</feed>"#;
        let before = Utc::now();
        let papers = parse_feed(feed).unwrap();
        assert!(papers[0].published >= before);
    }

    #[test]
    fn test_duplicate_categories_preserved_in_order() {
        let feed = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/1.2</id>
    <category term="cs.AI"/><category term="cs.LG"/><category term="cs.AI"/>
  </entry>
</feed>"#;
        let papers = parse_feed(feed).unwrap();
        assert_eq!(papers[0].categories, vec!["cs.AI", "cs.LG", "cs.AI"]);
        assert_eq!(papers[0].primary_category, "cs.AI");
    }
}
