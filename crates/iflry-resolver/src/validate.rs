use std::collections::{HashMap, HashSet};

use iflry_core::schema::names::same_document;
use iflry_core::{Document, DocumentKind, PageType};

use crate::error::ValidationError;

/// Validate content documents the way the studio does on save.
/// Checks for:
/// - Localized documents without a language
/// - Pages of type "other" without a slug
/// - Programmes without managers
/// - Events ending before they start
/// - Open-graph images without alt text
/// - Duplicate slugs within a document type and locale
/// - More than one page of a singleton type per locale
/// - More than one configuration per locale
///
/// A document's draft and published versions never conflict with each other.
pub fn validate_documents(documents: &[Document]) -> Result<(), ValidationError> {
    match find_violations(documents).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every rule violation, per-document rules first.
pub fn find_violations(documents: &[Document]) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = documents.iter().filter_map(check_document).collect();
    errors.extend(duplicate_slugs(documents));
    errors.extend(duplicate_page_types(documents));
    errors.extend(duplicate_singletons(documents));
    errors
}

/// Member documents must name an id from the membership datasets.
pub fn validate_member_ids(
    documents: &[Document],
    known_ids: &HashSet<&str>,
) -> Result<(), ValidationError> {
    for doc in documents {
        let Document::Member(member) = doc else {
            continue;
        };
        if let Some(member_id) = member.member_id.as_deref()
            && !known_ids.contains(member_id)
        {
            return Err(ValidationError::UnknownMemberId {
                document: member.id.clone(),
                member_id: member_id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_document(doc: &Document) -> Option<ValidationError> {
    let kind = doc.kind();
    if kind.is_localized() && doc.language().is_none() {
        return Some(ValidationError::MissingLanguage {
            kind,
            id: doc.id().to_string(),
        });
    }

    match doc {
        Document::Page(page) if page.page_type == PageType::Other && doc.slug().is_none() => {
            Some(ValidationError::MissingPageSlug(page.id.clone()))
        }
        Document::Programme(programme) if programme.managers.is_empty() => {
            Some(ValidationError::MissingManagers(programme.id.clone()))
        }
        Document::Event(event) if event.end.is_some_and(|end| end < event.start) => {
            Some(ValidationError::EventEndsBeforeStart(event.id.clone()))
        }
        Document::Settings(settings) => {
            let og = settings.og_image.as_ref()?;
            let missing_alt = og.image.alt.as_deref().is_none_or(|alt| alt.trim().is_empty());
            (og.image.has_asset() && missing_alt)
                .then(|| ValidationError::MissingAltText(settings.id.clone()))
        }
        _ => None,
    }
}

/// Pair every document with the first earlier document sharing its key.
fn find_clashes<'a, K, F>(documents: &'a [Document], key: F) -> Vec<(K, &'a str, &'a str)>
where
    K: std::hash::Hash + Eq + Clone,
    F: Fn(&'a Document) -> Option<K>,
{
    let mut seen: HashMap<K, &'a str> = HashMap::new();
    let mut clashes = Vec::new();
    for doc in documents {
        let Some(k) = key(doc) else {
            continue;
        };
        match seen.get(&k) {
            Some(first) if !same_document(first, doc.id()) => {
                clashes.push((k, *first, doc.id()));
            }
            Some(_) => {}
            None => {
                seen.insert(k, doc.id());
            }
        }
    }
    clashes
}

fn duplicate_slugs(documents: &[Document]) -> Vec<ValidationError> {
    find_clashes(documents, |doc| {
        let kind = doc.kind();
        if !kind.has_slug() {
            return None;
        }
        if let Document::Page(page) = doc
            && page.page_type.is_singleton()
        {
            return None;
        }
        Some((kind, doc.language()?, doc.slug()?.to_string()))
    })
    .into_iter()
    .map(|((kind, locale, slug), first, second)| ValidationError::DuplicateSlug {
        kind,
        slug,
        locale,
        first: first.to_string(),
        second: second.to_string(),
    })
    .collect()
}

fn duplicate_page_types(documents: &[Document]) -> Vec<ValidationError> {
    find_clashes(documents, |doc| match doc {
        Document::Page(page) if page.page_type.is_singleton() => {
            Some((page.page_type, page.language?))
        }
        _ => None,
    })
    .into_iter()
    .map(|((page_type, locale), first, second)| ValidationError::DuplicatePageType {
        page_type: page_type.as_str().to_string(),
        locale,
        first: first.to_string(),
        second: second.to_string(),
    })
    .collect()
}

fn duplicate_singletons(documents: &[Document]) -> Vec<ValidationError> {
    find_clashes(documents, |doc| {
        let kind = doc.kind();
        if !kind.is_singleton() {
            return None;
        }
        Some((kind, doc.language()?))
    })
    .into_iter()
    .map(|((kind, locale), first, second)| ValidationError::DuplicateSingleton {
        kind,
        locale,
        first: first.to_string(),
        second: second.to_string(),
    })
    .collect()
}

/// Kinds that failed validation, for summaries.
pub fn violation_kind(err: &ValidationError) -> Option<DocumentKind> {
    match err {
        ValidationError::DuplicateSlug { kind, .. }
        | ValidationError::DuplicateSingleton { kind, .. }
        | ValidationError::MissingLanguage { kind, .. } => Some(*kind),
        ValidationError::DuplicatePageType { .. } | ValidationError::MissingPageSlug(_) => {
            Some(DocumentKind::Page)
        }
        ValidationError::MissingManagers(_) => Some(DocumentKind::Programme),
        ValidationError::EventEndsBeforeStart(_) => Some(DocumentKind::Event),
        ValidationError::UnknownMemberId { .. } => Some(DocumentKind::Member),
        ValidationError::MissingAltText(_) => Some(DocumentKind::Configuration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn docs(values: Vec<Value>) -> Vec<Document> {
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect()
    }

    fn page(id: &str, ty: &str, lang: &str, slug: Option<&str>) -> Value {
        let mut v = json!({"_type": "page", "_id": id, "title": id, "type": ty, "language": lang});
        if let Some(slug) = slug {
            v["slug"] = json!({"current": slug});
        }
        v
    }

    fn post(id: &str, lang: &str, slug: &str) -> Value {
        json!({
            "_type": "post", "_id": id, "title": id, "language": lang,
            "slug": {"current": slug}, "image": {"asset": {"_ref": "image-1"}, "alt": "x"}
        })
    }

    fn event(id: &str, start: &str, end: Option<&str>) -> Value {
        let mut v = json!({
            "_type": "event", "_id": id, "title": id, "type": "seminar", "language": "en",
            "location": "Brussels", "start": start, "slug": {"current": id}
        });
        if let Some(end) = end {
            v["end"] = json!(end);
        }
        v
    }

    fn is_duplicate_slug(err: &ValidationError) -> bool {
        matches!(err, ValidationError::DuplicateSlug { .. })
    }

    fn is_duplicate_type(err: &ValidationError) -> bool {
        matches!(err, ValidationError::DuplicatePageType { .. })
    }

    fn is_duplicate_singleton(err: &ValidationError) -> bool {
        matches!(err, ValidationError::DuplicateSingleton { .. })
    }

    fn is_missing_slug(err: &ValidationError) -> bool {
        matches!(err, ValidationError::MissingPageSlug(_))
    }

    fn is_missing_managers(err: &ValidationError) -> bool {
        matches!(err, ValidationError::MissingManagers(_))
    }

    fn is_bad_event(err: &ValidationError) -> bool {
        matches!(err, ValidationError::EventEndsBeforeStart(_))
    }

    fn is_missing_alt(err: &ValidationError) -> bool {
        matches!(err, ValidationError::MissingAltText(_))
    }

    fn is_missing_language(err: &ValidationError) -> bool {
        matches!(err, ValidationError::MissingLanguage { .. })
    }

    #[rstest]
    #[case::empty(vec![], None)]
    #[case::distinct_pages(
        vec![page("p1", "other", "en", Some("about")), page("p2", "other", "en", Some("history"))],
        None
    )]
    #[case::same_slug_other_locale(
        vec![post("a", "en", "hello"), post("b", "fr", "hello")],
        None
    )]
    #[case::same_slug_other_type(
        vec![post("a", "en", "ga"), event("ga", "2025-05-01T09:00:00Z", None)],
        None
    )]
    #[case::duplicate_post_slug(
        vec![post("a", "en", "hello"), post("b", "en", "hello")],
        Some(is_duplicate_slug as fn(&ValidationError) -> bool)
    )]
    #[case::draft_and_published_share_slug(
        vec![post("a", "en", "hello"), post("drafts.a", "en", "hello")],
        None
    )]
    #[case::duplicate_singleton_page(
        vec![page("p1", "members", "en", None), page("p2", "members", "en", None)],
        Some(is_duplicate_type as fn(&ValidationError) -> bool)
    )]
    #[case::singleton_page_per_locale(
        vec![page("p1", "members", "en", None), page("p3", "members", "fr", None)],
        None
    )]
    #[case::singleton_page_draft_pair(
        vec![page("p1", "people", "es", None), page("drafts.p1", "people", "es", None)],
        None
    )]
    #[case::singleton_slugs_ignored(
        vec![page("p1", "members", "en", Some("x")), page("p2", "partners", "en", Some("x"))],
        None
    )]
    #[case::other_page_without_slug(
        vec![page("p1", "other", "en", None)],
        Some(is_missing_slug as fn(&ValidationError) -> bool)
    )]
    #[case::duplicate_configuration(
        vec![
            json!({"_type": "configuration", "_id": "c-en", "language": "en"}),
            json!({"_type": "configuration", "_id": "c-en-2", "language": "en"}),
        ],
        Some(is_duplicate_singleton as fn(&ValidationError) -> bool)
    )]
    #[case::programme_without_managers(
        vec![json!({"_type": "programme", "_id": "pr", "title": "Academy", "email": "a@b.c"})],
        Some(is_missing_managers as fn(&ValidationError) -> bool)
    )]
    #[case::programme_with_manager(
        vec![json!({"_type": "programme", "_id": "pr", "title": "Academy", "email": "a@b.c", "managers": [{"_ref": "p1"}]})],
        None
    )]
    #[case::event_ends_before_start(
        vec![event("e1", "2025-05-02T09:00:00Z", Some("2025-05-01T09:00:00Z"))],
        Some(is_bad_event as fn(&ValidationError) -> bool)
    )]
    #[case::event_same_instant(
        vec![event("e1", "2025-05-02T09:00:00Z", Some("2025-05-02T09:00:00Z"))],
        None
    )]
    #[case::og_image_without_alt(
        vec![json!({"_type": "configuration", "_id": "c", "language": "en", "ogImage": {"asset": {"_ref": "image-1"}}})],
        Some(is_missing_alt as fn(&ValidationError) -> bool)
    )]
    #[case::og_image_empty(
        vec![json!({"_type": "configuration", "_id": "c", "language": "en", "ogImage": {"metadataBase": "https://iflry.org"}})],
        None
    )]
    #[case::post_without_language(
        vec![json!({"_type": "post", "_id": "p", "title": "t", "image": {}})],
        Some(is_missing_language as fn(&ValidationError) -> bool)
    )]
    fn validate_documents_cases(
        #[case] values: Vec<Value>,
        #[case] expected_err: Option<fn(&ValidationError) -> bool>,
    ) {
        let result = validate_documents(&docs(values));
        match (result, expected_err) {
            (Ok(()), None) => {}
            (Err(err), Some(pred)) => assert!(pred(&err), "unexpected error: {err:?}"),
            (Ok(()), Some(_)) => panic!("expected error, got Ok"),
            (Err(err), None) => panic!("expected Ok, got error: {err}"),
        }
    }

    #[test]
    fn second_members_page_reports_type_already_exists() {
        let documents = docs(vec![
            page("P1", "members", "en", None),
            page("P2", "members", "en", None),
            page("P3", "members", "fr", None),
        ]);
        let err = validate_documents(&documents).unwrap_err();
        assert!(err.to_string().contains("type already exists"));
        assert!(err.to_string().contains("P2"));
        assert_eq!(find_violations(&documents).len(), 1);
        assert_eq!(violation_kind(&err), Some(DocumentKind::Page));
    }

    #[test]
    fn find_violations_collects_everything() {
        let documents = docs(vec![
            page("p1", "other", "en", None),
            post("a", "en", "x"),
            post("b", "en", "x"),
        ]);
        let errors = find_violations(&documents);
        assert_eq!(errors.len(), 2);
        assert!(is_missing_slug(&errors[0]));
        assert!(is_duplicate_slug(&errors[1]));
    }

    #[test]
    fn member_ids_are_closed_world() {
        let documents = docs(vec![
            json!({"_type": "member", "_id": "m1", "memberId": "lyf"}),
            json!({"_type": "member", "_id": "m2", "memberId": "ghost"}),
            json!({"_type": "member", "_id": "m3"}),
        ]);
        let known: HashSet<&str> = ["lyf", "lya"].into_iter().collect();

        let err = validate_member_ids(&documents, &known).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownMemberId {
                document: "m2".into(),
                member_id: "ghost".into()
            }
        );
        assert!(validate_member_ids(&documents[..1], &known).is_ok());
    }
}
