use std::collections::{HashMap, HashSet};

use iflry_core::{Member, MemberDocument, MemberId, MemberType, StaticMember};
use serde::Serialize;

use crate::diagnostic;

/// Image extensions probed for a member, in priority order.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpeg", "jpg", "webp"];

/// Finds a local image for a member.
pub trait ImageProbe {
    /// Public URL of the first existing image for `member_id`.
    /// Probe failures are reported as `None`.
    fn find_image(&self, member_id: &str) -> Option<String>;
}

/// Probe that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageProbe for NoImages {
    fn find_image(&self, _member_id: &str) -> Option<String> {
        None
    }
}

/// Fields a CMS member document overrides.
///
/// Social handles distinguish "not overridden" (`None`) from "cleared"
/// (`Some(None)`). The other fields only override when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberOverride {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub website: Option<String>,
    pub wiki: Option<String>,
    pub fb: Option<Option<String>>,
    pub twitter: Option<Option<String>>,
    pub ig: Option<Option<String>>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

fn social(value: &Option<String>) -> Option<Option<String>> {
    value.as_ref().map(|v| Some(v.clone()).filter(|v| !v.is_empty()))
}

impl MemberOverride {
    pub fn from_document(doc: &MemberDocument) -> Self {
        Self {
            name: non_empty(&doc.name),
            image_url: non_empty(&doc.logo),
            website: non_empty(&doc.website),
            wiki: non_empty(&doc.wiki),
            fb: social(&doc.fb),
            twitter: social(&doc.twitter),
            ig: social(&doc.ig),
        }
    }
}

/// Overrides keyed by member id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberOverrides(HashMap<MemberId, MemberOverride>);

impl MemberOverrides {
    /// No overrides: merged output equals the datasets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from member documents. Documents without a `memberId` are skipped;
    /// a later document for the same id replaces an earlier one.
    pub fn from_documents<'a>(docs: impl IntoIterator<Item = &'a MemberDocument>) -> Self {
        let map = docs
            .into_iter()
            .filter_map(|doc| {
                let id = doc.member_id.as_deref().filter(|id| !id.is_empty())?;
                Some((id.to_string(), MemberOverride::from_document(doc)))
            })
            .collect();
        Self(map)
    }

    pub fn get(&self, member_id: &str) -> Option<&MemberOverride> {
        self.0.get(member_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

fn pick_social(overridden: Option<&Option<String>>, base: &Option<String>) -> Option<String> {
    match overridden {
        Some(value) => value.clone(),
        None => base.clone(),
    }
}

fn merge_one(
    member: &StaticMember,
    member_type: MemberType,
    overrides: &MemberOverrides,
    probe: Option<&dyn ImageProbe>,
) -> Member {
    let empty = MemberOverride::default();
    let o = overrides.get(&member.id).unwrap_or(&empty);

    let image_url = o
        .image_url
        .clone()
        .or_else(|| probe.and_then(|p| p.find_image(&member.id)));

    Member {
        id: member.id.clone(),
        name: o.name.clone().unwrap_or_else(|| member.name.clone()),
        country: member.country.clone(),
        member_type,
        website: o.website.clone().or_else(|| member.website.clone()),
        wiki: o.wiki.clone().or_else(|| member.wiki.clone()),
        fb: pick_social(o.fb.as_ref(), &member.fb),
        twitter: pick_social(o.twitter.as_ref(), &member.twitter),
        ig: pick_social(o.ig.as_ref(), &member.ig),
        image_url,
    }
}

/// Merge both membership datasets with CMS overrides.
///
/// General members come first and keep their dataset type; their image falls
/// back to `probe`. Regional members are always typed regional and only get
/// a CMS image.
pub fn merge_members(
    general: &[StaticMember],
    regional: &[StaticMember],
    overrides: &MemberOverrides,
    probe: &dyn ImageProbe,
) -> Vec<Member> {
    let known: HashSet<&str> = general
        .iter()
        .chain(regional)
        .map(|m| m.id.as_str())
        .collect();
    let mut orphans: Vec<&str> = overrides.ids().filter(|id| !known.contains(id)).collect();
    orphans.sort_unstable();
    for id in orphans {
        diagnostic!("member override for unknown member id '{id}' ignored");
    }

    let general = general.iter().map(|m| {
        if !m.member_type.is_known() {
            diagnostic!("member '{}' has an unknown type", m.id);
        }
        merge_one(m, m.member_type, overrides, Some(probe))
    });
    let regional = regional
        .iter()
        .map(|m| merge_one(m, MemberType::Regional, overrides, None));

    general.chain(regional).collect()
}

/// Members split by type for sectioned display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberBuckets {
    pub regional: Vec<Member>,
    pub full: Vec<Member>,
    pub associate: Vec<Member>,
    pub observer: Vec<Member>,
    /// Members whose type is none of the four above.
    pub uncategorized: Vec<Member>,
}

impl MemberBuckets {
    /// Buckets in display order, with their type.
    pub fn sections(&self) -> [(MemberType, &[Member]); 5] {
        [
            (MemberType::Regional, self.regional.as_slice()),
            (MemberType::Full, self.full.as_slice()),
            (MemberType::Associate, self.associate.as_slice()),
            (MemberType::Observer, self.observer.as_slice()),
            (MemberType::Uncategorized, self.uncategorized.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.sections().iter().map(|(_, members)| members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition members by type, keeping input order within each bucket.
pub fn bucket_members(members: &[Member]) -> MemberBuckets {
    let mut buckets = MemberBuckets::default();
    for member in members {
        let bucket = match member.member_type {
            MemberType::Regional => &mut buckets.regional,
            MemberType::Full => &mut buckets.full,
            MemberType::Associate => &mut buckets.associate,
            MemberType::Observer => &mut buckets.observer,
            MemberType::Uncategorized => &mut buckets.uncategorized,
        };
        bucket.push(member.clone());
    }
    buckets
}

/// Ids from both datasets, for closed-world checks.
pub fn dataset_ids<'a>(general: &'a [StaticMember], regional: &'a [StaticMember]) -> HashSet<&'a str> {
    general.iter().chain(regional).map(|m| m.id.as_str()).collect()
}
