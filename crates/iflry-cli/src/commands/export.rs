use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use iflry_config::SiteConfig;
use iflry_core::{
    AnnouncementBanner, Document, Event, Footer, Locale, Post, RoleEntry, StaticMember, Vacancy,
    excerpt,
};
use iflry_loader::{
    ContentStore, Datasets, PublicDirProbe, decode_documents, is_content_file, parse_dataset,
};
use iflry_naming::DEFAULT_TRUNCATE_LENGTH;
use iflry_resolver::{
    MemberBuckets, NavEntry, RoleSection, Section, bucket_members, events_for_programme,
    latest_posts, open_vacancies, programme_page_slug, resolve_path, role_display_name,
    section_path, upcoming_events,
};
use serde::Serialize;
use tokio::fs;

use crate::commands::people::people_sections;
use crate::utils::load_config;

/// Everything the site renders for one locale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleBundle {
    pub locale: Locale,
    pub generated_at: DateTime<Utc>,
    pub navigation: Vec<NavEntry>,
    pub people: Vec<PeopleSection>,
    pub members: MemberBuckets,
    pub programmes: Vec<ProgrammeSummary>,
    pub vacancies: Vec<Vacancy>,
    pub events: Vec<Event>,
    pub posts: Vec<PostCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_banner: Option<AnnouncementBanner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleSection {
    pub role_type: String,
    pub title: String,
    pub people: Vec<PersonCard>,
}

/// A role holder with the role label in the bundle's locale.
#[derive(Debug, Serialize)]
pub struct PersonCard {
    #[serde(flatten)]
    pub entry: RoleEntry,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeSummary {
    pub id: String,
    pub title: String,
    pub email: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ids of the programme's upcoming events.
    pub events: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PostCard {
    #[serde(flatten)]
    pub post: Post,
    pub excerpt: String,
}

pub async fn cmd_export(out: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let (documents, general, regional) = tokio::try_join!(
        load_documents_recursive(config.content_dir()),
        load_dataset_async(config.members_path()),
        load_dataset_async(config.regional_members_path()),
    )?;

    let store = ContentStore::new(documents);
    let datasets = Datasets { general, regional };
    let now = Utc::now();
    let bundles: Vec<LocaleBundle> = config
        .locales()
        .into_iter()
        .map(|locale| build_bundle(&config, &store, &datasets, locale, now))
        .collect();

    let target_root = out.unwrap_or_else(|| config.export_dir().to_path_buf());
    fs::create_dir_all(&target_root)
        .await
        .with_context(|| format!("create export dir {}", target_root.display()))?;

    let write_futures: Vec<_> = bundles
        .iter()
        .map(|bundle| {
            let out_path = target_root.join(format!("{}.json", bundle.locale));
            async move {
                let json = serde_json::to_string_pretty(bundle)
                    .with_context(|| format!("serialize bundle {}", bundle.locale))?;
                fs::write(&out_path, json)
                    .await
                    .with_context(|| format!("write {}", out_path.display()))?;
                println!("Exported {} -> {}", bundle.locale, out_path.display());
                Ok::<(), anyhow::Error>(())
            }
        })
        .collect();

    try_join_all(write_futures).await?;
    Ok(())
}

pub fn build_bundle(
    config: &SiteConfig,
    store: &ContentStore,
    datasets: &Datasets,
    locale: Locale,
    now: DateTime<Utc>,
) -> LocaleBundle {
    let settings = store.settings(locale);
    let probe = PublicDirProbe::new(config.member_images_dir());
    let members = datasets.merge(&store.member_overrides(), &probe);

    let vacancies = store.vacancies(locale);
    let events: Vec<Event> = upcoming_events(&store.events(locale), now)
        .into_iter()
        .cloned()
        .collect();
    let posts = store.posts(locale);

    LocaleBundle {
        locale,
        generated_at: now,
        navigation: store.navigation(locale),
        people: localized_people(people_sections(&store.role_entries(), now, false), locale),
        members: bucket_members(&members),
        programmes: programme_summaries(store, &events, locale),
        vacancies: open_vacancies(&vacancies, now.date_naive())
            .into_iter()
            .cloned()
            .collect(),
        posts: latest_posts(&posts, locale, config.featured_posts())
            .into_iter()
            .map(|post| PostCard {
                excerpt: excerpt(&post.content, DEFAULT_TRUNCATE_LENGTH),
                post: post.clone(),
            })
            .collect(),
        events,
        announcement_banner: settings
            .as_ref()
            .and_then(|s| s.announcement_banner.clone())
            .filter(AnnouncementBanner::is_visible),
        footer: settings.and_then(|s| s.footer),
    }
}

fn localized_people(sections: Vec<RoleSection>, locale: Locale) -> Vec<PeopleSection> {
    sections
        .into_iter()
        .map(|section| PeopleSection {
            role_type: section.role_type,
            title: section.title,
            people: section
                .entries
                .into_iter()
                .map(|entry| PersonCard {
                    label: role_display_name(&entry, locale),
                    entry,
                })
                .collect(),
        })
        .collect()
}

/// Programmes linked to their page in `locale`. Without a page the path is
/// derived from the programme title.
fn programme_summaries(
    store: &ContentStore,
    upcoming: &[Event],
    locale: Locale,
) -> Vec<ProgrammeSummary> {
    let pages = store.programme_pages(locale);
    store
        .programmes()
        .into_iter()
        .map(|programme| {
            let slug = pages
                .iter()
                .find(|page| page.programme.points_to(&programme.id))
                .and_then(|page| page.slug.as_ref())
                .map(|slug| slug.current.clone())
                .unwrap_or_else(|| programme_page_slug(Some(&programme.title)));
            ProgrammeSummary {
                path: resolve_path("programme", Some(locale), Some(&slug))
                    .unwrap_or_else(|| section_path(locale, Section::Programmes)),
                description: programme.description_for(locale).map(str::to_string),
                events: events_for_programme(upcoming, &programme.id)
                    .into_iter()
                    .map(|event| event.id.clone())
                    .collect(),
                id: programme.id,
                title: programme.title,
                email: programme.email,
            }
        })
        .collect()
}

async fn load_documents_recursive(base: &Path) -> Result<Vec<Document>> {
    let mut files = Vec::new();
    if !base.exists() {
        return Ok(Vec::new());
    }
    walk_content(base, &mut files).await?;
    files.sort();

    let reads = files.iter().map(|path| async move {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("read content file: {}", path.display()))?;
        Ok::<_, anyhow::Error>(decode_documents(path, &content))
    });
    let parsed = try_join_all(reads).await?;
    Ok(parsed.into_iter().flatten().collect())
}

#[async_recursion::async_recursion]
async fn walk_content(current: &Path, acc: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(current)
        .await
        .with_context(|| format!("read {}", current.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_dir() {
            walk_content(&path, acc).await?;
        } else if is_content_file(&path) {
            acc.push(path);
        }
    }
    Ok(())
}

async fn load_dataset_async(path: PathBuf) -> Result<Vec<StaticMember>> {
    if !path.exists() {
        iflry_resolver::diagnostic!("membership dataset not found: {}", path.display());
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("read membership dataset: {}", path.display()))?;
    parse_dataset(&path, &content)
}
