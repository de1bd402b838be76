//! Localized labels for role functions.
//!
//! Missing keys fall back to English, then to nothing.

use iflry_core::Locale;

const CATALOG_EN: &[(&str, &str)] = &[
    ("role.president", "President"),
    ("role.vice-president", "Vice President"),
    ("role.secretary-general", "Secretary General"),
    ("role.treasurer", "Treasurer"),
    ("role.executive-director", "Executive Director"),
    ("role.project-manager", "Project Manager"),
    ("role.intern", "Intern"),
    ("role.ombudsperson", "Ombudsperson"),
    ("section.bureau-member", "Bureau"),
    ("section.regional-representative", "Regional Representatives"),
    ("section.office", "Office"),
    ("section.honorary-member", "Honorary Members"),
    ("section.ombudsperson", "Ombudsperson"),
    ("section.advisory-council", "Advisory Council"),
    ("section.individual-member", "Individual Members"),
];

const CATALOG_FR: &[(&str, &str)] = &[
    ("role.president", "Président·e"),
    ("role.vice-president", "Vice-président·e"),
    ("role.secretary-general", "Secrétaire général·e"),
    ("role.treasurer", "Trésorier·ère"),
    ("role.executive-director", "Directeur·rice exécutif·ve"),
    ("role.project-manager", "Chef·fe de projet"),
    ("role.intern", "Stagiaire"),
    ("role.ombudsperson", "Médiateur·rice"),
];

const CATALOG_ES: &[(&str, &str)] = &[
    ("role.president", "Presidente"),
    ("role.vice-president", "Vicepresidente"),
    ("role.secretary-general", "Secretaría General"),
    ("role.treasurer", "Tesorería"),
    ("role.executive-director", "Dirección Ejecutiva"),
    ("role.project-manager", "Gestión de Proyectos"),
    ("role.intern", "Becario/a"),
    ("role.ombudsperson", "Defensoría"),
];

fn catalog(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Fr => CATALOG_FR,
        Locale::Es => CATALOG_ES,
    }
}

fn lookup(entries: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Label for `key` in `locale`, falling back to English.
pub fn translate(locale: Locale, key: &str) -> Option<&'static str> {
    lookup(catalog(locale), key).or_else(|| lookup(CATALOG_EN, key))
}

/// Label of a bureau role, office role or `ombudsperson`.
pub fn role_label(locale: Locale, role: &str) -> Option<&'static str> {
    translate(locale, &format!("role.{role}"))
}

/// Section heading of a role type, if the type is known.
pub fn section_title(role_type: &str) -> Option<&'static str> {
    translate(Locale::En, &format!("section.{role_type}"))
}
