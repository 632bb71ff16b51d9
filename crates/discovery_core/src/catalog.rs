//! Static enrichment catalogs and lookup tables.

use crate::EnrichmentField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

const fn entry(id: &'static str, name: &'static str) -> CatalogEntry {
    CatalogEntry { id, name }
}

pub const CAMPAIGNS: &[CatalogEntry] = &[
    entry("all", "ALL"),
    entry("camp1", "Summer Sale 2024"),
    entry("camp2", "Holiday Promo"),
    entry("camp3", "Brand Awareness Q1"),
    entry("camp4", "Product Launch"),
];

pub const SOURCES: &[CatalogEntry] = &[
    entry("all", "ALL"),
    entry("src1", "Google Analytics"),
    entry("src2", "Salesforce CRM"),
    entry("src3", "Facebook Ads"),
    entry("src4", "Email Platform"),
];

pub const STATUSES: &[CatalogEntry] = &[
    entry("all", "ALL"),
    entry("active", "Active"),
    entry("in-review", "In Review"),
    entry("in-progress", "In Progress"),
    entry("archived", "Archived"),
];

pub const SCHEDULES: &[CatalogEntry] = &[
    entry("daily", "Daily"),
    entry("weekly", "Weekly"),
    entry("monthly", "Monthly"),
    entry("manual", "Manual"),
];

/// Options a select field can take; empty for free-text fields.
pub fn options_for(field: EnrichmentField) -> &'static [CatalogEntry] {
    match field {
        EnrichmentField::Campaign | EnrichmentField::ConfigCampaign => CAMPAIGNS,
        EnrichmentField::Source | EnrichmentField::ConfigSource => SOURCES,
        EnrichmentField::Status => STATUSES,
        EnrichmentField::Schedule => SCHEDULES,
        EnrichmentField::Description => &[],
    }
}

pub fn name_of(entries: &[CatalogEntry], id: &str) -> Option<&'static str> {
    entries.iter().find(|e| e.id == id).map(|e| e.name)
}

const DEFAULT_KEY: &str = "default";

/// `"<campaign>-<source>"` when both are selected, `"default"` otherwise.
pub fn selection_key(campaign: Option<&str>, source: Option<&str>) -> String {
    match (campaign, source) {
        (Some(campaign), Some(source)) => format!("{campaign}-{source}"),
        _ => DEFAULT_KEY.to_string(),
    }
}

/// Metadata availability in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub source: u8,
    pub campaign: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityLevel {
    High,
    Medium,
    Low,
}

impl AvailabilityLevel {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 80 {
            AvailabilityLevel::High
        } else if percent >= 60 {
            AvailabilityLevel::Medium
        } else {
            AvailabilityLevel::Low
        }
    }
}

const AVAILABILITY: &[(&str, Availability)] = &[
    ("camp1-src1", Availability { source: 92, campaign: 88 }),
    ("camp1-src2", Availability { source: 78, campaign: 85 }),
    ("camp2-src3", Availability { source: 95, campaign: 91 }),
    ("camp3-src4", Availability { source: 65, campaign: 72 }),
    ("camp4-src1", Availability { source: 88, campaign: 82 }),
];

const DEFAULT_AVAILABILITY: Availability = Availability {
    source: 75,
    campaign: 70,
};

pub fn availability_for(key: &str) -> Availability {
    AVAILABILITY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, a)| *a)
        .unwrap_or(DEFAULT_AVAILABILITY)
}

pub const RELEVANCY_THRESHOLD: u8 = 70;

const RELEVANCY: &[(&str, u8)] = &[
    ("camp1-src1", 87),
    ("camp1-src2", 72),
    ("camp2-src3", 91),
    ("camp3-src4", 65),
];

const DEFAULT_RELEVANCY: u8 = 70;

pub fn relevancy_for(key: &str) -> u8 {
    RELEVANCY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_RELEVANCY)
}

/// Per-source pipeline counts for the status chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePipelineStatus {
    pub source: &'static str,
    pub complete: u32,
    pub in_progress: u32,
    pub queued: u32,
    pub in_review: u32,
    pub failed: u32,
}

pub const SOURCE_PIPELINE_STATUS: &[SourcePipelineStatus] = &[
    SourcePipelineStatus {
        source: "Google Analytics",
        complete: 12,
        in_progress: 3,
        queued: 4,
        in_review: 2,
        failed: 1,
    },
    SourcePipelineStatus {
        source: "Salesforce CRM",
        complete: 8,
        in_progress: 5,
        queued: 3,
        in_review: 1,
        failed: 2,
    },
    SourcePipelineStatus {
        source: "Facebook Ads",
        complete: 15,
        in_progress: 2,
        queued: 5,
        in_review: 3,
        failed: 0,
    },
    SourcePipelineStatus {
        source: "Email Platform",
        complete: 6,
        in_progress: 4,
        queued: 2,
        in_review: 2,
        failed: 1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_key_needs_both_parts() {
        assert_eq!(selection_key(Some("camp1"), Some("src2")), "camp1-src2");
        assert_eq!(selection_key(Some("camp1"), None), "default");
        assert_eq!(selection_key(None, Some("src2")), "default");
    }

    #[test]
    fn lookups_fall_back_to_default() {
        assert_eq!(
            availability_for("camp2-src3"),
            Availability {
                source: 95,
                campaign: 91
            }
        );
        assert_eq!(availability_for("camp4-src4"), DEFAULT_AVAILABILITY);
        assert_eq!(relevancy_for("camp3-src4"), 65);
        // camp4-src1 has availability data but no relevancy score.
        assert_eq!(relevancy_for("camp4-src1"), 70);
    }

    #[test]
    fn availability_levels() {
        assert_eq!(AvailabilityLevel::from_percent(80), AvailabilityLevel::High);
        assert_eq!(AvailabilityLevel::from_percent(79), AvailabilityLevel::Medium);
        assert_eq!(AvailabilityLevel::from_percent(60), AvailabilityLevel::Medium);
        assert_eq!(AvailabilityLevel::from_percent(59), AvailabilityLevel::Low);
    }

    #[test]
    fn description_has_no_options() {
        assert!(options_for(EnrichmentField::Description).is_empty());
        assert_eq!(options_for(EnrichmentField::Schedule), SCHEDULES);
        assert_eq!(name_of(SOURCES, "src4"), Some("Email Platform"));
        assert_eq!(name_of(SOURCES, "src9"), None);
    }
}
