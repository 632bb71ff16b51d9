//! Static datasets behind the Reports tab.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSourceStat {
    pub name: &'static str,
    pub attributes: u32,
}

pub const DATA_SOURCES: &[DataSourceStat] = &[
    DataSourceStat { name: "CRM Database", attributes: 45 },
    DataSourceStat { name: "Web Analytics", attributes: 32 },
    DataSourceStat { name: "Email Platform", attributes: 28 },
    DataSourceStat { name: "Social Media", attributes: 21 },
    DataSourceStat { name: "Ad Platforms", attributes: 38 },
    DataSourceStat { name: "CDP", attributes: 52 },
];

pub const ACTIVE_CAMPAIGNS: &[(&str, u32)] = &[
    ("Summer Sale 2024", 35),
    ("Brand Awareness", 25),
    ("Product Launch", 20),
    ("Retargeting", 20),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataPresence {
    pub campaign: &'static str,
    pub available: u8,
    pub unavailable: u8,
    pub contextual_score: u8,
}

pub const METADATA_PRESENCE: &[MetadataPresence] = &[
    MetadataPresence {
        campaign: "Summer Sale",
        available: 85,
        unavailable: 15,
        contextual_score: 92,
    },
    MetadataPresence {
        campaign: "Brand Awareness",
        available: 72,
        unavailable: 28,
        contextual_score: 78,
    },
    MetadataPresence {
        campaign: "Product Launch",
        available: 90,
        unavailable: 10,
        contextual_score: 95,
    },
    MetadataPresence {
        campaign: "Retargeting",
        available: 65,
        unavailable: 35,
        contextual_score: 68,
    },
    MetadataPresence {
        campaign: "Email Nurture",
        available: 78,
        unavailable: 22,
        contextual_score: 82,
    },
];

/// A campaign's slice of the active-campaign pie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignShare {
    pub name: &'static str,
    pub value: u32,
    /// Rounded share of the total, in percent.
    pub percent: u8,
}

pub fn campaign_shares(campaigns: &[(&'static str, u32)]) -> Vec<CampaignShare> {
    let total: u32 = campaigns.iter().map(|(_, value)| *value).sum();
    campaigns
        .iter()
        .map(|&(name, value)| {
            let percent = if total == 0 {
                0
            } else {
                ((f64::from(value) / f64::from(total)) * 100.0).round() as u8
            };
            CampaignShare {
                name,
                value,
                percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_round_to_whole_percent() {
        let shares = campaign_shares(&[("a", 1), ("b", 2)]);
        assert_eq!(shares[0].percent, 33);
        assert_eq!(shares[1].percent, 67);
    }

    #[test]
    fn active_campaign_shares_match_values() {
        let shares = campaign_shares(ACTIVE_CAMPAIGNS);
        let percents: Vec<_> = shares.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![35, 25, 20, 20]);
    }

    #[test]
    fn empty_total_yields_zero() {
        let shares = campaign_shares(&[("a", 0)]);
        assert_eq!(shares[0].percent, 0);
    }

    #[test]
    fn presence_rows_add_up_to_hundred() {
        for row in METADATA_PRESENCE {
            assert_eq!(row.available + row.unavailable, 100, "{}", row.campaign);
        }
    }
}
