//! Literal page content. Array order is display order.

use crate::components::icons::IconKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: u32,
    pub couple_names: &'static str,
    pub title: &'static str,
    /// Track length as `m:ss`.
    pub duration_display: &'static str,
    pub genre: &'static str,
    pub image_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price_display: &'static str,
    pub description: &'static str,
    pub is_featured: bool,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PORTFOLIO_ITEMS: [PortfolioItem; 3] = [
    PortfolioItem {
        id: 1,
        couple_names: "Sarah & James",
        title: "Forever in August",
        duration_display: "3:42",
        genre: "Acoustic Folk",
        image_url: "https://picsum.photos/seed/wedding1/400/400",
    },
    PortfolioItem {
        id: 2,
        couple_names: "Michael & David",
        title: "Starlight Vows",
        duration_display: "2:55",
        genre: "Piano Ballad",
        image_url: "https://picsum.photos/seed/wedding2/400/400",
    },
    PortfolioItem {
        id: 3,
        couple_names: "Elena & Thomas",
        title: "The Journey Home",
        duration_display: "4:10",
        genre: "Cinematic Orchestral",
        image_url: "https://picsum.photos/seed/wedding3/400/400",
    },
];

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "The Vow Snippet",
        price_display: "$499",
        description: "A perfect 60-second musical capture of your love. Ideal for social media highlights and intimate moments.",
        is_featured: false,
        features: &[
            "60-Second Composition",
            "Piano or Acoustic Guitar",
            "Digital Download (MP3/WAV)",
            "1 Revision Round",
            "Social Media License",
        ],
    },
    PricingTier {
        name: "Signature Union",
        price_display: "$999",
        description: "Our most popular choice. A full-length song telling your complete story with rich instrumentation.",
        is_featured: true,
        features: &[
            "Full Length (3-4 Minutes)",
            "Full Band Arrangement",
            "Professional Mixing & Mastering",
            "Lyric Video",
            "2 Revision Rounds",
            "Streaming Platform Upload",
        ],
    },
    PricingTier {
        name: "Legacy Orchestral",
        price_display: "$1,999",
        description: "The ultimate sonic heirloom. Cinematic production featuring string arrangements and a physical keepsake.",
        is_featured: false,
        features: &[
            "Extended Cinematic Composition",
            "String Quartet Arrangement",
            "Live Instrument Recording",
            "Custom Vinyl Record Keepsake",
            "Unlimited Revisions",
            "Sheet Music Framed Gift",
        ],
    },
];

pub const PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        icon: IconKind::Heart,
        title: "1. The Story",
        description: "We interview you to understand your journey, your style, and your vows.",
    },
    ProcessStep {
        icon: IconKind::Music,
        title: "2. The Composition",
        description: "Our world-class composers craft a melody unique to your relationship.",
    },
    ProcessStep {
        icon: IconKind::Star,
        title: "3. The Masterpiece",
        description: "You receive a studio-quality recording to cherish forever.",
    },
];

pub const PROCESS_IMAGE_URL: &str = "https://picsum.photos/seed/piano/800/1000";
pub const PROCESS_QUOTE: &str = "\"Music is the shorthand of emotion.\"";
pub const PROCESS_QUOTE_AUTHOR: &str = "- Leo Tolstoy";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn portfolio_ids_are_unique() {
        let ids: HashSet<u32> = PORTFOLIO_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), PORTFOLIO_ITEMS.len());
    }

    #[test]
    fn durations_are_minutes_and_seconds() {
        for item in PORTFOLIO_ITEMS {
            let (minutes, seconds) = item
                .duration_display
                .split_once(':')
                .expect("duration has a colon");
            assert!(minutes.parse::<u32>().is_ok());
            assert_eq!(seconds.len(), 2);
            assert!(seconds.parse::<u32>().map(|s| s < 60).unwrap_or(false));
        }
    }

    #[test]
    fn exactly_one_tier_is_featured() {
        let featured: Vec<&str> = PRICING_TIERS
            .iter()
            .filter(|tier| tier.is_featured)
            .map(|tier| tier.name)
            .collect();
        assert_eq!(featured, vec!["Signature Union"]);
    }

    #[test]
    fn every_tier_lists_features() {
        assert!(PRICING_TIERS.iter().all(|tier| !tier.features.is_empty()));
        assert_eq!(PRICING_TIERS[0].features.len(), 5);
    }
}
