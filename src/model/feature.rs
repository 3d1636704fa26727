//! The fixed set of document-generation features
//!
//! Each feature maps to a `document_type` key understood by the process
//! service, plus the static title and description shown in the sidebar.

/// A document-generation mode offered by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ElevatorPitch,
    PitchDeck,
    SalesPitch,
    Brochure,
    OnePager,
    IndustryBrochure,
    CompetitorsAnalysis,
    SwotAnalysis,
    TargetFirms,
    PatentValuation,
    MarketPlace,
}

impl Feature {
    /// All features, in sidebar display order
    pub fn all() -> [Feature; 11] {
        [
            Feature::ElevatorPitch,
            Feature::PitchDeck,
            Feature::SalesPitch,
            Feature::Brochure,
            Feature::OnePager,
            Feature::IndustryBrochure,
            Feature::CompetitorsAnalysis,
            Feature::SwotAnalysis,
            Feature::TargetFirms,
            Feature::PatentValuation,
            Feature::MarketPlace,
        ]
    }

    /// Wire key sent as `document_type` in the /process payload
    pub fn key(&self) -> &'static str {
        match self {
            Feature::ElevatorPitch => "elevator_pitch",
            Feature::PitchDeck => "pitch_deck",
            Feature::SalesPitch => "sales_pitch",
            Feature::Brochure => "brochure",
            Feature::OnePager => "one_pager",
            Feature::IndustryBrochure => "industry_brochure",
            Feature::CompetitorsAnalysis => "competitors_analysis",
            Feature::SwotAnalysis => "swot_analysis",
            Feature::TargetFirms => "target_firms",
            Feature::PatentValuation => "patent_valuation",
            Feature::MarketPlace => "market_place",
        }
    }

    /// Look up a feature by its wire key
    pub fn from_key(key: &str) -> Option<Feature> {
        Feature::all().into_iter().find(|f| f.key() == key)
    }

    /// Display label shown in the feature list
    pub fn label(&self) -> &'static str {
        match self {
            Feature::ElevatorPitch => "Elevator Pitch",
            Feature::PitchDeck => "Pitch Deck",
            Feature::SalesPitch => "Sales Pitch",
            Feature::Brochure => "Brochure",
            Feature::OnePager => "One Pager",
            Feature::IndustryBrochure => "Industry Brochure",
            Feature::CompetitorsAnalysis => "Competitors Analysis",
            Feature::SwotAnalysis => "SWOT Analysis",
            Feature::TargetFirms => "Target Firms",
            Feature::PatentValuation => "Patent Valuation",
            Feature::MarketPlace => "Market Place",
        }
    }

    /// Static description shown in the feature card
    pub fn description(&self) -> &'static str {
        match self {
            Feature::ElevatorPitch => {
                "A brief, persuasive speech about your patent delivered in 30-60 seconds."
            }
            Feature::PitchDeck => {
                "A comprehensive presentation that outlines your patent's value proposition, \
                 market potential, and business strategy. It typically includes 10-12 slides \
                 covering key aspects like problem statement, solution, market size, \
                 competition, and monetization strategy."
            }
            Feature::SalesPitch => {
                "A focused presentation on the commercial benefits of your patent."
            }
            Feature::Brochure => {
                "A detailed document showcasing your patent's features and benefits."
            }
            Feature::OnePager => "A single-page summary of your patent.",
            Feature::IndustryBrochure => "A brochure specifically tailored for your industry.",
            Feature::CompetitorsAnalysis => "An analysis of your competitors in the market.",
            Feature::SwotAnalysis => "A SWOT analysis of your patent.",
            Feature::TargetFirms => "A list of target firms for your patent.",
            Feature::PatentValuation => "An estimation of your patent's value.",
            Feature::MarketPlace => "Information about the market place for your patent.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(Feature::all().len(), 11);
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: Vec<&str> = Feature::all().iter().map(|f| f.key()).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn test_from_key_round_trip() {
        for feature in Feature::all() {
            assert_eq!(Feature::from_key(feature.key()), Some(feature));
        }
        assert_eq!(Feature::from_key("not_a_feature"), None);
    }

    #[test]
    fn test_labels_and_descriptions_nonempty() {
        for feature in Feature::all() {
            assert!(!feature.label().is_empty());
            assert!(!feature.description().is_empty());
        }
    }

    #[test]
    fn test_feature_content_matches_selection() {
        assert_eq!(Feature::ElevatorPitch.label(), "Elevator Pitch");
        assert!(Feature::ElevatorPitch.description().contains("30-60 seconds"));
        assert_eq!(Feature::SwotAnalysis.key(), "swot_analysis");
    }
}
