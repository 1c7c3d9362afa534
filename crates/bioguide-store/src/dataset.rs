//! Built-in dataset: India biomaterials market report (2024).

use crate::store::{KnowledgeStore, StoreSource};
use crate::types::{EntryKey, KnowledgeEntry, Sector, Topic};

/// The store used when no report document is configured.
pub fn builtin_store() -> KnowledgeStore {
    KnowledgeStore::from_entries(StoreSource::Builtin, builtin_entries())
        .expect("built-in dataset keys are unique")
}

fn builtin_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(EntryKey::topic(Topic::Overview), "Market Overview")
            .with_headline("$5.74B market in 2024")
            .with_fact("Current Size", "$5.74 billion (2024)")
            .with_fact("Projected 2032 Size", "$20.49 billion (2032)")
            .with_list(
                "Key Segments",
                &[
                    "Healthcare: $2.84 billion (2022) → $9.44 billion (2030), 16.20% CAGR",
                    "Biopolymers: $388.9 million (2025) → $844.2 million (2032), 11.7% CAGR",
                ],
            ),
        KnowledgeEntry::new(EntryKey::sector(Sector::Healthcare), "Healthcare")
            .with_headline("$9.44B by 2030")
            .with_list(
                "Key Applications",
                &[
                    "Biodegradable Medical Devices (e.g., PLA-based implants)",
                    "Drug Delivery Systems (chitosan, gelatin, calcium phosphate)",
                    "Tissue Engineering (cellulose-based scaffolds)",
                ],
            )
            .with_list(
                "Success Examples",
                &[
                    "Orthocrafts Innovations' bioabsorbable maxillofacial implants",
                    "CSIR-CDRI's Blockchain For Impact partnership for biomedical innovation",
                ],
            )
            .with_list(
                "Market Stats",
                &[
                    "$2.84B in 2022, projected $9.44B by 2030",
                    "16.20% CAGR",
                ],
            ),
        KnowledgeEntry::new(EntryKey::sector(Sector::Packaging), "Packaging")
            .with_headline("11.7% CAGR")
            .with_list(
                "Key Applications",
                &[
                    "Biodegradable packaging (Florafoam from flower waste)",
                    "Compostable films (cellulose, starch, chitosan)",
                    "Automotive biocomposites (MYNUSCo's bamboo waste materials)",
                ],
            )
            .with_list(
                "Success Examples",
                &[
                    "Phool's temple flower waste conversion",
                    "MYNUSCo's partnerships with Renault Nissan and beauty brands",
                ],
            ),
        KnowledgeEntry::new(EntryKey::sector(Sector::Agriculture), "Agriculture")
            .with_headline("990M tonnes biomass")
            .with_list(
                "Key Applications",
                &[
                    "Bioplastics for mulch films and seed coatings",
                    "Bio-based fertilizers from agricultural waste",
                    "Bamboo fiber utilization (1.5-4.0mm length)",
                ],
            )
            .with_list(
                "Market Stats",
                &[
                    "990 million tonnes annual agricultural biomass",
                    "230 MMT surplus availability",
                ],
            ),
        KnowledgeEntry::new(EntryKey::sector(Sector::Textiles), "Textiles")
            .with_headline("bio-leather, PLA fibers")
            .with_list(
                "Key Applications",
                &[
                    "Biomass-based fibers comparable to synthetics",
                    "Bio-leather from agricultural waste",
                    "PLA-based sustainable fashion materials",
                ],
            ),
        KnowledgeEntry::new(EntryKey::topic(Topic::Partnership), "Essential Partnerships")
            .with_list(
                "Government",
                &[
                    "BIRAC (BioAngels platform, India Health Fund)",
                    "BioE3 Policy Framework (bio-manufacturing hubs)",
                    "State initiatives (Odisha biotech park, AMTZ in Andhra Pradesh)",
                ],
            )
            .with_list(
                "Research",
                &[
                    "IISc Bangalore (3D Bioprinting Center of Excellence)",
                    "IIT Guwahati (NRL-Center for Bioplastics)",
                    "CSIR network (IICT, CGCRI, CDRI)",
                ],
            )
            .with_list(
                "Industry",
                &[
                    "MYNUSCo (biocomposites for automotive and packaging)",
                    "Advance Bio Material Company (bioplastics raw materials)",
                    "KIHT (technology transfer with IITs/NITs)",
                ],
            )
            .with_list(
                "Distribution",
                &[
                    "Biotechno Labs (life sciences distribution)",
                    "DKSH (international distribution networks)",
                    "Healthcare partners (Zydus, Cadila, Axio Biosolutions)",
                ],
            ),
        KnowledgeEntry::new(EntryKey::topic(Topic::Policy), "Government Policies & Support")
            .with_list(
                "Key Policies",
                &[
                    "BioE3 Policy (biomanufacturing hubs, AI/ML capabilities)",
                    "PLI Schemes (electronics, pharmaceuticals)",
                    "National Biopharma Mission",
                ],
            )
            .with_list(
                "Funding Schemes",
                &[
                    "BIRAC BIG Grant (₹50 lakh/USD 70,000)",
                    "BioNEST Incubators (1M sq ft space)",
                    "SBIRI funding for advanced projects",
                ],
            ),
        KnowledgeEntry::new(EntryKey::topic(Topic::Case), "Successful Case Studies")
            .with_fact(
                "MYNUSCo",
                "Developed biocomposites from bamboo/rice/wood waste. Partners: Renault Nissan, beauty brands",
            )
            .with_fact("Phool", "Transformed temple flower waste into Florafoam packaging")
            .with_fact(
                "Hi-Tech International",
                "First Indian plant-based biopolymer 'Dr Bio' for single-use plastic replacement",
            ),
        KnowledgeEntry::new(EntryKey::topic(Topic::Entry), "Market Entry Strategies")
            .with_list(
                "Regulatory Requirements",
                &[
                    "FDI approval route for biotechnology",
                    "National Biodiversity Authority permissions",
                    "CDSCO (medical), FSSAI (food), BIS certifications",
                ],
            )
            .with_list(
                "Entry Routes",
                &[
                    "Joint ventures (e.g., Sonru BioScience & Veeda Clinical)",
                    "Technology transfer (CSIR Scientist Entrepreneurship Scheme)",
                    "Acquisition of local players",
                ],
            )
            .with_list(
                "Do's",
                &[
                    "Obtain NBA approvals for biological resources",
                    "Register for GST and understand transfer pricing",
                    "File patents/trademarks early",
                    "Build strong local partnerships",
                    "Adapt products to local needs",
                ],
            )
            .with_list(
                "Don'ts",
                &[
                    "Underestimate compliance requirements",
                    "Ignore environmental regulations",
                    "Rush regulatory approvals",
                    "Neglect IP protection",
                    "Attempt independent operations without local partners",
                ],
            ),
        KnowledgeEntry::new(EntryKey::topic(Topic::Local), "Local Collaboration Partners")
            .with_list(
                "Municipal Bodies",
                &[
                    "Mumbai Metropolitan Region (Dutch partnerships)",
                    "Greater Chennai Corporation (Urban Ocean program)",
                    "Surat Municipal Corporation (PPP models)",
                ],
            )
            .with_list(
                "Research Institutions",
                &[
                    "BIRAC BioNEST (73 incubators, 1M sq ft)",
                    "National Biotechnology Parks (7 locations)",
                    "ICAR (agricultural biomass research)",
                ],
            )
            .with_list(
                "Industrial Zones",
                &[
                    "SEZs (centralized waste management)",
                    "Industrial Estates (common treatment facilities)",
                ],
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_topic_and_sector() {
        let store = builtin_store();
        for topic in Topic::ALL {
            if topic != Topic::Sector {
                assert!(store.topic(topic).is_some(), "missing topic {}", topic);
            }
        }
        for sector in Sector::ALL {
            assert!(store.sector(sector).is_some(), "missing sector {}", sector);
        }
        assert_eq!(store.source(), &StoreSource::Builtin);
    }

    #[test]
    fn test_partnership_lists_spelled_consistently() {
        let store = builtin_store();
        let partnerships = store.topic(Topic::Partnership).unwrap();
        assert_eq!(partnerships.list("government").unwrap().items.len(), 3);
    }
}
