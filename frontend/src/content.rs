use crate::scroll::{ConfigError, Stage};

const PERFORMANCE_STAGES_JSON: &str = include_str!("../content/performance_stages.json");

pub fn performance_stages() -> Result<Vec<Stage>, ConfigError> {
    serde_json::from_str(PERFORMANCE_STAGES_JSON).map_err(|e| ConfigError::MalformedContent(e.to_string()))
}

/// In-page anchor ids on the home page, top to bottom.
pub mod anchor {
    pub const OVERVIEW: &str = "overview";
    pub const GALLERY: &str = "gallery";
    pub const PERFORMANCE: &str = "performance";
    pub const DISPLAY: &str = "display";
    pub const FEATURES: &str = "features";
    pub const BUY: &str = "buy";

    pub const ALL: [&str; 6] = [OVERVIEW, GALLERY, PERFORMANCE, DISPLAY, FEATURES, BUY];
}

#[derive(Clone, Copy, PartialEq)]
pub enum Persona {
    Vanguard,
    Cinema,
    Architect,
}

impl Persona {
    pub fn class(self) -> &'static str {
        match self {
            Persona::Vanguard => "accent-blue",
            Persona::Cinema => "accent-purple",
            Persona::Architect => "accent-emerald",
        }
    }
}

pub struct LabelValue {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_PERSONAS: [LabelValue; 3] = [
    LabelValue { label: "Vanguard", value: "140W TGP Pro" },
    LabelValue { label: "Cinema", value: "Lumina 10-Bit" },
    LabelValue { label: "Architect", value: "AI Neural Core" },
];

pub struct GalleryFeature {
    pub title: &'static str,
    pub title_muted: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub persona: Persona,
}

pub const GALLERY: [GalleryFeature; 3] = [
    GalleryFeature {
        title: "Built for",
        title_muted: "Gaming",
        subtitle: "Input Architecture",
        description: "A stunning RGB per-key tactile layout. Optimized for high-speed response and extreme durability.",
        image: "/gallery/img6.png",
        persona: Persona::Vanguard,
    },
    GalleryFeature {
        title: "Game-Changing",
        title_muted: "Sound",
        subtitle: "Sonic Immersion",
        description: "Advanced spatial audio turns every frequency into a competitive advantage.",
        image: "/gallery/img5.png",
        persona: Persona::Cinema,
    },
    GalleryFeature {
        title: "Compete",
        title_muted: "& Connect",
        subtitle: "Systems Architecture",
        description: "Equipped with Wi-Fi 7 Extreme and dual Thunderbolt 4 lanes for absolute data mastery.",
        image: "/gallery/img3.jpg",
        persona: Persona::Architect,
    },
];

pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: &'static str,
}

pub const PERFORMANCE_STATS: [StatCard; 3] = [
    StatCard {
        label: "Architecture",
        value: "Hybrid 3D",
        sub: "Performance x Efficiency cores optimized for battery life and raw speed.",
    },
    StatCard {
        label: "Processing",
        value: "16 Cores",
        sub: "22 Threads. Up to 5.1 GHz Turbo Boost for instant responsiveness.",
    },
    StatCard {
        label: "Intelligence",
        value: "11 TOPS",
        sub: "Integrated NPU for local AI acceleration without cloud latency.",
    },
];

pub const PORTS: [LabelValue; 4] = [
    LabelValue { label: "Connectivity", value: "Thunderbolt 4" },
    LabelValue { label: "Transfer", value: "USB 3.2 Gen 2" },
    LabelValue { label: "Display Out", value: "HDMI 2.1 TMDS" },
    LabelValue { label: "Storage", value: "SD Express 7.0" },
];

pub struct Model {
    pub name: &'static str,
    pub tagline: &'static str,
    pub processor: &'static str,
    pub gpu: &'static str,
    pub ram: &'static str,
    pub storage: &'static str,
    pub display: &'static str,
    pub price: &'static str,
    pub mrp: &'static str,
    pub emi: &'static str,
    pub recommended: bool,
}

impl Model {
    pub fn specs(&self) -> [LabelValue; 5] {
        [
            LabelValue { label: "Processor", value: self.processor },
            LabelValue { label: "Graphics", value: self.gpu },
            LabelValue { label: "Memory", value: self.ram },
            LabelValue { label: "Storage", value: self.storage },
            LabelValue { label: "Display", value: self.display },
        ]
    }
}

pub const MODELS: [Model; 3] = [
    Model {
        name: "ZenBook 14 OLED",
        tagline: "The Essential Classic",
        processor: "Intel Core Ultra 5",
        gpu: "Intel Arc Graphics",
        ram: "16GB LPDDR5X",
        storage: "1TB NVMe SSD",
        display: "14\" 3K 120Hz",
        price: "₹96,990",
        mrp: "₹1,09,990",
        emi: "₹4,650/mo",
        recommended: false,
    },
    Model {
        name: "ZenBook Pro 14",
        tagline: "The Creator Standard",
        processor: "Intel Core Ultra 7",
        gpu: "NVIDIA RTX 4050",
        ram: "32GB LPDDR5X",
        storage: "1TB NVMe SSD",
        display: "14.5\" 2.8K 120Hz",
        price: "₹1,44,990",
        mrp: "₹1,69,990",
        emi: "₹6,900/mo",
        recommended: true,
    },
    Model {
        name: "ZenBook Pro 16X",
        tagline: "Desktop Replacement",
        processor: "Intel Core i9-13900H",
        gpu: "NVIDIA RTX 4070",
        ram: "64GB LPDDR5X",
        storage: "2TB NVMe SSD",
        display: "16\" 4K OLED Touch",
        price: "₹2,19,990",
        mrp: "₹2,49,990",
        emi: "₹10,500/mo",
        recommended: false,
    },
];

pub const PROMISES: [LabelValue; 4] = [
    LabelValue { label: "Free Shipping", value: "On all orders" },
    LabelValue { label: "Secure Payment", value: "256-bit SSL Encrypted" },
    LabelValue { label: "Official Warranty", value: "2 Years Global" },
    LabelValue { label: "Easy Returns", value: "7 Days Replacement" },
];

pub struct CompareRow {
    pub feature: &'static str,
    pub vanguard: &'static str,
    pub cinema: &'static str,
    pub architect: &'static str,
}

pub const COMPARISON: [CompareRow; 5] = [
    CompareRow {
        feature: "Processor",
        vanguard: "Core i9 HX (14th Gen)",
        cinema: "Core i9 (Ultra Series)",
        architect: "Core i7 (vPro Elite)",
    },
    CompareRow {
        feature: "GPU Power",
        vanguard: "RTX 4090 (175W TGP)",
        cinema: "RTX 4080 (Studio)",
        architect: "RTX 4070 (Efficiency)",
    },
    CompareRow {
        feature: "Display",
        vanguard: "120Hz Lumina OLED",
        cinema: "10-Bit ProArt Calibrated",
        architect: "EyeCare Matte 4K",
    },
    CompareRow {
        feature: "Thermal",
        vanguard: "Active Vapor Chamber",
        cinema: "Silent Fan Profile",
        architect: "Passive Carbon Cooling",
    },
    CompareRow {
        feature: "Network",
        vanguard: "Wi-Fi 7 + 2.5G Eth",
        cinema: "Wi-Fi 7 + Dual TB4",
        architect: "Wi-Fi 7 + 5G LTE",
    },
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: [&'static str; 4],
    pub persona: Option<Persona>,
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        title: "The Vanguard",
        links: ["Victus Extreme 16", "Performance Tuning", "DirectStorage Hub", "Titan Accessories"],
        persona: Some(Persona::Vanguard),
    },
    FooterColumn {
        title: "The Studio",
        links: ["Lumina OLED Tech", "Calman Verified", "ProArt Creator Hub", "Software Suite"],
        persona: Some(Persona::Cinema),
    },
    FooterColumn {
        title: "The Architect",
        links: ["Enterprise Security", "AI Productivity", "Sustainability Report", "Investor Relations"],
        persona: Some(Persona::Architect),
    },
    FooterColumn {
        title: "Concierge",
        links: ["Product Registration", "Titan Priority Support", "Service Centers", "Contact Us"],
        persona: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{ScrollStageController, StageSet};
    use crate::config::PERFORMANCE_SPRING;

    #[test]
    fn bundled_stages_parse_and_validate() {
        let stages = performance_stages().unwrap();
        let titles: Vec<_> = stages.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Velocity", "Precision", "Intelligence"]);
        assert!(StageSet::new(stages.clone()).is_ok());
        assert!(ScrollStageController::new(stages, PERFORMANCE_SPRING).is_ok());
    }

    #[test]
    fn anchors_are_unique() {
        let mut ids = anchor::ALL.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), anchor::ALL.len());
        assert!(anchor::ALL.contains(&anchor::OVERVIEW));
        assert!(anchor::ALL.contains(&anchor::DISPLAY));
    }

    #[test]
    fn exactly_one_recommended_model() {
        assert_eq!(MODELS.iter().filter(|m| m.recommended).count(), 1);
    }
}
