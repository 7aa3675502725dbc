//! Copy for the landing page. Rendered as-is.

use crate::navigation::SectionId;
use crate::state::ProductTab;

pub const BRAND: &str = "roamthewrld";
pub const FOOTER: &str = "© 2025 roamthewrld. Crafted for the extraordinary.";

/// Nav bar order. Differs from the tracker's iteration order.
pub const NAV_ITEMS: [SectionId; 6] = [
    SectionId::Hero,
    SectionId::About,
    SectionId::Product,
    SectionId::Features,
    SectionId::History,
    SectionId::Contact,
];

/// Anchor of the feature grid, target of every "Back to Features" button.
pub const FEATURES_ANCHOR: &str = "features";
pub const PRODUCT_SHOWCASE_ANCHOR: &str = "roam-consumer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Red,
    Amber,
    Purple,
    Green,
    Orange,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Red => "accent-red",
            Accent::Amber => "accent-amber",
            Accent::Purple => "accent-purple",
            Accent::Green => "accent-green",
            Accent::Orange => "accent-orange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    /// Id of the detail section the card's "Learn More" scrolls to.
    pub anchor: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDetail {
    pub anchor: &'static str,
    pub accent: Accent,
    pub headline: &'static str,
    pub icon: &'static str,
    pub panel_title: &'static str,
    pub panel_caption: &'static str,
    pub points: &'static [Card],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub accent: Accent,
    pub paragraphs: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

pub struct Hero;

impl Hero {
    pub const TITLE: &'static str = "Roam";
    pub const TITLE_ACCENT: &'static str = "The World";
    pub const SUBTITLE: &'static str =
        "Redefining exploration through innovation, design, and the pursuit of extraordinary experiences.";
    pub const CTA: &'static str = "Explore More";
}

pub const ABOUT_TITLE: &str = "Roam Out. Roam Safe. Roam Connected.";
pub const ABOUT_BODY: &str = "Roam exists to make going out and taking risks feel safer without the hassle: a consent-first bracelet that turns trusted friends into a quiet, always-there support system. With simple, opt-in signals like heart-rate trends, BAC cues and quick check-ins, it keeps your crew in sync without the noise of social media. We design for the moments that matter: the nudge to pause, the ping to regroup, the confidence to explore. Share only what you choose, for as long as you choose.";

pub const ABOUT_CARDS: [Card; 3] = [
    Card {
        icon: "👥",
        title: "Social Connection",
        description: "Connect with friends and family in real time. Share your status, location, and more.",
    },
    Card {
        icon: "🛡️",
        title: "Safety First",
        description: "Advanced health monitoring, BAC sensing, and emergency alerts, keeping you and your friends safe.",
    },
    Card {
        icon: "🏔️",
        title: "You're in Control",
        description: "Check and share your status on your terms. Only to people you choose, only when you want.",
    },
];

pub const PRODUCT_TITLE: &str = "Introducing Roam Beta";
pub const PRODUCT_BODY: &str =
    "Designed for the moments that matter. Sleek, protective, and always ready to keep you safe.";

const BRACELET_FEATURES: [Card; 4] = [
    Card {
        icon: "🔗",
        title: "ECG and BAC Sensor in Clasp",
        description: "Advanced sensors seamlessly integrated into the clasp design for maximum functionality without compromising style.",
    },
    Card {
        icon: "✨",
        title: "Sleek, Slim Design",
        description: "No screen for times that count and passively keep you protected. Minimalist design that goes unnoticed.",
    },
    Card {
        icon: "🛡️",
        title: "Nylon/Kevlar Threading",
        description: "Premium materials for the best protection. Durable, lightweight, and built to withstand any adventure.",
    },
    Card {
        icon: "⚡",
        title: "Wireless Charging",
        description: "Just place it and go. No cables, no hassle. Effortless charging that keeps you always ready.",
    },
];

const SENSOR_FEATURES: [Card; 4] = [
    Card {
        icon: "❤️",
        title: "ECG Heart Rate Monitoring",
        description: "Continuous monitoring with medical-grade accuracy, providing real-time insights into your cardiovascular health.",
    },
    Card {
        icon: "🍷",
        title: "BAC Alcohol Detection",
        description: "Advanced transdermal sensing technology that detects alcohol through your skin for accurate safety monitoring.",
    },
    Card {
        icon: "🧠",
        title: "AI Signal Processing",
        description: "Intelligent algorithms that analyze sensor data in real-time, providing accurate readings and predictive insights.",
    },
    Card {
        icon: "📡",
        title: "Bluetooth Connectivity",
        description: "Seamless data transmission to your phone, keeping you connected and informed at all times.",
    },
];

pub fn product_features(tab: ProductTab) -> &'static [Card] {
    match tab {
        ProductTab::Bracelet => &BRACELET_FEATURES,
        ProductTab::Sensors => &SENSOR_FEATURES,
    }
}

/// Image shown next to the feature list: (src, alt).
pub fn product_image(tab: ProductTab) -> (&'static str, &'static str) {
    match tab {
        ProductTab::Bracelet => ("/images/bracelet.png", "Bracelet Design"),
        ProductTab::Sensors => ("/images/IntClasp.png", "Interior Clasp Sensors"),
    }
}

pub const FEATURES_TITLE: &str = "Explore Our Features";
pub const FEATURES_BODY: &str = "Dive deep into each feature and discover how Roam enhances your safety, connectivity, and peace of mind.";

pub const FEATURE_CARDS: [FeatureCard; 4] = [
    FeatureCard {
        icon: "❤️",
        title: "Heart Rate Monitoring",
        description: "Continuous ECG monitoring with emergency alerts",
        accent: Accent::Red,
        anchor: "heart-rate-monitoring",
    },
    FeatureCard {
        icon: "🍷",
        title: "BAC Sensing",
        description: "Transdermal alcohol detection for safety",
        accent: Accent::Amber,
        anchor: "bac-sensing",
    },
    FeatureCard {
        icon: "🤖",
        title: "AI Features",
        description: "Learn your patterns and provide intelligent safety feedback",
        accent: Accent::Purple,
        anchor: "ai-features",
    },
    FeatureCard {
        icon: "👥",
        title: "Accountability Mode",
        description: "Controlled sharing with trusted friends",
        accent: Accent::Purple,
        anchor: "accountability-mode",
    },
];

pub const FEATURE_DETAILS: [FeatureDetail; 4] = [
    FeatureDetail {
        anchor: "heart-rate-monitoring",
        accent: Accent::Red,
        headline: "Real-Time Health Monitoring",
        icon: "❤️",
        panel_title: "Heart Rate Monitor",
        panel_caption: "Real-time ECG display",
        points: &[
            Card {
                icon: "📊",
                title: "Continuous Tracking",
                description: "Monitor your heart rate 24/7 with medical-grade accuracy, providing insights into your cardiovascular health patterns.",
            },
            Card {
                icon: "⚡",
                title: "ECG Technology",
                description: "Advanced ECG sensors detect irregular heart rhythms and potential cardiac events, offering early warning capabilities.",
            },
            Card {
                icon: "🚨",
                title: "Emergency Alerts",
                description: "Automatic detection of concerning heart rate patterns triggers immediate alerts to your emergency contacts.",
            },
        ],
    },
    FeatureDetail {
        anchor: "bac-sensing",
        accent: Accent::Amber,
        headline: "Smart Alcohol Monitoring",
        icon: "🍷",
        panel_title: "BAC Sensor",
        panel_caption: "Transdermal detection",
        points: &[
            Card {
                icon: "🔬",
                title: "Transdermal Detection",
                description: "Advanced sensors detect alcohol through your skin, providing continuous monitoring without invasive methods.",
            },
            Card {
                icon: "⏱️",
                title: "Real-Time Alerts",
                description: "Get instant notifications when your BAC reaches concerning levels, helping you make informed decisions.",
            },
            Card {
                icon: "👥",
                title: "Friend Notifications",
                description: "Automatically alert trusted friends when it's time to pause, ensuring your safety in social situations.",
            },
        ],
    },
    FeatureDetail {
        anchor: "ai-features",
        accent: Accent::Purple,
        headline: "Your Personal AI Guardian",
        icon: "🤖",
        panel_title: "AI Guardian",
        panel_caption: "Learns what normal looks like for you",
        points: &[
            Card {
                icon: "🧠",
                title: "Pattern Learning",
                description: "AI analyzes your ECG, BAC, and motion data to understand your unique physiological patterns and habits.",
            },
            Card {
                icon: "🔮",
                title: "Predictive Alerts",
                description: "Detect potential problems before they occur and receive subtle, context-aware feedback to break harmful habits.",
            },
            Card {
                icon: "📳",
                title: "Haptic Feedback",
                description: "Gentle vibrations provide discreet cues during social situations, enhancing awareness without demanding attention.",
            },
        ],
    },
    FeatureDetail {
        anchor: "accountability-mode",
        accent: Accent::Purple,
        headline: "Controlled Sharing",
        icon: "👥",
        panel_title: "Trusted Circle",
        panel_caption: "Share on your terms",
        points: &[
            Card {
                icon: "🔒",
                title: "Privacy First",
                description: "You control exactly what information is shared and with whom. No data is transmitted without your explicit consent.",
            },
            Card {
                icon: "🤝",
                title: "Trusted Circle",
                description: "Build your network of trusted friends and family who can receive your status updates and location when needed.",
            },
            Card {
                icon: "⚙️",
                title: "Customizable Settings",
                description: "Set different sharing levels for different situations, from full transparency to minimal updates.",
            },
        ],
    },
];

pub const HISTORY_TITLE: &str = "The Journey";
pub const HISTORY_BODY: &str =
    "From concept to reality. Explore the evolution of Roam through our development milestones.";

pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        title: "16 Iterations to Perfection",
        accent: Accent::Blue,
        paragraphs: &["The path to the perfect prototype wasn't straightforward. It took 16 different iterations, each one teaching us something new about form, function, and user experience. Every prototype brought us closer to the ideal balance of comfort, style, and technology."],
        highlights: &["Form factor optimization", "Sensor placement refinement", "Material durability testing"],
    },
    Milestone {
        title: "The First Working Prototype",
        accent: Accent::Green,
        paragraphs: &["This was the moment everything came together. The first working bracelet that proved our concept was possible. It wasn't perfect, but it was real: tangible proof that a social safety bracelet could become reality."],
        highlights: &[],
    },
    Milestone {
        title: "MQ303B Gas Sensor Testing",
        accent: Accent::Orange,
        paragraphs: &["Before developing the transdermal sensor, we extensively tested the MQ303B gas sensor to understand alcohol detection capabilities. This phase was crucial for validating our approach and gathering data to train our AI models for accurate readings."],
        highlights: &[],
    },
    Milestone {
        title: "The First Transdermal Ethanol Sensor Prototype",
        accent: Accent::Amber,
        paragraphs: &[
            "This was the step that moved our bracelet from detecting alcohol in the air to sensing it directly through the skin. A MicruX ceramic screen-printed electrode coated with Alcohol Oxidase and a Prussian Blue mediator measures ethanol molecules diffusing through sweat vapor in real time.",
            "A gas-permeable ePTFE membrane shields the chemistry from sweat and oils while allowing ethanol to pass. The signal is amplified by an LMP91000 potentiostat and processed on a Seeed XIAO nRF52840 for Bluetooth streaming.",
        ],
        highlights: &["Skin-contact ethanol sensing", "Low-power potentiostat front end", "Bluetooth streaming"],
    },
];

pub const CONTACT_TITLE: &str = "Connect With Us";
pub const CONTACT_BODY: &str =
    "Ready to embark on your next adventure? Let's create something extraordinary together.";
pub const CONTACT_STATUS: &str = "Currently in prototype development. Join us on this journey!";
pub const CONTACT_CTA: &str = "Get In Touch";
pub const CONTACT_EMAIL: &str = "mailto:hello@roamthewrld.com";
pub const SOCIALS: [&str; 3] = ["Twitter", "LinkedIn", "Instagram"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_feature_card_has_a_detail_section() {
        let details: HashSet<_> = FEATURE_DETAILS.iter().map(|d| d.anchor).collect();
        for card in FEATURE_CARDS {
            assert!(details.contains(card.anchor), "{} has no detail section", card.anchor);
        }
    }

    #[test]
    fn anchors_do_not_collide_with_tracked_sections() {
        let anchors = FEATURE_DETAILS
            .iter()
            .map(|d| d.anchor)
            .chain([PRODUCT_SHOWCASE_ANCHOR]);
        for anchor in anchors {
            assert!(anchor.parse::<SectionId>().is_err(), "{} shadows a tracked section", anchor);
        }
        assert!(FEATURES_ANCHOR.parse::<SectionId>().is_ok());
    }

    #[test]
    fn nav_lists_every_section_once() {
        let unique: HashSet<_> = NAV_ITEMS.iter().collect();
        assert_eq!(unique.len(), SectionId::ALL.len());
    }

    #[test]
    fn both_tabs_have_content() {
        for tab in ProductTab::ALL {
            assert_eq!(product_features(tab).len(), 4);
            assert!(!product_image(tab).0.is_empty());
        }
    }
}
