use crate::components::icons::PrivacyIcon;
use crate::config::{BRAND_GREEN, BRAND_GREY};

/// Nav bar entries; each scrolls to the section whose id is derived from the label.
pub const NAV_ITEMS: [&str; 4] = ["Problem", "H2 System", "Privacy", "How It Works"];

pub struct Stat {
    pub end: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 2] = [
    Stat {
        end: 982,
        suffix: "k",
        label: "UK Citizens Involved",
    },
    Stat {
        end: 60,
        suffix: "%",
        label: "Risk Probability",
    },
];

pub struct SystemPart {
    pub title: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub description: &'static str,
    pub featured: bool,
}

pub const SYSTEM_PARTS: [SystemPart; 3] = [
    SystemPart {
        title: "Cam Modules",
        image: "/cam-modules.png",
        alt: "Cam Modules",
        description: "Low-power cameras at key exits. Wake on motion, capture brief images. Escalate to video only when risk is elevated.",
        featured: false,
    },
    SystemPart {
        title: "The H2 Hub",
        image: "/H2-hub.png",
        alt: "H2 AI Hub",
        description: "Local AI brain. Processes everything on-site. Exit detection, behavior patterns, optional identity matching. Zero cloud exposure.",
        featured: true,
    },
    SystemPart {
        title: "Smart Tracker",
        image: "/tracker.png",
        alt: "Smart Tracker",
        description: "Hidden in familiar items. BLE for proximity, GPS/cellular only on confirmed exit. Real-time location when it matters.",
        featured: false,
    },
];

pub struct PrivacyPoint {
    pub icon: PrivacyIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRIVACY_POINTS: [PrivacyPoint; 4] = [
    PrivacyPoint {
        icon: PrivacyIcon::Local,
        title: "Local Processing",
        description: "All AI processing happens on-device. No external servers involved.",
    },
    PrivacyPoint {
        icon: PrivacyIcon::NoCloud,
        title: "Zero Cloud Exposure",
        description: "Video never leaves your home. Complete data sovereignty.",
    },
    PrivacyPoint {
        icon: PrivacyIcon::Consent,
        title: "Consent-Based",
        description: "Identity matching is optional and fully controlled by the carer.",
    },
    PrivacyPoint {
        icon: PrivacyIcon::Minimal,
        title: "Minimal Capture",
        description: "Camera only records when risk is detected. No 24/7 surveillance.",
    },
];

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Motion Detected",
        description: "Cam Module at the door detects movement and wakes from sleep mode to capture a brief image.",
        color: BRAND_GREY,
    },
    Step {
        number: "02",
        title: "AI Analysis",
        description: "H2 Hub processes locally — exit-event detection, behavior patterns, time-of-day risk assessment.",
        color: BRAND_GREEN,
    },
    Step {
        number: "03",
        title: "Smart Alert",
        description: "Carer receives clear notification: \"exit risk\" vs \"confirmed exit\". One-tap confirmation when uncertain.",
        color: BRAND_GREY,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::section_id;

    #[test]
    fn nav_items_point_at_page_sections() {
        let ids: Vec<String> = NAV_ITEMS.iter().map(|label| section_id(label)).collect();
        assert_eq!(ids, ["problem", "h2-system", "privacy", "how-it-works"]);
    }

    #[test]
    fn only_the_hub_is_featured() {
        let featured: Vec<&str> = SYSTEM_PARTS.iter().filter(|p| p.featured).map(|p| p.title).collect();
        assert_eq!(featured, ["The H2 Hub"]);
    }

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<&str> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, ["01", "02", "03"]);
    }
}
