use crate::navigation::section::SectionId;

const DEFAULT_PROBE_LINE_PX: f64 = 100.0;
const DEFAULT_SOLID_NAV_AFTER_PX: f64 = 50.0;
const DEFAULT_PARALLAX_FACTOR: f64 = 0.5;

/// Layout constants shared by the tracker and the views.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Distance of the probe line from the top of the viewport.
    pub probe_line_px: f64,
    /// The nav bar turns opaque once the page scrolls past this offset.
    pub solid_nav_after_px: f64,
    pub parallax_factor: f64,
    pub tracked_sections: &'static [SectionId],
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            probe_line_px: DEFAULT_PROBE_LINE_PX,
            solid_nav_after_px: DEFAULT_SOLID_NAV_AFTER_PX,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            tracked_sections: &SectionId::ALL,
        }
    }
}

impl SiteConfig {
    /// Defaults, with the probe line overridable at build time through
    /// `ROAM_PROBE_LINE_PX`.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(raw) = option_env!("ROAM_PROBE_LINE_PX") {
            config.probe_line_px = parse_probe_line(raw);
        }
        config
    }
}

fn parse_probe_line(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(px) if px.is_finite() && px >= 0.0 => px,
        _ => {
            log::warn!(
                "Ignoring invalid ROAM_PROBE_LINE_PX {:?}, using {}",
                raw,
                DEFAULT_PROBE_LINE_PX
            );
            DEFAULT_PROBE_LINE_PX
        }
    }
}

pub fn get_config() -> SiteConfig {
    SiteConfig::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.probe_line_px, 100.0);
        assert_eq!(config.solid_nav_after_px, 50.0);
        assert_eq!(config.tracked_sections.first(), Some(&SectionId::Hero));
        assert_eq!(config.tracked_sections.len(), 6);
    }

    #[test]
    fn probe_line_override_rejects_garbage() {
        assert_eq!(parse_probe_line(" 120 "), 120.0);
        assert_eq!(parse_probe_line("-4"), DEFAULT_PROBE_LINE_PX);
        assert_eq!(parse_probe_line("NaN"), DEFAULT_PROBE_LINE_PX);
        assert_eq!(parse_probe_line("top"), DEFAULT_PROBE_LINE_PX);
    }
}
