//! Vendor-prefix support reported by the simulated platform.

/// CSS features whose completion events historically shipped behind
/// vendor prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssFeature {
    Animation,
    Transition,
}

/// Which vendor's flavor of a feature the platform implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VendorPrefix {
    #[default]
    Standard,
    WebKit,
    Moz,
    Opera,
}

/// Per-feature prefix support, seeded by the embedder or tests.
///
/// `None` means the feature is wholly unsupported, the way a feature probe
/// reports a property with no working implementation at all. Defaults to
/// unprefixed support for everything.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSupport {
    animation: Option<VendorPrefix>,
    transition: Option<VendorPrefix>,
}

impl Default for FeatureSupport {
    fn default() -> Self {
        Self {
            animation: Some(VendorPrefix::Standard),
            transition: Some(VendorPrefix::Standard),
        }
    }
}

impl FeatureSupport {
    pub fn prefix(&self, feature: CssFeature) -> Option<VendorPrefix> {
        match feature {
            CssFeature::Animation => self.animation,
            CssFeature::Transition => self.transition,
        }
    }

    pub fn set_prefix(&mut self, feature: CssFeature, prefix: VendorPrefix) {
        match feature {
            CssFeature::Animation => self.animation = Some(prefix),
            CssFeature::Transition => self.transition = Some(prefix),
        }
    }

    pub fn set_unsupported(&mut self, feature: CssFeature) {
        match feature {
            CssFeature::Animation => self.animation = None,
            CssFeature::Transition => self.transition = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_standard() {
        let support = FeatureSupport::default();
        assert_eq!(
            support.prefix(CssFeature::Animation),
            Some(VendorPrefix::Standard)
        );
        assert_eq!(
            support.prefix(CssFeature::Transition),
            Some(VendorPrefix::Standard)
        );
    }

    #[test]
    fn test_prefixes_are_tracked_per_feature() {
        let mut support = FeatureSupport::default();
        support.set_prefix(CssFeature::Animation, VendorPrefix::WebKit);
        assert_eq!(
            support.prefix(CssFeature::Animation),
            Some(VendorPrefix::WebKit)
        );
        assert_eq!(
            support.prefix(CssFeature::Transition),
            Some(VendorPrefix::Standard)
        );
    }

    #[test]
    fn test_unsupported_clears_the_prefix() {
        let mut support = FeatureSupport::default();
        support.set_unsupported(CssFeature::Transition);
        assert_eq!(support.prefix(CssFeature::Transition), None);
        assert_eq!(
            support.prefix(CssFeature::Animation),
            Some(VendorPrefix::Standard)
        );
    }
}
