use std::fmt;
use strum_macros::{Display, EnumIter};

/// Visual category of a [`Badge`].
///
/// Each tone resolves to a fixed pair of Tailwind background/foreground classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeTone {
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    Indigo,
    Yellow,
}

impl BadgeTone {
    /// Background and foreground classes for this tone.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Green => "bg-green-100 text-green-800",
            Self::Orange => "bg-orange-100 text-orange-800",
            Self::Purple => "bg-purple-100 text-purple-800",
            Self::Red => "bg-red-100 text-red-800",
            Self::Indigo => "bg-indigo-100 text-indigo-800",
            Self::Yellow => "bg-yellow-100 text-yellow-800",
        }
    }
}

/// A small labeled tag naming a technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl Badge {
    #[must_use]
    pub const fn new(label: &'static str, tone: BadgeTone) -> Self {
        Self { label, tone }
    }
}

/// Status marker rendered in front of a [`FeatureLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusGlyph {
    Check,
}

impl StatusGlyph {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Check => "✅",
        }
    }
}

impl fmt::Display for StatusGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bullet entry describing a claimed capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureLine {
    pub glyph: Option<StatusGlyph>,
    pub text: &'static str,
}

impl FeatureLine {
    /// A line prefixed with the check glyph.
    #[must_use]
    pub const fn checked(text: &'static str) -> Self {
        Self { glyph: Some(StatusGlyph::Check), text }
    }
}

impl fmt::Display for FeatureLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.glyph {
            Some(glyph) => write!(f, "{glyph} {}", self.text),
            None => f.write_str(self.text),
        }
    }
}

/// Everything the profile page displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub badges: &'static [Badge],
    pub features_heading: &'static str,
    pub features: &'static [FeatureLine],
}

pub const PROFILE: Profile = Profile {
    name: "David Vizena",
    title: "DevOps Engineer | Cloud Architect",
    intro: "Welcome to my CI/CD Pipeline Portfolio! This application demonstrates modern DevOps \
            practices including automated testing, containerization, Kubernetes orchestration, \
            and GitHub Actions CI/CD.",
    badges: &[
        Badge::new("React 18", BadgeTone::Blue),
        Badge::new("Tailwind CSS", BadgeTone::Green),
        Badge::new("Docker", BadgeTone::Orange),
        Badge::new("Kubernetes", BadgeTone::Purple),
        Badge::new("GitHub Actions", BadgeTone::Red),
        Badge::new("CI/CD Pipeline", BadgeTone::Indigo),
        Badge::new("AWS EKS", BadgeTone::Yellow),
    ],
    features_heading: "🚀 CI/CD Pipeline Features",
    features: &[
        FeatureLine::checked("Automated testing with npm test"),
        FeatureLine::checked("Docker containerization with multi-stage builds"),
        FeatureLine::checked("Kubernetes deployment with health checks"),
        FeatureLine::checked("GitHub Actions CI/CD automation"),
        FeatureLine::checked("Free-tier optimized for AWS EKS"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tone_classes_follow_tone_name() {
        for tone in BadgeTone::iter() {
            assert_eq!(tone.classes(), format!("bg-{tone}-100 text-{tone}-800"));
        }
    }

    #[test]
    fn feature_line_display() {
        assert_eq!(FeatureLine::checked("Ships").to_string(), "✅ Ships");
        assert_eq!(FeatureLine { glyph: None, text: "Ships" }.to_string(), "Ships");
    }

    #[test]
    fn intro_line_continuations_collapse_to_single_spaces() {
        assert!(!PROFILE.intro.contains("  "));
        assert!(PROFILE.intro.starts_with("Welcome to my CI/CD Pipeline Portfolio! This"));
        assert!(PROFILE.intro.ends_with("and GitHub Actions CI/CD."));
    }
}
